use crate::core::progress;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Raw (unsmoothed) page scroll progress in [0,1], shared with the frame
/// loop. Smoothing happens there, not here.
#[derive(Clone, Copy, Default)]
pub struct ScrollState {
    pub progress: f32,
}

fn read_progress(window: &web::Window) -> f32 {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f32)
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    progress::scroll_progress(scroll_y, document_height, viewport_height)
}

pub fn wire_scroll(state: Rc<RefCell<ScrollState>>) {
    // Seed with the current position; reloads can land mid-page.
    if let Some(window) = web::window() {
        state.borrow_mut().progress = read_progress(&window);
    }

    // Scrolling moves the signal; resizing changes the track it is measured
    // against. Both re-derive from the current metrics.
    for kind in ["scroll", "resize"] {
        let state = state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if let Some(window) = web::window() {
                state.borrow_mut().progress = read_progress(&window);
            }
        }) as Box<dyn FnMut()>);

        if let Some(wnd) = web::window() {
            _ = wnd.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
