use crate::core::visual;
use crate::dom;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Latest pointer-derived state, shared with the frame loop.
#[derive(Clone, Copy)]
pub struct PointerState {
    pub offset: Vec2,
    pub hovering: bool,
    pub hover_started: Instant,
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            hovering: false,
            hover_started: Instant::now(),
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Window-level pointer tracking; every move renormalizes against the current
/// viewport so a resize needs no separate handling here.
pub fn wire_pointermove(state: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(window) = web::window() {
            let viewport = dom::viewport_size(&window);
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            state.borrow_mut().offset = visual::pointer_offset(pos, viewport);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Hover toggles on the blob element. Entry also stamps the hover start time
/// so the ripple and echo loops sample from a fresh phase.
pub fn wire_hover(blob: &web::Element, state: Rc<RefCell<PointerState>>) {
    let enter_state = state.clone();
    let enter = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let mut s = enter_state.borrow_mut();
        s.hovering = true;
        s.hover_started = Instant::now();
        log::info!("[blob] hover start");
    }) as Box<dyn FnMut()>);
    _ = blob.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
    enter.forget();

    let leave = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        state.borrow_mut().hovering = false;
    }) as Box<dyn FnMut()>);
    _ = blob.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
    leave.forget();
}
