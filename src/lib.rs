#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod page;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cocodio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let built = page::build(&document)?;
    log::info!("[page] {} sections mounted", built.section_count);

    // ---------------- Interaction state ----------------
    let pointer = Rc::new(RefCell::new(events::PointerState::new()));
    let scroll = Rc::new(RefCell::new(events::ScrollState::default()));

    events::wire_pointermove(pointer.clone());
    events::wire_hover(&built.blob, pointer.clone());
    events::wire_scroll(scroll.clone());

    // Animation loop driven by requestAnimationFrame
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        pointer,
        scroll,
        blob: built.blob,
        blob_surface: built.blob_surface,
        blob_ripple: built.blob_ripple,
        blob_echo: built.blob_echo,
        particles: built.particles,
        section_count: built.section_count,
        spring: crate::core::progress::Spring::new(
            constants::SPRING_STIFFNESS,
            constants::SPRING_DAMPING,
            constants::SPRING_REST_DELTA,
            0.0,
        ),
        current_section: 0,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
