use crate::core::constants::PALETTES;
use crate::core::{progress, visual};
use crate::dom;
use crate::events::{PointerState, ScrollState};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub pointer: Rc<RefCell<PointerState>>,
    pub scroll: Rc<RefCell<ScrollState>>,

    pub blob: web::Element,
    pub blob_surface: web::Element,
    pub blob_ripple: web::Element,
    pub blob_echo: web::Element,
    pub particles: Vec<web::Element>,

    pub section_count: usize,
    pub spring: progress::Spring,
    pub current_section: usize,

    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        let raw = self.scroll.borrow().progress;
        let smoothed = self.spring.step(raw, dt_sec);

        // The discrete chapter index follows the raw signal so gradient
        // changes land with the scroll, not after the spring settles.
        let index = progress::section_index(raw, self.section_count);
        if index != self.current_section {
            self.current_section = index;
            log::info!("[scroll] section {} (p={:.3})", index, raw);
        }

        let (offset, hovering, hover_started) = {
            let p = self.pointer.borrow();
            (p.offset, p.hovering, p.hover_started)
        };

        let scale = visual::blob_scale(smoothed);
        let rotation = visual::blob_rotation_deg(smoothed);
        dom::set_style(&self.blob, &render::blob_style(scale, rotation, offset));

        let radii = visual::morph_radii(elapsed, hovering);
        let palette = &PALETTES[visual::palette_index(self.current_section, PALETTES.len())];
        dom::set_style(
            &self.blob_surface,
            &render::blob_surface_style(&radii, palette),
        );

        if hovering {
            let hover_elapsed = (now - hover_started).as_secs_f32();
            let (ripple_scale, ripple_opacity) = visual::ripple_params(hover_elapsed);
            dom::set_style(
                &self.blob_ripple,
                &render::ripple_style(ripple_scale, ripple_opacity),
            );
            let (echo_scale, echo_opacity) = visual::echo_params(hover_elapsed);
            dom::set_style(&self.blob_echo, &render::echo_style(echo_scale, echo_opacity));
        } else {
            dom::set_style(&self.blob_ripple, "opacity: 0");
            dom::set_style(&self.blob_echo, "opacity: 0");
        }

        for (i, el) in self.particles.iter().enumerate() {
            if let Some(&factor) = visual::PARTICLE_FACTORS.get(i) {
                dom::set_style(el, &render::particle_style(offset, factor));
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
