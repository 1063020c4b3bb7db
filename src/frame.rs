use crate::render::CanvasSurface;
use backdrop_core::{ParticleField, PointerState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub pointer: Rc<RefCell<PointerState>>,
    pub surface: CanvasSurface,
}

impl FrameContext {
    /// One tick: advance against the latest pointer, then draw.
    pub fn frame(&mut self) {
        let pointer = self.pointer.borrow().position();
        self.field.advance(pointer);
        self.field.render(&mut self.surface);
        self.surface.reset_alpha();
    }

    /// Rebuild the field for a new surface size. Runs inside the resize
    /// handler so the next tick never sees stale bounds.
    pub fn resize(&mut self, width: f32, height: f32, dpr: f64) {
        self.surface.set_pixel_ratio(dpr);
        self.field.on_resize(width, height);
        log::info!(
            "[resize] field rebuilt at {:.0}x{:.0} (dpr {:.2})",
            width,
            height,
            dpr
        );
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
///
/// Each tick schedules the next one; [`stop`](Self::stop) cancels the pending
/// frame and releases the tick closure.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            frame_ctx.borrow_mut().frame();
            request_frame(&tick_clone, &pending_tick);
        }) as Box<dyn FnMut()>));
        request_frame(&tick, &pending);
        log::info!("[frame] loop started");
        Self { tick, pending }
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped");
        }
    }
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame error: {:?}", e),
        }
    }
}
