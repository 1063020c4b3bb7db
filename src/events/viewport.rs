use crate::constants::RESIZE_REFRESH_DEBOUNCE_MS;
use crate::dom;
use crate::frame::{FrameContext, FrameLoop};
use crate::lifecycle::{page_hide_action, PageHideAction};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize the canvas backing store and rebuild the field synchronously.
pub fn wire_field_resize(canvas: &web::HtmlCanvasElement, frame_ctx: Rc<RefCell<FrameContext>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (css, dpr) = dom::sync_canvas_backing_size(&canvas);
        frame_ctx.borrow_mut().resize(css.x, css.y, dpr);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Run `refresh` once resize events have been quiet for the debounce window.
pub fn wire_debounced_refresh(refresh: Rc<dyn Fn()>) {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = pending.take() {
            window.clear_timeout_with_handle(handle);
        }
        let refresh = refresh.clone();
        let pending_fire = pending.clone();
        let fire = Closure::once_into_js(move || {
            pending_fire.set(None);
            refresh();
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            fire.unchecked_ref(),
            RESIZE_REFRESH_DEBOUNCE_MS,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => log::warn!("[resize] setTimeout error: {:?}", e),
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Stop the frame loop when the page is unloaded. Pages entering the
/// back/forward cache keep their loop so it resumes when shown again.
pub fn wire_teardown(frame_loop: Rc<FrameLoop>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        match page_hide_action(ev.persisted(), frame_loop.is_running()) {
            PageHideAction::Stop => frame_loop.stop(),
            PageHideAction::Keep => log::debug!("[frame] pagehide, loop kept"),
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
