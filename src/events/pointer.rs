use crate::input;
use backdrop_core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole document so the field reacts even while
/// the cursor is above page content.
pub fn wire_pointer_tracking(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
) {
    wire_mousemove(document, canvas, pointer.clone());
    wire_mouseleave(document, pointer);
}

fn wire_mousemove(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::pointer_surface_px(&ev, &canvas);
        pointer.borrow_mut().move_to(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move || {
        pointer.borrow_mut().leave();
    }) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
