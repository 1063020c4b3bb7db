use crate::input;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Viewport size in CSS pixels, zero when unavailable.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Vec2::new(read(window.inner_width()), read(window.inner_height()))
}

fn html_elements(list: Result<web::NodeList, JsValue>) -> Vec<web::HtmlElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    html_elements(document.query_selector_all(selector))
}

#[inline]
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    html_elements(root.query_selector_all(selector))
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Final visible state without any transition.
pub fn show_now(el: &web::HtmlElement) {
    let style = el.style();
    _ = style.set_property("opacity", "1");
    _ = style.set_property("transform", "none");
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio. Returns the CSS size (the simulation's coordinate space) and the
/// ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (Vec2, f64) {
    let Some(w) = web::window() else {
        return (Vec2::new(canvas.width() as f32, canvas.height() as f32), 1.0);
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let mut css = Vec2::new(rect.width() as f32, rect.height() as f32);
    if css.x <= 0.0 || css.y <= 0.0 {
        // Not laid out yet; the backdrop covers the viewport.
        css = viewport_size(&w);
    }
    let (w_px, h_px) = input::backing_size(css, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (css, dpr)
}
