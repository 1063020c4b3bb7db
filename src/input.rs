use glam::Vec2;
use web_sys as web;

/// Client (viewport) coordinates relative to a surface whose top-left corner
/// sits at `origin`, in CSS pixels.
#[inline]
pub fn client_to_surface(client: Vec2, origin: Vec2) -> Vec2 {
    client - origin
}

#[inline]
pub fn pointer_surface_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_surface(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

/// Device-pixel backing size for a CSS size; never zero on either axis.
#[inline]
pub fn backing_size(css: Vec2, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css.x.max(0.0) as f64 * dpr) as u32;
    let h = (css.y.max(0.0) as f64 * dpr) as u32;
    (w.max(1), h.max(1))
}

/// How far the pinned wrapper's top edge has moved above the viewport top.
#[inline]
pub fn scrolled_past(wrapper_top: f64) -> f32 {
    (-wrapper_top) as f32
}
