use backdrop_core::{LineStyle, Surface2d};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D context behind the field's draw calls.
///
/// Coordinates arrive in CSS pixels; the context transform scales them to
/// the device-pixel backing store.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx, dpr: 1.0 })
    }

    pub fn set_pixel_ratio(&mut self, dpr: f64) {
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    /// Leave the context at full alpha for anything drawn outside the field.
    pub fn reset_alpha(&self) {
        self.ctx.set_global_alpha(1.0);
    }
}

impl Surface2d for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        _ = self
            .ctx
            .set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.ctx.set_global_alpha(1.0);
        self.ctx
            .clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        self.ctx.begin_path();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(color);
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, style: LineStyle<'_>, alpha: f32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(style.color);
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_line_width(style.width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
