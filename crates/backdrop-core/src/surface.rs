use glam::Vec2;

/// Stroke parameters shared by every connector line in a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle<'a> {
    pub color: &'a str,
    pub width: f32,
}

/// 2D drawing capability the field renders into.
///
/// The browser front-end backs this with a canvas context; tests record the
/// calls instead.
pub trait Surface2d {
    fn clear(&mut self, size: Vec2);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32);
    fn stroke_segment(&mut self, from: Vec2, to: Vec2, style: LineStyle<'_>, alpha: f32);
}

/// Alpha of a connector between two particles `dist` apart, or `None` when
/// they are too far apart to be connected.
#[inline]
pub fn connector_alpha(dist: f32, max_dist: f32, max_alpha: f32) -> Option<f32> {
    (max_dist > 0.0 && dist < max_dist).then(|| (1.0 - dist / max_dist) * max_alpha)
}
