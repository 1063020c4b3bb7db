use glam::Vec2;

/// Last known pointer location in surface pixels, or absent once the pointer
/// has left the tracked surface. Updates are plain overwrites.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Some(Vec2::new(x, y)),
        }
    }

    /// Non-finite coordinates are treated as the pointer leaving.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = (x.is_finite() && y.is_finite()).then_some(Vec2::new(x, y));
    }

    pub fn leave(&mut self) {
        self.position = None;
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}
