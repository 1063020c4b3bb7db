//! Geometry of the pinned horizontal slide track.
//!
//! While the wrapper is pinned, vertical scroll is converted into a
//! horizontal translation of the slide container. Every slide after the
//! first costs half a viewport height of scrolling.

use crate::constants::SCROLL_PER_SLIDE_VIEWPORTS;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalTrack {
    pub slide_count: usize,
    pub viewport: Vec2,
    /// Full scroll width of the slide container.
    pub content_width: f32,
}

impl HorizontalTrack {
    pub fn new(slide_count: usize, viewport: Vec2, content_width: f32) -> Self {
        Self {
            slide_count,
            viewport,
            content_width,
        }
    }

    #[inline]
    pub fn scroll_per_slide(&self) -> f32 {
        self.viewport.y * SCROLL_PER_SLIDE_VIEWPORTS
    }

    /// Vertical distance the wrapper stays pinned for.
    pub fn scroll_distance(&self) -> f32 {
        let extra_slides = self.slide_count.saturating_sub(1) as f32;
        (self.scroll_per_slide() * extra_slides).max(0.0)
    }

    /// Height the wrapper needs so a sticky container stays pinned for the
    /// whole scroll distance.
    pub fn pinned_height(&self) -> f32 {
        self.viewport.y + self.scroll_distance()
    }

    /// Progress in `[0, 1]` given how far the wrapper top has scrolled past
    /// the viewport top.
    pub fn progress(&self, scrolled: f32) -> f32 {
        let distance = self.scroll_distance();
        if distance <= 0.0 || !scrolled.is_finite() {
            return 0.0;
        }
        (scrolled / distance).clamp(0.0, 1.0)
    }

    /// Horizontal offset of the container (non-positive).
    pub fn translate_x(&self, progress: f32) -> f32 {
        let overflow = (self.content_width - self.viewport.x).max(0.0);
        -overflow * progress.clamp(0.0, 1.0)
    }

    /// Slide currently in view, or `None` for an empty track.
    pub fn slide_index(&self, progress: f32) -> Option<usize> {
        if self.slide_count == 0 {
            return None;
        }
        let raw = (progress.clamp(0.0, 1.0) * self.slide_count as f32).floor() as usize;
        Some(raw.min(self.slide_count - 1))
    }
}
