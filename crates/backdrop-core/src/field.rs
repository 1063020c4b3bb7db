use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::{connector_alpha, LineStyle, Surface2d};
use glam::Vec2;
use rand::prelude::*;

/// Fixed-size particle collection advanced once per frame.
///
/// The driver calls [`advance`](Self::advance) then [`render`](Self::render)
/// on every tick and [`on_resize`](Self::on_resize) whenever the surface
/// changes size.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    config: FieldConfig,
    bounds: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, config: FieldConfig) -> Self {
        Self::with_rng(width, height, config, StdRng::from_entropy())
    }

    /// Deterministic field for reproducible layouts.
    pub fn with_seed(width: f32, height: f32, config: FieldConfig, seed: u64) -> Self {
        Self::with_rng(width, height, config, StdRng::seed_from_u64(seed))
    }

    /// Field over hand-placed particles. Positions are clamped into bounds.
    pub fn from_particles(
        width: f32,
        height: f32,
        config: FieldConfig,
        mut particles: Vec<Particle>,
    ) -> Self {
        let bounds = surface_bounds(width, height);
        for p in &mut particles {
            p.pos = p.pos.clamp(Vec2::ZERO, bounds);
        }
        Self {
            particles,
            config,
            bounds,
            rng: StdRng::from_entropy(),
        }
    }

    fn with_rng(width: f32, height: f32, config: FieldConfig, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            config,
            bounds: surface_bounds(width, height),
            rng,
        };
        field.reset();
        field
    }

    fn reset(&mut self) {
        let count = self.config.particle.count;
        let bounds = self.bounds;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(&mut self.rng, bounds, &self.config);
            self.particles.push(p);
        }
        log::debug!(
            "[field] reset {} particles in {:.0}x{:.0}",
            count,
            bounds.x,
            bounds.y
        );
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Step every particle one frame. Particles do not interact, so order
    /// does not matter.
    pub fn advance(&mut self, pointer: Option<Vec2>) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.step(pointer, bounds);
        }
    }

    /// Discard every particle and respawn at the new bounds.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.bounds = surface_bounds(width, height);
        self.reset();
    }

    /// Clear the surface, draw particles as discs, then connector lines
    /// between every pair closer than the configured distance.
    ///
    /// The pair scan is O(n²); fine at the counts this runs with.
    pub fn render<S: Surface2d + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.bounds);
        let opacity = self.config.particle.opacity;
        let colors = &self.config.particle.colors;
        for p in &self.particles {
            let color = colors.get(p.color).map(String::as_str).unwrap_or("#ffffff");
            surface.fill_disc(p.pos, p.radius, color, opacity);
        }

        let lines = &self.config.lines;
        if !lines.enabled || lines.distance <= 0.0 {
            return;
        }
        let style = LineStyle {
            color: &lines.color,
            width: lines.width,
        };
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = a.pos.distance(b.pos);
                if let Some(alpha) = connector_alpha(dist, lines.distance, lines.max_alpha) {
                    surface.stroke_segment(a.pos, b.pos, style, alpha);
                }
            }
        }
    }
}

fn surface_bounds(width: f32, height: f32) -> Vec2 {
    let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Vec2::new(sanitize(width), sanitize(height))
}
