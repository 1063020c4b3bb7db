use crate::config::FieldConfig;
use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// One simulated point-mass.
///
/// `color` indexes into the palette of the config the particle was spawned
/// from; radius and color never change after spawning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: usize,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: usize) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Fresh particle placed uniformly inside `bounds`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, config: &FieldConfig) -> Self {
        let p = &config.particle;
        let pos = Vec2::new(uniform(rng, 0.0, bounds.x), uniform(rng, 0.0, bounds.y));
        let radius = uniform(rng, p.size.min, p.size.max);
        let color = if p.colors.is_empty() {
            0
        } else {
            rng.gen_range(0..p.colors.len())
        };
        let half = config.motion.speed * 0.5;
        let vel = Vec2::new(uniform(rng, -half, half), uniform(rng, -half, half));
        Self::new(pos, vel, radius, color)
    }

    /// Advance one frame: pointer force, damping, integration, then boundary
    /// reflection and clamping.
    pub fn step(&mut self, pointer: Option<Vec2>, bounds: Vec2) {
        if let Some(pointer) = pointer {
            self.vel += pointer_acceleration(self.pos, pointer);
        }
        self.vel *= FRICTION;
        self.pos += self.vel;
        self.reflect_and_clamp(bounds);
    }

    fn reflect_and_clamp(&mut self, bounds: Vec2) {
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
        self.pos = self.pos.clamp(Vec2::ZERO, bounds);
    }
}

/// Velocity change the pointer imparts on a particle at `pos` this frame.
///
/// Orbit zone: a tangential swirl plus a centripetal pull, both fading out
/// towards `ORBIT_RADIUS`. Repel zone: a radial push away from the pointer.
/// A particle exactly on the pointer has no defined direction and gets none.
pub fn pointer_acceleration(pos: Vec2, pointer: Vec2) -> Vec2 {
    let d = pos - pointer;
    let dist = d.length();
    if dist > REPEL_RADIUS && dist < ORBIT_RADIUS {
        let falloff = 1.0 - dist / ORBIT_RADIUS;
        let tangent = (d / dist).perp() * ORBIT_SPEED * falloff * ORBIT_TANGENT_GAIN;
        let pull = -d * ORBIT_PULL_STRENGTH * falloff;
        tangent + pull
    } else if dist <= REPEL_RADIUS && dist > 0.0 {
        d / dist * REPEL_PUSH
    } else {
        Vec2::ZERO
    }
}

// gen_range panics on empty ranges; zero-width ranges (e.g. speed 0) collapse to `lo`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
