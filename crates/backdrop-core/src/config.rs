//! Static configuration for a [`ParticleField`](crate::ParticleField).
//!
//! A config is chosen once at startup (desktop or compact) and never changes
//! afterwards; resizing the surface rebuilds particles from the same config.

use crate::constants::*;
use crate::error::ConfigError;

/// Inclusive radius range particles are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeRange {
    pub min: f32,
    pub max: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub colors: Vec<String>,
    pub size: SizeRange,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Initial drift velocities are drawn from `[-speed/2, speed/2]` per axis.
    pub speed: f32,
}

/// Proximity connector lines drawn between nearby particles.
#[derive(Clone, Debug, PartialEq)]
pub struct LineConfig {
    pub enabled: bool,
    pub distance: f32,
    pub color: String,
    pub max_alpha: f32,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle: ParticleConfig,
    pub motion: MotionConfig,
    pub lines: LineConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle: ParticleConfig {
                count: PARTICLE_COUNT_DESKTOP,
                colors: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
                size: SizeRange {
                    min: PARTICLE_SIZE_MIN,
                    max: PARTICLE_SIZE_MAX,
                },
                opacity: PARTICLE_OPACITY,
            },
            motion: MotionConfig {
                speed: DRIFT_SPEED,
            },
            lines: LineConfig {
                enabled: true,
                distance: CONNECTOR_DISTANCE,
                color: CONNECTOR_COLOR.to_string(),
                max_alpha: CONNECTOR_MAX_ALPHA,
                width: CONNECTOR_WIDTH,
            },
        }
    }
}

impl FieldConfig {
    /// Default config with the particle count picked for the viewport mode.
    pub fn for_viewport(compact: bool) -> Self {
        let mut config = Self::default();
        config.particle.count = if compact {
            PARTICLE_COUNT_COMPACT
        } else {
            PARTICLE_COUNT_DESKTOP
        };
        config
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.particle.count = count;
        self
    }

    /// Reject configs that would produce degenerate particles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particle;
        if p.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let SizeRange { min, max } = p.size;
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(ConfigError::InvalidSizeRange { min, max });
        }
        if !(0.0..=1.0).contains(&p.opacity) {
            return Err(ConfigError::InvalidOpacity(p.opacity));
        }
        let speed = self.motion.speed;
        if !speed.is_finite() || speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        if !self.lines.distance.is_finite() {
            return Err(ConfigError::InvalidConnectorDistance(self.lines.distance));
        }
        Ok(())
    }
}

/// Narrow surfaces run the reduced particle count and skip scroll choreography.
#[inline]
pub fn is_compact_viewport(width: f32) -> bool {
    width <= COMPACT_VIEWPORT_MAX_WIDTH
}
