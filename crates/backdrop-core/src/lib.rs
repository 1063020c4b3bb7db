pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod reveal;
pub mod surface;
pub mod track;

pub use config::*;
pub use error::ConfigError;
pub use field::ParticleField;
pub use particle::{pointer_acceleration, Particle};
pub use pointer::PointerState;
pub use surface::{connector_alpha, LineStyle, Surface2d};
pub use track::HorizontalTrack;
