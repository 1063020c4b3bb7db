use thiserror::Error;

/// Construction-time misconfiguration of a [`FieldConfig`](crate::FieldConfig).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle palette is empty")]
    EmptyPalette,
    #[error("particle size range is invalid: min={min} max={max}")]
    InvalidSizeRange { min: f32, max: f32 },
    #[error("particle opacity {0} is outside [0, 1]")]
    InvalidOpacity(f32),
    #[error("drift speed {0} must be finite and non-negative")]
    InvalidSpeed(f32),
    #[error("connector distance {0} must be finite")]
    InvalidConnectorDistance(f32),
}
