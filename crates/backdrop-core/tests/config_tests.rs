// Host-side tests for field configuration and tuning constants.

use backdrop_core::constants::*;
use backdrop_core::{is_compact_viewport, ConfigError, FieldConfig, SizeRange};

#[test]
fn default_config_matches_deep_blue_theme() {
    let config = FieldConfig::default();
    assert_eq!(config.particle.count, 150);
    assert_eq!(config.particle.colors.len(), 5);
    assert_eq!(config.particle.colors[0], "#3b82f6");
    assert_eq!(config.particle.size, SizeRange { min: 1.0, max: 3.0 });
    assert!((config.particle.opacity - 0.7).abs() < 1e-6);
    assert!((config.motion.speed - 0.6).abs() < 1e-6);
    assert!(config.lines.enabled);
    assert!((config.lines.distance - 130.0).abs() < 1e-6);
    assert!(config.validate().is_ok());
}

#[test]
fn compact_threshold_is_inclusive() {
    assert!(is_compact_viewport(375.0));
    assert!(is_compact_viewport(1024.0));
    assert!(!is_compact_viewport(1025.0));
    assert_eq!(FieldConfig::for_viewport(true).particle.count, 80);
    assert_eq!(FieldConfig::for_viewport(false).particle.count, 150);
}

#[test]
fn validate_rejects_empty_palette() {
    let mut config = FieldConfig::default();
    config.particle.colors.clear();
    assert_eq!(config.validate(), Err(ConfigError::EmptyPalette));
}

#[test]
fn validate_rejects_inverted_size_range() {
    let mut config = FieldConfig::default();
    config.particle.size = SizeRange { min: 4.0, max: 2.0 };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidSizeRange { .. })
    ));
}

#[test]
fn validate_rejects_bad_speed_and_opacity() {
    let mut config = FieldConfig::default();
    config.motion.speed = f32::NAN;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed(_))));

    let mut config = FieldConfig::default();
    config.particle.opacity = 1.5;
    assert_eq!(config.validate(), Err(ConfigError::InvalidOpacity(1.5)));
}

#[test]
fn config_errors_render_readable_messages() {
    assert_eq!(ConfigError::EmptyPalette.to_string(), "particle palette is empty");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn proximity_zones_are_ordered() {
    assert!(REPEL_RADIUS > 0.0);
    assert!(ORBIT_RADIUS > REPEL_RADIUS);
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(PARTICLE_COUNT_COMPACT < PARTICLE_COUNT_DESKTOP);
    assert!(PARTICLE_SIZE_MIN <= PARTICLE_SIZE_MAX);
}
