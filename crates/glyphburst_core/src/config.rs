//! # Effect Configuration
//!
//! Every tunable of the effect in one place, loadable from TOML and validated
//! once at startup. The simulation never re-reads configuration mid-run, so a
//! value that passes [`EffectConfig::validate`] holds for the whole session.

use std::path::Path;
use std::time::Duration;

use glyphburst_surface::{Color, FontSpec, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A half-open speed interval `[min, max)` in surface units per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    /// Inclusive lower bound.
    pub min: f32,
    /// Exclusive upper bound.
    pub max: f32,
}

impl SpeedRange {
    /// Creates a new speed range.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    #[must_use]
    pub fn width(self) -> f32 {
        self.max - self.min
    }

    /// Whether `speed` falls inside `[min, max)`.
    #[must_use]
    pub fn contains(self, speed: f32) -> bool {
        speed >= self.min && speed < self.max
    }
}

/// All tunables of the text-explosion effect.
///
/// Defaults reproduce the classic look: a cyan bold-serif label flies from
/// the surface center for two seconds, then bursts into rainbow glyphs and a
/// hundred yellow sparks.
///
/// Fields omitted from a TOML file keep their defaults, so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Simulation tick period in milliseconds. 30 ms gives ~33 ticks/sec.
    pub tick_ms: u64,
    /// Wall-clock travel time from spawn origin to destination, milliseconds.
    pub travel_ms: u64,
    /// Text spawned by a plain click.
    pub spawn_text: String,
    /// Logical surface width in surface units.
    pub surface_width: f32,
    /// Logical surface height in surface units.
    pub surface_height: f32,
    /// Sparks emitted per detonation.
    pub particle_count: usize,
    /// Per-tick opacity loss for flying glyphs. A glyph is fully faded after
    /// `ceil(1.0 / glyph_fade)` ticks.
    pub glyph_fade: f32,
    /// Per-tick opacity loss for sparks.
    pub particle_fade: f32,
    /// Spark diameter in surface units.
    pub particle_size: f32,
    /// Fixed RNG seed. `None` derives a seed from the clock at startup.
    pub seed: Option<u64>,
    /// Speed interval sampled for each flying glyph.
    pub glyph_speed: SpeedRange,
    /// Speed interval sampled for each spark.
    pub particle_speed: SpeedRange,
    /// Font used for the traveling label and every flying glyph.
    pub font: FontSpec,
    /// Color of the traveling label.
    pub label_color: Color,
    /// Color of every spark.
    pub particle_color: Color,
    /// Surface clear color.
    pub background: Color,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            travel_ms: 2000,
            spawn_text: String::from("glyphburst"),
            surface_width: 800.0,
            surface_height: 600.0,
            particle_count: 100,
            glyph_fade: 0.02,
            particle_fade: 0.04,
            particle_size: 4.0,
            seed: None,
            glyph_speed: SpeedRange::new(1.0, 4.0),
            particle_speed: SpeedRange::new(2.0, 5.0),
            font: FontSpec::bold_serif(24.0),
            label_color: Color::CYAN,
            particle_color: Color::YELLOW,
            background: Color::BLACK,
        }
    }
}

impl EffectConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails [`Self::validate`].
    pub fn from_toml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML or fails
    /// [`Self::validate`].
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every invariant the simulation relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: non-positive or non-finite
    /// dimensions or durations, fade rates outside `(0, 1]`, or speed
    /// ranges that are empty or carry non-finite bounds.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tick_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "tick_ms",
                value: 0.0,
            });
        }
        if self.travel_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "travel_ms",
                value: 0.0,
            });
        }
        // NaN fails no ordered comparison, so finiteness is its own check
        for (field, value) in [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("particle_size", self.particle_size),
            ("font.size", self.font.size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field,
                    value: f64::from(value),
                });
            }
        }
        for (field, rate) in [
            ("glyph_fade", self.glyph_fade),
            ("particle_fade", self.particle_fade),
        ] {
            if !rate.is_finite() || rate <= 0.0 || rate > 1.0 {
                return Err(ConfigError::FadeOutOfRange { field, value: rate });
            }
        }
        for (field, range) in [
            ("glyph_speed", self.glyph_speed),
            ("particle_speed", self.particle_speed),
        ] {
            if !range.min.is_finite() || range.min < 0.0 {
                return Err(ConfigError::NonPositive {
                    field,
                    value: f64::from(range.min),
                });
            }
            if !range.max.is_finite() {
                return Err(ConfigError::NonPositive {
                    field,
                    value: f64::from(range.max),
                });
            }
            if range.min >= range.max {
                return Err(ConfigError::EmptySpeedRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// Simulation tick period.
    #[must_use]
    pub const fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Travel time from origin to destination.
    #[must_use]
    pub const fn travel_time(&self) -> Duration {
        Duration::from_millis(self.travel_ms)
    }

    /// Fixed spawn origin for every explosion: the surface center.
    #[must_use]
    pub fn spawn_origin(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EffectConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_matches_classic_look() {
        let config = EffectConfig::default();
        assert_eq!(config.tick_ms, 30);
        assert_eq!(config.travel_ms, 2000);
        assert_eq!(config.particle_count, 100);
        assert_eq!(config.glyph_fade, 0.02);
        assert_eq!(config.particle_fade, 0.04);
        assert_eq!(config.glyph_speed, SpeedRange::new(1.0, 4.0));
        assert_eq!(config.particle_speed, SpeedRange::new(2.0, 5.0));
        assert_eq!(config.spawn_origin(), Vec2::new(400.0, 300.0));
        assert_eq!(config.label_color, Color::CYAN);
        assert_eq!(config.particle_color, Color::YELLOW);
        assert_eq!(config.spawn_text, "glyphburst");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_toml_overrides_keep_other_defaults() {
        let config = EffectConfig::from_toml_str(
            r#"
            spawn_text = "boom"
            seed = 7
            travel_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.spawn_text, "boom");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.travel_time(), Duration::from_millis(500));
        assert_eq!(config.tick_ms, 30);
        assert_eq!(config.particle_count, 100);
    }

    #[test]
    fn test_zero_tick_rejected() {
        let err = EffectConfig::from_toml_str("tick_ms = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "tick_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_fade_rate_out_of_range_rejected() {
        let mut config = EffectConfig::default();
        config.glyph_fade = 0.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::FadeOutOfRange {
                field: "glyph_fade",
                ..
            }
        ));
        config.glyph_fade = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let mut config = EffectConfig::default();
        config.particle_speed = SpeedRange::new(5.0, 2.0);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::EmptySpeedRange {
                field: "particle_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_nan_fade_rate_rejected() {
        let err = EffectConfig::from_toml_str("glyph_fade = nan").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::FadeOutOfRange {
                field: "glyph_fade",
                ..
            }
        ));
        assert!(EffectConfig::from_toml_str("particle_fade = nan").is_err());
    }

    #[test]
    fn test_non_finite_dimensions_rejected() {
        let err = EffectConfig::from_toml_str("surface_width = nan").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "surface_width",
                ..
            }
        ));
        assert!(EffectConfig::from_toml_str("surface_height = inf").is_err());

        let mut config = EffectConfig::default();
        config.font.size = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_speed_bounds_rejected() {
        let mut config = EffectConfig::default();
        config.glyph_speed = SpeedRange::new(f32::NAN, 4.0);
        assert!(config.validate().is_err());

        config.glyph_speed = SpeedRange::new(1.0, f32::INFINITY);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::NonPositive {
                field: "glyph_speed",
                ..
            }
        ));

        config.glyph_speed = SpeedRange::new(1.0, 4.0);
        config.particle_speed = SpeedRange::new(2.0, f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = EffectConfig::from_toml("/nonexistent/glyphburst.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("glyphburst.toml"));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = EffectConfig::default();
        config.seed = Some(42);
        let raw = toml::to_string(&config).unwrap();
        let parsed = EffectConfig::from_toml_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_speed_range_contains_is_half_open() {
        let range = SpeedRange::new(1.0, 4.0);
        assert!(range.contains(1.0));
        assert!(range.contains(3.999));
        assert!(!range.contains(4.0));
        assert!(!range.contains(0.5));
    }
}
