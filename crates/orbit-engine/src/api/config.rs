use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::trajectory::{Extrapolation, Method};

/// Playback configuration, provided by the host. Every field has a default,
/// so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Real seconds per clock tick (default: 1/60).
    pub tick_seconds: f64,
    /// Trajectory whose span bounds the clock (default: "S/C").
    pub authoritative_trajectory: String,
    /// Interpolation method for sampled bodies (default: Akima).
    pub interpolation: Method,
    /// Out-of-range policy for sampled bodies (default: clamp).
    pub extrapolation: Extrapolation,
    /// Rate exponent at load (default: 0, i.e. ×1).
    pub initial_rate_exponent: i32,
    /// Maximum clock ticks per rendered frame (default: 10).
    pub max_steps_per_frame: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 1.0 / 60.0,
            authoritative_trajectory: "S/C".to_string(),
            interpolation: Method::Akima,
            extrapolation: Extrapolation::Clamp,
            initial_rate_exponent: 0,
            max_steps_per_frame: 10,
        }
    }
}

impl PlaybackConfig {
    /// Parse and validate a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlaybackConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Tick length must be finite and positive; at least one tick per frame.
    pub fn validate(&self) -> Result<()> {
        if !(self.tick_seconds.is_finite() && self.tick_seconds > 0.0) {
            return Err(Error::InvalidConfig {
                field: "tick_seconds",
                reason: "must be finite and greater than 0",
            });
        }
        if self.max_steps_per_frame == 0 {
            return Err(Error::InvalidConfig {
                field: "max_steps_per_frame",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PlaybackConfig::from_json("{}").unwrap(), PlaybackConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = PlaybackConfig::from_json(
            r#"{ "interpolation": "linear", "extrapolation": "extrapolate", "initial_rate_exponent": 3 }"#,
        )
        .unwrap();
        assert_eq!(config.interpolation, Method::Linear);
        assert_eq!(config.extrapolation, Extrapolation::Extrapolate);
        assert_eq!(config.initial_rate_exponent, 3);
        assert_eq!(config.authoritative_trajectory, "S/C");
        assert!((config.tick_seconds - 1.0 / 60.0).abs() < 1e-15);
    }

    #[test]
    fn rejects_non_positive_tick() {
        for json in [r#"{ "tick_seconds": 0 }"#, r#"{ "tick_seconds": -0.0166666 }"#] {
            assert!(
                matches!(
                    PlaybackConfig::from_json(json),
                    Err(Error::InvalidConfig { field: "tick_seconds", .. })
                ),
                "{json}"
            );
        }
    }

    #[test]
    fn rejects_non_finite_tick() {
        let config = PlaybackConfig {
            tick_seconds: f64::INFINITY,
            ..PlaybackConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_steps_per_frame() {
        assert!(matches!(
            PlaybackConfig::from_json(r#"{ "max_steps_per_frame": 0 }"#),
            Err(Error::InvalidConfig { field: "max_steps_per_frame", .. })
        ));
    }

    #[test]
    fn extreme_rate_exponent_is_accepted() {
        let config = PlaybackConfig::from_json(r#"{ "initial_rate_exponent": -2147483648 }"#).unwrap();
        assert_eq!(config.initial_rate_exponent, i32::MIN);
    }

    #[test]
    fn unknown_method_is_an_error() {
        assert!(PlaybackConfig::from_json(r#"{ "interpolation": "sinc" }"#).is_err());
    }
}
