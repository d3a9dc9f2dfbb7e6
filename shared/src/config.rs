use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("spin factors must satisfy 0 < low < high, got low={low} high={high}")]
    SpinFactors { low: f64, high: f64 },
    #[error("settle threshold must be positive, got {0}")]
    SettleThreshold(f64),
    #[error("pointer angle must be finite, got {0}")]
    PointerAngle(f64),
}

/// Tuning knobs of the spin engine. Everything the user can move at runtime
/// (power, friction) is passed per call instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub low_factor: f64,
    pub high_factor: f64,
    pub settle_threshold: f64,
    pub pointer_angle: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            low_factor: SPIN_FACTOR_LOW,
            high_factor: SPIN_FACTOR_HIGH,
            settle_threshold: SETTLE_THRESHOLD,
            pointer_angle: POINTER_ANGLE,
        }
    }
}

impl SpinConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors_ok = self.low_factor.is_finite()
            && self.high_factor.is_finite()
            && self.low_factor > 0.0
            && self.low_factor < self.high_factor;
        if !factors_ok {
            return Err(ConfigError::SpinFactors {
                low: self.low_factor,
                high: self.high_factor,
            });
        }
        if !(self.settle_threshold > 0.0 && self.settle_threshold.is_finite()) {
            return Err(ConfigError::SettleThreshold(self.settle_threshold));
        }
        if !self.pointer_angle.is_finite() {
            return Err(ConfigError::PointerAngle(self.pointer_angle));
        }
        Ok(())
    }

    /// Returns this config if valid, otherwise the defaults.
    pub fn validated(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Invalid spin config ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SpinConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_unordered_factors() {
        let config = SpinConfig {
            low_factor: 0.4,
            high_factor: 0.3,
            ..SpinConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpinFactors { low: 0.4, high: 0.3 })
        );
        assert_eq!(config.validated(), SpinConfig::default());
    }

    #[test]
    fn test_rejects_bad_threshold_and_pointer() {
        let config = SpinConfig {
            settle_threshold: 0.0,
            ..SpinConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SettleThreshold(0.0)));

        let config = SpinConfig {
            pointer_angle: f64::INFINITY,
            ..SpinConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::PointerAngle(_))));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SpinConfig = serde_json::from_str(r#"{"pointer_angle": 0.0}"#).unwrap();
        assert_eq!(config.pointer_angle, 0.0);
        assert_eq!(config.low_factor, SPIN_FACTOR_LOW);
        assert_eq!(config.settle_threshold, SETTLE_THRESHOLD);
    }
}
