use std::borrow::Cow;

use thiserror::Error;
use validator::ValidationError;

use crate::constants::*;

/// Why a control value had to be pulled back into range.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ControlError {
    #[error("spin power must be positive, got {0}")]
    NonPositivePower(f64),
    #[error("spin power {0} is below the minimum of {min}", min = MIN_POWER)]
    PowerTooLow(f64),
    #[error("spin power {0} exceeds the maximum of {max}", max = MAX_POWER)]
    PowerTooHigh(f64),
    #[error("friction must lie strictly between 0 and 1, got {0}")]
    FrictionOutOfRange(f64),
    #[error("{0} is not a finite number")]
    NotFinite(&'static str),
}

/// A control value after clamping, with the reason if it was changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    pub value: f64,
    pub error: Option<ControlError>,
}

impl Clamped {
    fn ok(value: f64) -> Self {
        Self { value, error: None }
    }

    fn fixed(value: f64, error: ControlError) -> Self {
        Self { value, error: Some(error) }
    }

    pub fn is_clamped(&self) -> bool {
        self.error.is_some()
    }
}

pub fn clamp_power(power: f64) -> Clamped {
    if !power.is_finite() {
        return Clamped::fixed(MIN_POWER, ControlError::NotFinite("power"));
    }
    if power <= 0.0 {
        return Clamped::fixed(MIN_POWER, ControlError::NonPositivePower(power));
    }
    if power < MIN_POWER {
        return Clamped::fixed(MIN_POWER, ControlError::PowerTooLow(power));
    }
    if power > MAX_POWER {
        return Clamped::fixed(MAX_POWER, ControlError::PowerTooHigh(power));
    }
    Clamped::ok(power)
}

/// NaN maps to the fast-stopping bound so a bad read can never stall a spin.
pub fn clamp_friction(friction: f64) -> Clamped {
    if friction.is_nan() {
        return Clamped::fixed(MIN_FRICTION, ControlError::NotFinite("friction"));
    }
    if friction <= 0.0 {
        return Clamped::fixed(MIN_FRICTION, ControlError::FrictionOutOfRange(friction));
    }
    if friction >= 1.0 {
        return Clamped::fixed(MAX_FRICTION, ControlError::FrictionOutOfRange(friction));
    }
    Clamped::ok(friction)
}

fn choice_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Trims a user-entered choice, returning the text to store.
pub fn validate_choice(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(choice_error("empty_choice", EMPTY_CHOICE_ERROR));
    }
    if trimmed.chars().count() > MAX_CHOICE_LEN {
        return Err(choice_error("choice_too_long", CHOICE_TOO_LONG_ERROR));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_in_range_passes_through() {
        let clamped = clamp_power(50.0);
        assert_eq!(clamped.value, 50.0);
        assert!(!clamped.is_clamped());
    }

    #[test]
    fn test_non_positive_power_clamps_to_minimum() {
        let clamped = clamp_power(-3.0);
        assert_eq!(clamped.value, MIN_POWER);
        assert_eq!(clamped.error, Some(ControlError::NonPositivePower(-3.0)));

        assert_eq!(clamp_power(0.0).value, MIN_POWER);
        assert_eq!(clamp_power(MIN_POWER), Clamped { value: MIN_POWER, error: None });
        assert_eq!(clamp_power(f64::NAN).error, Some(ControlError::NotFinite("power")));
        assert_eq!(clamp_power(f64::INFINITY).value, MIN_POWER);
    }

    #[test]
    fn test_fractional_power_clamps_to_minimum() {
        let clamped = clamp_power(0.5);
        assert_eq!(clamped.value, MIN_POWER);
        assert_eq!(clamped.error, Some(ControlError::PowerTooLow(0.5)));
        assert_eq!(
            ControlError::PowerTooLow(0.5).to_string(),
            "spin power 0.5 is below the minimum of 1"
        );
    }

    #[test]
    fn test_excessive_power_clamps_to_maximum() {
        let clamped = clamp_power(1e9);
        assert_eq!(clamped.value, MAX_POWER);
        assert_eq!(clamped.error, Some(ControlError::PowerTooHigh(1e9)));
    }

    #[test]
    fn test_friction_bounds() {
        assert_eq!(clamp_friction(0.95), Clamped { value: 0.95, error: None });
        assert_eq!(clamp_friction(1.0).value, MAX_FRICTION);
        assert_eq!(clamp_friction(1.5).value, MAX_FRICTION);
        assert_eq!(clamp_friction(0.0).value, MIN_FRICTION);
        assert_eq!(clamp_friction(-0.2).value, MIN_FRICTION);
        assert_eq!(clamp_friction(f64::NAN).value, MIN_FRICTION);
        assert!(clamp_friction(1.0).is_clamped());
        assert!(!clamp_friction(0.9995).is_clamped());
    }

    #[test]
    fn test_control_error_messages() {
        assert_eq!(
            ControlError::FrictionOutOfRange(1.2).to_string(),
            "friction must lie strictly between 0 and 1, got 1.2"
        );
        assert_eq!(ControlError::NotFinite("power").to_string(), "power is not a finite number");
    }

    #[test]
    fn test_validate_choice_trims() {
        assert_eq!(validate_choice("  Pizza  ").unwrap(), "Pizza");
    }

    #[test]
    fn test_validate_choice_rejects_blank_and_long() {
        assert_eq!(validate_choice("   ").unwrap_err().code, "empty_choice");
        let long = "x".repeat(MAX_CHOICE_LEN + 1);
        assert_eq!(validate_choice(&long).unwrap_err().code, "choice_too_long");
        assert!(validate_choice(&"x".repeat(MAX_CHOICE_LEN)).is_ok());
    }
}
