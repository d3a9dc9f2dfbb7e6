use shared::constants::{DEFAULT_FRICTION, DEFAULT_POWER};
use shared::validation::{clamp_friction, clamp_power};
use web_sys::{window, UrlSearchParams};

pub const WHEEL_CANVAS_SIZE: u32 = 480;

pub const POWER_SLIDER: (f64, f64, f64) = (1.0, 100.0, 1.0);
pub const FRICTION_SLIDER: (f64, f64, f64) = (0.9, 0.995, 0.001);

/// Initial slider positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlDefaults {
    pub power: f64,
    pub friction: f64,
}

impl Default for ControlDefaults {
    fn default() -> Self {
        Self {
            power: DEFAULT_POWER,
            friction: DEFAULT_FRICTION,
        }
    }
}

// HiDPI backing store, capped at 2x to keep the swirl cheap to paint
pub fn get_device_pixel_ratio() -> f64 {
    window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite())
        .unwrap_or(1.0)
        .clamp(1.0, 2.0)
}

fn query_param(params: &UrlSearchParams, key: &str) -> Option<f64> {
    let raw = params.get(key)?;
    match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring non-numeric ?{}={}", key, raw);
            None
        }
    }
}

/// Reads `?power=` and `?friction=` from the page URL, clamping out-of-range values.
pub fn get_control_defaults() -> ControlDefaults {
    let mut defaults = ControlDefaults::default();

    let Some(search) = window().and_then(|w| w.location().search().ok()) else {
        return defaults;
    };
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return defaults;
    };

    if let Some(power) = query_param(&params, "power") {
        let clamped = clamp_power(power);
        if let Some(e) = clamped.error {
            log::warn!("?power: {}", e);
        }
        defaults.power = clamped.value;
    }
    if let Some(friction) = query_param(&params, "friction") {
        let clamped = clamp_friction(friction);
        if let Some(e) = clamped.error {
            log::warn!("?friction: {}", e);
        }
        defaults.friction = clamped.value;
    }

    defaults
}
