use std::f64::consts::FRAC_PI_2;

// Pointer sits at 12 o'clock in canvas coordinates (y grows downward).
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

// Initial velocity is U(SPIN_FACTOR_LOW, SPIN_FACTOR_HIGH) * power, in radians per tick
pub const SPIN_FACTOR_LOW: f64 = 0.22;
pub const SPIN_FACTOR_HIGH: f64 = 0.35;

// Below this velocity (radians per tick) the wheel settles
pub const SETTLE_THRESHOLD: f64 = 0.002;

pub const MIN_POWER: f64 = 1.0;
pub const MAX_POWER: f64 = 100.0;
pub const DEFAULT_POWER: f64 = 50.0;

pub const MIN_FRICTION: f64 = 0.01;
pub const MAX_FRICTION: f64 = 0.999;
pub const DEFAULT_FRICTION: f64 = 0.985;

pub const PLACEHOLDER_CHOICE: &str = "—";
pub const DEFAULT_CHOICES: [&str; 3] = ["Yes", "No", "Maybe"];
pub const MAX_CHOICE_LEN: usize = 80;

pub const EMPTY_CHOICE_ERROR: &str = "Please enter a choice";
pub const CHOICE_TOO_LONG_ERROR: &str = "Choices must be 80 characters or fewer";
