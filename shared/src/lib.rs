pub mod choices;
pub mod config;
pub mod constants;
pub mod palette;
pub mod segments;
pub mod shared_wheel_game;
pub mod swirl;
pub mod validation;
