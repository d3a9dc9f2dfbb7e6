pub mod gradient_background;

pub use gradient_background::GradientBackground;
