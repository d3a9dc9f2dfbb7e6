pub mod use_choices;
pub mod use_spin_engine;

pub use use_choices::*;
pub use use_spin_engine::*;
