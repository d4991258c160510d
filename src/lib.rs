pub mod config;
pub mod easing;
pub mod model;
pub mod overlay;
pub mod session;
pub mod simulation;
pub mod smoother;
pub mod types;
pub mod visualization;
