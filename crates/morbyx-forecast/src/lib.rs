//! morbyx-forecast — disease-severity trajectory projection.
//!
//! Steps a patient's severity forward over a discrete horizon, with or
//! without one applied drug's modeled effect. Deterministic: identical
//! inputs always reproduce identical trajectories.

pub mod engine;
pub mod trajectory;

pub use engine::ForecastEngine;
pub use trajectory::Trajectory;
