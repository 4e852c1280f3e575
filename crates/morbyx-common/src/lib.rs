//! morbyx-common — shared data model, error taxonomy and simulation config.
//!
//! Everything the forecast, ranking and cohort crates agree on lives here:
//! patient and drug records with their boundary validation, the severity
//! scale, and the `MorbyxError` taxonomy.

pub mod config;
pub mod error;
pub mod profiles;

pub use config::{SeverityScale, SimulationConfig};
pub use error::{MorbyxError, Result};
pub use profiles::{DecayKind, DiseaseKind, DrugProfile, PatientProfile};
