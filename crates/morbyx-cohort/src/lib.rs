//! morbyx-cohort — ranks a whole cohort of patients, one entry per patient.
//!
//! A thin fan-out over the ranking heuristic: each patient is processed
//! independently and a failure for one is recorded against that entry
//! without aborting the rest.

pub mod demo;
pub mod runner;

pub use runner::{BatchRunner, CohortEntry, CohortOutcome, CohortResult};
