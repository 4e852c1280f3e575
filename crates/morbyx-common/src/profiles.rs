//! Patient and drug records with their boundary validation.
//!
//! These are plain structured data: the collaborator layer builds them from
//! user input or a cohort upload, the core re-validates numeric bounds before
//! running. Profiles are taken by shared reference everywhere so a run can
//! never observe one mutated mid-flight.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::{MorbyxError, Result};

// ---------------------------------------------------------------------------
// Disease
// ---------------------------------------------------------------------------

/// Disease categories carried over from the demo disease table. Each scales
/// the configured base drift by its progression factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseKind {
    Influenza,
    Malaria,
    CommonCold,
    Covid19,
    Dengue,
    SyntheticPathogen,
    Generic,
}

impl DiseaseKind {
    /// Multiplier applied to the configured base drift per step.
    pub fn progression_factor(&self) -> f64 {
        match self {
            DiseaseKind::Influenza         => 0.8,
            DiseaseKind::Malaria           => 1.2,
            DiseaseKind::CommonCold        => 0.5,
            DiseaseKind::Covid19           => 1.3,
            DiseaseKind::Dengue            => 1.1,
            DiseaseKind::SyntheticPathogen => 1.5,
            DiseaseKind::Generic           => 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Patient
// ---------------------------------------------------------------------------

/// One simulated individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Unique within a cohort.
    pub id: String,
    /// Starting severity; must lie on the configured scale.
    pub baseline_severity: f64,
    pub age: u32,
    /// Categorical tags, e.g. "diabetes", "hypertension", "asthma".
    /// BTreeSet so iteration order is deterministic.
    pub comorbidities: BTreeSet<String>,
    pub disease: DiseaseKind,
}

impl PatientProfile {
    pub fn validate(&self, config: &SimulationConfig) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(MorbyxError::Validation("patient: id must not be empty".into()));
        }
        if !config.scale.contains(self.baseline_severity) {
            return Err(MorbyxError::Validation(format!(
                "patient {}: baseline severity {} outside scale [{}, {}]",
                self.id, self.baseline_severity, config.scale.min, config.scale.max
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Drug
// ---------------------------------------------------------------------------

/// How a drug's effect magnitude falls off after onset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DecayKind {
    /// Full magnitude for the whole horizon.
    None,
    /// Falls linearly to zero at the end of the duration.
    Linear { duration_steps: u32 },
    /// Halves every `half_life_steps` steps.
    Exponential { half_life_steps: f64 },
}

/// A candidate intervention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugProfile {
    /// Unique identifier; the final ranking tie-break key.
    pub name: String,
    /// Signed severity reduction per step at full strength. Negative values
    /// model a drug that worsens the condition.
    pub effect_magnitude: f64,
    /// Steps before the effect begins acting.
    pub onset_delay: u32,
    pub decay: DecayKind,
    /// Ranking penalty, 0 = no side effects.
    pub side_effect_burden: f64,
}

impl DrugProfile {
    /// Bounds check against the configured plausible ranges. Malformed input
    /// is rejected, never silently clamped.
    pub fn validate(&self, config: &SimulationConfig) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MorbyxError::Validation("drug: name must not be empty".into()));
        }
        if !self.effect_magnitude.is_finite()
            || self.effect_magnitude.abs() > config.max_effect_magnitude
        {
            return Err(MorbyxError::Validation(format!(
                "drug {}: effect magnitude {} outside plausible range ±{}",
                self.name, self.effect_magnitude, config.max_effect_magnitude
            )));
        }
        if !self.side_effect_burden.is_finite()
            || self.side_effect_burden < 0.0
            || self.side_effect_burden > config.max_side_effect_burden
        {
            return Err(MorbyxError::Validation(format!(
                "drug {}: side-effect burden {} outside [0, {}]",
                self.name, self.side_effect_burden, config.max_side_effect_burden
            )));
        }
        match self.decay {
            DecayKind::None => {}
            DecayKind::Linear { duration_steps } => {
                if duration_steps == 0 {
                    return Err(MorbyxError::Validation(format!(
                        "drug {}: linear decay duration must be at least one step",
                        self.name
                    )));
                }
            }
            DecayKind::Exponential { half_life_steps } => {
                if !half_life_steps.is_finite() || half_life_steps <= 0.0 {
                    return Err(MorbyxError::Validation(format!(
                        "drug {}: exponential half-life {} must be finite and positive",
                        self.name, half_life_steps
                    )));
                }
            }
        }
        Ok(())
    }
}
