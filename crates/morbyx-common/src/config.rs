//! Simulation configuration: the severity scale, progression drift and the
//! plausibility bounds enforced on drug parameters.
//!
//! The collaborator layer may supply a TOML document; everything has a
//! documented default so the core runs without one.

use serde::{Deserialize, Serialize};

use crate::error::{MorbyxError, Result};

/// Bounds of the severity axis. Severity values are clamped to this range at
/// every simulation step; profile baselines outside it are rejected instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityScale {
    pub min: f64,
    pub max: f64,
}

impl Default for SeverityScale {
    fn default() -> Self {
        Self { min: 0.0, max: 100.0 }
    }
}

impl SeverityScale {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Tunable parameters for the forecasting and ranking core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub scale: SeverityScale,
    /// Untreated severity increase per step, before the disease-specific
    /// progression factor is applied.
    pub base_drift_per_step: f64,
    /// Additional drift per comorbidity tag on the patient.
    pub comorbidity_drift_per_tag: f64,
    /// Largest admissible |effect_magnitude| on a drug profile.
    pub max_effect_magnitude: f64,
    /// Largest admissible side-effect burden on a drug profile.
    pub max_side_effect_burden: f64,
    /// Weight of the side-effect burden penalty in the ranking score.
    pub burden_weight: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scale: SeverityScale::default(),
            base_drift_per_step: 2.0,
            comorbidity_drift_per_tag: 0.25,
            max_effect_magnitude: 100.0,
            max_side_effect_burden: 100.0,
            burden_weight: 0.5,
        }
    }
}

impl SimulationConfig {
    /// Parse a config from TOML text. Missing keys fall back to defaults;
    /// the parsed config is validated before being returned.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: SimulationConfig = toml::from_str(text)
            .map_err(|e| MorbyxError::Validation(format!("config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scale.min.is_finite() || !self.scale.max.is_finite() || self.scale.min >= self.scale.max {
            return Err(MorbyxError::Validation(format!(
                "config: severity scale [{}, {}] is inverted or non-finite",
                self.scale.min, self.scale.max
            )));
        }
        if !self.base_drift_per_step.is_finite() {
            return Err(MorbyxError::Validation(
                "config: base_drift_per_step must be finite".into(),
            ));
        }
        if self.comorbidity_drift_per_tag < 0.0 || !self.comorbidity_drift_per_tag.is_finite() {
            return Err(MorbyxError::Validation(
                "config: comorbidity_drift_per_tag must be finite and non-negative".into(),
            ));
        }
        if self.max_effect_magnitude <= 0.0 || !self.max_effect_magnitude.is_finite() {
            return Err(MorbyxError::Validation(
                "config: max_effect_magnitude must be finite and positive".into(),
            ));
        }
        if self.max_side_effect_burden <= 0.0 || !self.max_side_effect_burden.is_finite() {
            return Err(MorbyxError::Validation(
                "config: max_side_effect_burden must be finite and positive".into(),
            ));
        }
        if self.burden_weight < 0.0 || !self.burden_weight.is_finite() {
            return Err(MorbyxError::Validation(
                "config: burden_weight must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}
