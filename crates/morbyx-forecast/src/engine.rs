//! Severity projection over a discrete horizon.

use morbyx_common::{DecayKind, DrugProfile, MorbyxError, PatientProfile, Result, SimulationConfig};
use tracing::debug;

use crate::trajectory::{Trajectory, TrajectoryPoint};

/// Projects disease-severity trajectories. Holds only the validated config;
/// every `simulate` call is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    config: SimulationConfig,
}

impl ForecastEngine {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Project `patient`'s severity over `horizon` steps, optionally under
    /// one drug's effect.
    ///
    /// The returned trajectory has `horizon + 1` points and starts at the
    /// patient baseline; `horizon == 0` yields the single baseline point.
    /// Severity is clamped to the scale after each step's combined update;
    /// malformed profiles are rejected up front, never clamped.
    pub fn simulate(
        &self,
        patient: &PatientProfile,
        drug: Option<&DrugProfile>,
        horizon: u32,
    ) -> Result<Trajectory> {
        patient.validate(&self.config)?;
        if let Some(d) = drug {
            d.validate(&self.config)?;
        }
        debug!(
            patient = %patient.id,
            drug = drug.map(|d| d.name.as_str()).unwrap_or("none"),
            horizon,
            "simulating trajectory"
        );

        let drift = self.config.base_drift_per_step * patient.disease.progression_factor()
            + self.config.comorbidity_drift_per_tag * patient.comorbidities.len() as f64;

        let mut severity = patient.baseline_severity;
        let mut points = Vec::with_capacity(horizon as usize + 1);
        points.push(TrajectoryPoint { step: 0, severity });

        for step in 1..=horizon {
            let mut next = severity + drift;
            if let Some(d) = drug {
                next -= drug_effect_at(d, step)?;
            }
            if !next.is_finite() {
                return Err(MorbyxError::Computation(format!(
                    "patient {}: severity became non-finite at step {step}",
                    patient.id
                )));
            }
            severity = self.config.scale.clamp(next);
            points.push(TrajectoryPoint { step, severity });
        }

        Ok(Trajectory::new(points))
    }
}

/// Effect term subtracted from severity at `step`, zero before onset and
/// decayed by the elapsed steps since onset afterwards.
fn drug_effect_at(drug: &DrugProfile, step: u32) -> Result<f64> {
    if step < drug.onset_delay {
        return Ok(0.0);
    }
    let elapsed = (step - drug.onset_delay) as f64;
    let factor = match drug.decay {
        DecayKind::None => 1.0,
        DecayKind::Linear { duration_steps } => {
            let duration = duration_steps as f64;
            if duration <= 0.0 {
                return Err(MorbyxError::Computation(format!(
                    "drug {}: zero-length linear decay duration",
                    drug.name
                )));
            }
            (1.0 - elapsed / duration).max(0.0)
        }
        DecayKind::Exponential { half_life_steps } => {
            if !(half_life_steps > 0.0) {
                return Err(MorbyxError::Computation(format!(
                    "drug {}: non-positive exponential half-life",
                    drug.name
                )));
            }
            (-std::f64::consts::LN_2 * elapsed / half_life_steps).exp()
        }
    };
    Ok(drug.effect_magnitude * factor)
}
