//! morbyx-ranker — orders candidate drugs for one patient.
//!
//! Runs the forecast engine once per candidate plus once untreated, reduces
//! the trajectories to scalar scores and attaches a templated rationale to
//! each row. Ordering is fully deterministic: score descending, then
//! side-effect burden ascending, then drug name ascending — never input
//! order.

pub mod rationale;
pub mod scorer;

use morbyx_common::{DrugProfile, MorbyxError, PatientProfile, Result, SimulationConfig};
use morbyx_forecast::{ForecastEngine, Trajectory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

pub use scorer::ScoreBreakdown;

/// One row of a ranking: a drug, its score components, its rank and the
/// trajectory that produced them. Plain data; the rationale is regenerable
/// from `improvement` and `side_effect_burden` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub drug_name: String,
    pub score: f64,
    /// 1 = best; unique and contiguous across the returned set.
    pub rank: u32,
    /// Mean per-step severity reduction vs the untreated baseline.
    pub improvement: f64,
    pub side_effect_burden: f64,
    pub burden_penalty: f64,
    pub rationale: String,
    pub trajectory: Trajectory,
}

/// Ranks candidate drugs for a patient over a fixed horizon.
#[derive(Debug, Clone)]
pub struct RankingHeuristic {
    engine: ForecastEngine,
}

impl RankingHeuristic {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Ok(Self { engine: ForecastEngine::new(config)? })
    }

    pub fn with_engine(engine: ForecastEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ForecastEngine {
        &self.engine
    }

    /// Rank `drugs` for `patient`, best first.
    ///
    /// Fails fast on an empty or duplicate-named drug set and on any profile
    /// that violates the configured bounds; on success every input drug
    /// appears exactly once with ranks `1..=N`.
    pub fn rank(
        &self,
        patient: &PatientProfile,
        drugs: &[DrugProfile],
        horizon: u32,
    ) -> Result<Vec<RankingResult>> {
        let config = self.engine.config();
        patient.validate(config)?;
        if drugs.is_empty() {
            return Err(MorbyxError::Validation(format!(
                "ranking for patient {}: drug set is empty, nothing to rank",
                patient.id
            )));
        }
        let mut names = BTreeSet::new();
        for drug in drugs {
            drug.validate(config)?;
            if !names.insert(drug.name.as_str()) {
                return Err(MorbyxError::Validation(format!(
                    "ranking for patient {}: duplicate drug name {}",
                    patient.id, drug.name
                )));
            }
        }

        let baseline = self.engine.simulate(patient, None, horizon)?;
        debug!(patient = %patient.id, drugs = drugs.len(), horizon, "ranking candidates");

        let mut rows: Vec<RankingResult> = Vec::with_capacity(drugs.len());
        for drug in drugs {
            let trajectory = self.engine.simulate(patient, Some(drug), horizon)?;
            let breakdown = scorer::score_against_baseline(
                &baseline,
                &trajectory,
                drug.side_effect_burden,
                config.burden_weight,
            );
            rows.push(RankingResult {
                drug_name: drug.name.clone(),
                score: breakdown.score,
                rank: 0, // assigned after sorting
                improvement: breakdown.improvement,
                side_effect_burden: drug.side_effect_burden,
                burden_penalty: breakdown.burden_penalty,
                rationale: rationale::hint_for(breakdown.improvement, drug.side_effect_burden),
                trajectory,
            });
        }

        rows.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.side_effect_burden.total_cmp(&b.side_effect_burden))
                .then_with(|| a.drug_name.cmp(&b.drug_name))
        });
        for (i, row) in rows.iter_mut().enumerate() {
            row.rank = i as u32 + 1;
        }
        Ok(rows)
    }
}
