//! Per-cohort fan-out with per-patient failure isolation.

use morbyx_common::{DrugProfile, PatientProfile, Result, SimulationConfig};
use morbyx_ranker::{RankingHeuristic, RankingResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

/// Outcome of ranking one cohort member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CohortOutcome {
    Ranked { rankings: Vec<RankingResult> },
    Failed { reason: String },
}

/// One cohort member's entry, in input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortEntry {
    pub patient_id: String,
    pub outcome: CohortOutcome,
}

impl CohortEntry {
    pub fn rankings(&self) -> Option<&[RankingResult]> {
        match &self.outcome {
            CohortOutcome::Ranked { rankings } => Some(rankings),
            CohortOutcome::Failed { .. } => None,
        }
    }
}

/// One entry per input patient, insertion order = input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortResult {
    pub entries: Vec<CohortEntry>,
}

impl CohortResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, patient_id: &str) -> Option<&CohortEntry> {
        self.entries.iter().find(|e| e.patient_id == patient_id)
    }

    pub fn ranked_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, CohortOutcome::Ranked { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.entries.len() - self.ranked_count()
    }
}

/// Applies the ranking heuristic across an ordered cohort.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    heuristic: RankingHeuristic,
}

impl BatchRunner {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Ok(Self { heuristic: RankingHeuristic::new(config)? })
    }

    pub fn with_heuristic(heuristic: RankingHeuristic) -> Self {
        Self { heuristic }
    }

    /// Rank every patient independently against the same drug set.
    ///
    /// Never fails as a whole: a patient whose profile is invalid (or whose
    /// id repeats an earlier one) gets a `Failed` entry and processing
    /// continues. Entries come back in input order.
    pub fn run_cohort(
        &self,
        patients: &[PatientProfile],
        drugs: &[DrugProfile],
        horizon: u32,
    ) -> CohortResult {
        let mut entries = Vec::with_capacity(patients.len());
        let mut seen_ids: HashSet<&str> = HashSet::with_capacity(patients.len());

        for patient in patients {
            let outcome = if !seen_ids.insert(patient.id.as_str()) {
                CohortOutcome::Failed {
                    reason: format!("duplicate patient id {} in cohort", patient.id),
                }
            } else {
                match self.heuristic.rank(patient, drugs, horizon) {
                    Ok(rankings) => CohortOutcome::Ranked { rankings },
                    Err(e) => CohortOutcome::Failed { reason: e.to_string() },
                }
            };
            match &outcome {
                CohortOutcome::Ranked { rankings } => {
                    info!(patient = %patient.id, candidates = rankings.len(), "cohort entry ranked");
                }
                CohortOutcome::Failed { reason } => {
                    warn!(patient = %patient.id, %reason, "cohort entry failed");
                }
            }
            entries.push(CohortEntry { patient_id: patient.id.clone(), outcome });
        }

        CohortResult { entries }
    }
}
