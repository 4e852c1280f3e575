//! Treatment score computation.
//!
//! A drug's score rewards cumulative severity reduction relative to the
//! no-treatment baseline and penalises side-effect burden:
//!
//! `score = (auc(baseline) − auc(treated)) / steps − burden_weight × burden`
//!
//! The improvement term is the area-under-curve delta averaged per step, not
//! the final-value delta, so a drug is credited for keeping severity down
//! across the whole horizon rather than at a single endpoint.

use morbyx_forecast::Trajectory;
use serde::{Deserialize, Serialize};

/// The numeric components a drug's score is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Mean per-step severity reduction vs the baseline run.
    pub improvement: f64,
    /// `burden_weight × side_effect_burden`.
    pub burden_penalty: f64,
    pub score: f64,
}

pub fn score_against_baseline(
    baseline: &Trajectory,
    treated: &Trajectory,
    side_effect_burden: f64,
    burden_weight: f64,
) -> ScoreBreakdown {
    debug_assert_eq!(baseline.len(), treated.len());
    let steps = (baseline.len().saturating_sub(1)).max(1) as f64;
    let improvement = (baseline.auc() - treated.auc()) / steps;
    let burden_penalty = burden_weight * side_effect_burden;
    ScoreBreakdown {
        improvement,
        burden_penalty,
        score: improvement - burden_penalty,
    }
}
