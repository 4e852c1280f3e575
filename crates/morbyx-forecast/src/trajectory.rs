//! The time series a single simulation run produces.

use serde::{Deserialize, Serialize};

/// One projected point: step index and severity at that step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub step: u32,
    pub severity: f64,
}

/// Ordered severity series for one (patient, drug-or-none) run.
///
/// Length is horizon + 1; the first point is always the patient baseline.
/// Built once by the engine and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub(crate) fn new(points: Vec<TrajectoryPoint>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn severities(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.severity)
    }

    /// Severity at the end of the horizon.
    pub fn final_severity(&self) -> f64 {
        self.points.last().map(|p| p.severity).unwrap_or_default()
    }

    /// Trapezoidal area under the severity curve, with unit step width.
    /// A single-point trajectory has zero area.
    pub fn auc(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[0].severity + w[1].severity) / 2.0)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traj(severities: &[f64]) -> Trajectory {
        Trajectory::new(
            severities
                .iter()
                .enumerate()
                .map(|(i, &s)| TrajectoryPoint { step: i as u32, severity: s })
                .collect(),
        )
    }

    #[test]
    fn test_auc_trapezoid() {
        // flat line at 10 over 2 steps: area = 20
        assert_eq!(traj(&[10.0, 10.0, 10.0]).auc(), 20.0);
        // ramp 0..2: (0+1)/2 + (1+2)/2 = 2
        assert_eq!(traj(&[0.0, 1.0, 2.0]).auc(), 2.0);
    }

    #[test]
    fn test_single_point_has_zero_auc() {
        let t = traj(&[42.0]);
        assert_eq!(t.auc(), 0.0);
        assert_eq!(t.final_severity(), 42.0);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_serializes_as_point_series() {
        let json = serde_json::to_value(traj(&[50.0, 52.0])).unwrap();
        assert_eq!(json["points"][1]["step"], 1);
        assert_eq!(json["points"][1]["severity"], 52.0);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(traj(&[1.0, 2.0]), traj(&[1.0, 2.0]));
        assert_ne!(traj(&[1.0, 2.0]), traj(&[1.0, 2.5]));
    }
}
