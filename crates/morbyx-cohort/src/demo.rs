//! Demo cohort and formulary.
//!
//! Explicit constructed values, not module-level shared state: callers get a
//! fresh copy to pass into `BatchRunner` (or a UI seeding form fields).

use morbyx_common::{DecayKind, DiseaseKind, DrugProfile, PatientProfile};

/// The two-patient example cohort.
pub fn example_cohort() -> Vec<PatientProfile> {
    vec![
        PatientProfile {
            id: "Patient 1".into(),
            baseline_severity: 40.0,
            age: 30,
            comorbidities: Default::default(),
            disease: DiseaseKind::Influenza,
        },
        PatientProfile {
            id: "Patient 2".into(),
            baseline_severity: 55.0,
            age: 65,
            comorbidities: ["diabetes", "hypertension"].iter().map(|s| s.to_string()).collect(),
            disease: DiseaseKind::Covid19,
        },
    ]
}

/// A small candidate drug list to rank against the demo cohort.
pub fn example_formulary() -> Vec<DrugProfile> {
    vec![
        DrugProfile {
            name: "Oseltamivir".into(),
            effect_magnitude: 6.0,
            onset_delay: 1,
            decay: DecayKind::Exponential { half_life_steps: 4.0 },
            side_effect_burden: 3.0,
        },
        DrugProfile {
            name: "Zanamivir".into(),
            effect_magnitude: 5.0,
            onset_delay: 0,
            decay: DecayKind::Exponential { half_life_steps: 3.0 },
            side_effect_burden: 2.0,
        },
        DrugProfile {
            name: "Paracetamol".into(),
            effect_magnitude: 2.0,
            onset_delay: 0,
            decay: DecayKind::None,
            side_effect_burden: 1.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use morbyx_common::SimulationConfig;

    #[test]
    fn test_demo_data_passes_default_validation() {
        let cfg = SimulationConfig::default();
        for p in example_cohort() {
            p.validate(&cfg).unwrap();
        }
        for d in example_formulary() {
            d.validate(&cfg).unwrap();
        }
    }

    #[test]
    fn test_demo_ids_are_unique() {
        let cohort = example_cohort();
        let mut ids: Vec<_> = cohort.iter().map(|p| &p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), cohort.len());
    }
}
