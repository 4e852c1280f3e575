//! Human-readable rationale for a ranking row.
//!
//! A pure template over the already-computed numeric fields of a
//! `RankingResult` — no model state, so the same numbers always produce the
//! same hint and a hint can be regenerated from a stored result.

/// Build the explanation string for one ranked drug.
pub fn hint_for(improvement: f64, side_effect_burden: f64) -> String {
    let benefit = if improvement >= 10.0 {
        format!("Substantially reduces projected severity ({improvement:.1}/step below baseline)")
    } else if improvement >= 3.0 {
        format!("Moderately reduces projected severity ({improvement:.1}/step below baseline)")
    } else if improvement > 0.0 {
        format!("Marginally reduces projected severity ({improvement:.1}/step below baseline)")
    } else if improvement == 0.0 {
        "No projected benefit over no treatment".to_string()
    } else {
        format!("Worsens the projected course ({:.1}/step above baseline)", -improvement)
    };

    let burden = if side_effect_burden == 0.0 {
        "no side-effect burden".to_string()
    } else if side_effect_burden < 5.0 {
        format!("low side-effect burden ({side_effect_burden:.1})")
    } else if side_effect_burden < 20.0 {
        format!("moderate side-effect burden ({side_effect_burden:.1})")
    } else {
        format!("high side-effect burden ({side_effect_burden:.1})")
    };

    format!("{benefit}; {burden}.")
}
