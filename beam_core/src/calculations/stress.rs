//! # Stress Evaluator
//!
//! Turns an internal function into a stress check against an allowable
//! value: σ = M/W in bending, τ = T/Wt in torsion.
//!
//! The worst case comes from the exact extremum of the internal function,
//! not from the samples, so a peak between grid points is never missed.
//! Per-sample flags are reported alongside for plotting.

use serde::{Deserialize, Serialize};

use crate::calculations::piecewise::{Extremum, PiecewiseFunction};

/// Outcome of a stress verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// Stress at one sampled position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressSample {
    pub position_mm: f64,
    /// Signed stress (MPa)
    pub stress_mpa: f64,
    /// |stress| above the allowable value
    pub exceeds: bool,
}

/// Stress verification against an allowable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressCheck {
    /// "sigma" or "tau"
    pub quantity: String,
    /// Allowable stress (MPa)
    pub allowable_mpa: f64,
    /// Signed stress with the largest magnitude (MPa)
    pub worst_mpa: f64,
    /// Where the worst stress occurs (mm)
    pub worst_position_mm: f64,
    /// |worst| / allowable × 100
    pub utilization_pct: f64,
    /// allowable / |worst|; `None` when the beam carries no stress
    pub safety_factor: Option<f64>,
    pub verdict: Verdict,
    /// Samples along the span; empty for single-value checks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<StressSample>,
}

impl StressCheck {
    /// Check a single peak stress
    pub fn from_peak(quantity: &str, worst_mpa: f64, worst_position_mm: f64, allowable_mpa: f64) -> Self {
        let worst_abs = worst_mpa.abs();
        let verdict = if worst_abs <= allowable_mpa { Verdict::Pass } else { Verdict::Fail };
        if verdict == Verdict::Fail {
            log::warn!(
                "{} = {:.2} MPa at x = {:.1} mm exceeds allowable {:.2} MPa",
                quantity,
                worst_mpa,
                worst_position_mm,
                allowable_mpa
            );
        }
        StressCheck {
            quantity: quantity.to_string(),
            allowable_mpa,
            worst_mpa,
            worst_position_mm,
            utilization_pct: worst_abs / allowable_mpa * 100.0,
            safety_factor: if worst_abs > 0.0 { Some(allowable_mpa / worst_abs) } else { None },
            verdict,
            samples: Vec::new(),
        }
    }

    /// Check `function × factor` over the span, sampling at `positions`.
    ///
    /// At a position where the function jumps, the larger-magnitude side is
    /// sampled.
    pub fn from_function(
        quantity: &str,
        function: &PiecewiseFunction,
        factor: f64,
        allowable_mpa: f64,
        positions: &[f64],
    ) -> Self {
        let Extremum { position_mm, value } = function.extreme_abs();
        let mut check = Self::from_peak(quantity, value * factor, position_mm, allowable_mpa);
        check.samples = positions
            .iter()
            .map(|&x| {
                let (l, r) = (function.left_limit(x), function.right_limit(x));
                let v = if l.abs() > r.abs() { l } else { r };
                let stress_mpa = v * factor;
                StressSample {
                    position_mm: x,
                    stress_mpa,
                    exceeds: stress_mpa.abs() > allowable_mpa,
                }
            })
            .collect();
        check
    }

    /// Positions where the allowable stress is exceeded
    pub fn exceeded_positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter(|s| s.exceeds).map(|s| s.position_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::piecewise::{Polynomial, Segment};

    #[test]
    fn test_from_peak_pass() {
        let check = StressCheck::from_peak("sigma", -80.0, 500.0, 160.0);
        assert_eq!(check.verdict, Verdict::Pass);
        assert_eq!(check.utilization_pct, 50.0);
        assert_eq!(check.safety_factor, Some(2.0));
    }

    #[test]
    fn test_from_peak_fail_not_rounded_away() {
        // one part in a million over the limit still fails
        let check = StressCheck::from_peak("tau", 95.000095, 0.0, 95.0);
        assert_eq!(check.verdict, Verdict::Fail);
        assert!(check.utilization_pct > 100.0);
    }

    #[test]
    fn test_unloaded_has_no_safety_factor() {
        let check = StressCheck::from_peak("sigma", 0.0, 0.0, 160.0);
        assert_eq!(check.safety_factor, None);
        assert!(check.verdict.is_pass());
    }

    #[test]
    fn test_from_function_flags_samples() {
        // moment ramps from 0 to −300000 N·mm over 1000 mm; W = 1000 mm³
        let m = PiecewiseFunction::from_segments(vec![Segment {
            start_mm: 0.0,
            end_mm: 1000.0,
            poly: Polynomial::linear(0.0, -300.0),
        }]);
        let check = StressCheck::from_function("sigma", &m, 1.0 / 1000.0, 160.0, &[0.0, 250.0, 500.0, 750.0, 1000.0]);
        assert_eq!(check.worst_position_mm, 1000.0);
        assert!((check.worst_mpa + 300.0).abs() < 1e-9);
        assert_eq!(check.verdict, Verdict::Fail);
        let exceeded: Vec<f64> = check.exceeded_positions().collect();
        assert_eq!(exceeded, vec![750.0, 1000.0]);
    }
}
