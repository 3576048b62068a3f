//! # Quick Calculators
//!
//! Direct-formula checks that skip the piecewise solver:
//!
//! - [`quick_bending`]: simply supported span with a centred point load
//! - [`quick_torsion`]: shaft of given polar moment under a constant torque
//!
//! Section properties are entered directly, so any shape works.

use serde::{Deserialize, Serialize};

use crate::calculations::beam::MaterialSelection;
use crate::calculations::stress::StressCheck;
use crate::catalog::{Catalog, MaterialProperties};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, NewtonMeters, NewtonMillimeters, Radians};

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be > 0"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be >= 0"));
    }
    Ok(())
}

// ============================================================================
// Centred point load
// ============================================================================

/// Simply supported span with a point load at midspan.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Q-1",
///   "span_mm": 1000.0,
///   "load_n": 500.0,
///   "inertia_mm4": 1666.67,
///   "section_modulus_mm3": 333.33,
///   "material": { "source": "Catalog", "name": "S235JR" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickBendingInput {
    pub label: String,
    pub span_mm: f64,
    /// Load magnitude F (N), acting downward
    pub load_n: f64,
    pub inertia_mm4: f64,
    pub section_modulus_mm3: f64,
    pub material: MaterialSelection,
}

impl QuickBendingInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("load_n", self.load_n)?;
        require_positive("span_mm", self.span_mm)?;
        require_positive("inertia_mm4", self.inertia_mm4)?;
        require_positive("section_modulus_mm3", self.section_modulus_mm3)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickBendingResult {
    pub label: String,
    pub material: MaterialProperties,
    /// M = F L / 4 (N·mm)
    pub max_moment_nmm: f64,
    /// σ = M / W (MPa)
    pub sigma_mpa: f64,
    /// y = F L³ / (48 E I), downward (mm)
    pub deflection_mm: f64,
    /// k = F / y (N/mm); `None` when unloaded
    pub stiffness_n_per_mm: Option<f64>,
    pub stress: StressCheck,
}

/// Centred point load on a simply supported span
pub fn quick_bending(input: &QuickBendingInput, catalog: &Catalog) -> CalcResult<QuickBendingResult> {
    input.validate()?;
    let material = input.material.resolve(catalog)?;

    let (f, l) = (input.load_n, input.span_mm);
    let max_moment_nmm = f * l / 4.0;
    let sigma_mpa = max_moment_nmm / input.section_modulus_mm3;
    let deflection_mm = f * l.powi(3) / (48.0 * material.e_mpa * input.inertia_mm4);
    let stiffness_n_per_mm = if deflection_mm > 0.0 { Some(f / deflection_mm) } else { None };

    let stress = StressCheck::from_peak("sigma", sigma_mpa, l / 2.0, material.sigma_amm_mpa);

    Ok(QuickBendingResult {
        label: input.label.clone(),
        material,
        max_moment_nmm,
        sigma_mpa,
        deflection_mm,
        stiffness_n_per_mm,
        stress,
    })
}

// ============================================================================
// Constant torque
// ============================================================================

/// Shaft under a constant torque.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Q-2",
///   "length_mm": 400.0,
///   "torque_nm": 60.0,
///   "polar_moment_mm4": 15708.0,
///   "outer_radius_mm": 10.0,
///   "material": { "source": "Catalog", "name": "C45" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickTorsionInput {
    pub label: String,
    pub length_mm: f64,
    /// Torque T (N·m)
    pub torque_nm: f64,
    /// Polar moment J (mm⁴)
    pub polar_moment_mm4: f64,
    /// Outer radius r (mm)
    pub outer_radius_mm: f64,
    pub material: MaterialSelection,
}

impl QuickTorsionInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("torque_nm", self.torque_nm)?;
        require_positive("length_mm", self.length_mm)?;
        require_positive("polar_moment_mm4", self.polar_moment_mm4)?;
        require_positive("outer_radius_mm", self.outer_radius_mm)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickTorsionResult {
    pub label: String,
    pub material: MaterialProperties,
    /// τ = T r / J (MPa)
    pub tau_mpa: f64,
    /// θ = T L / (G J)
    pub twist_rad: f64,
    pub twist_deg: f64,
    pub stress: StressCheck,
}

/// Constant torque on a shaft
pub fn quick_torsion(input: &QuickTorsionInput, catalog: &Catalog) -> CalcResult<QuickTorsionResult> {
    input.validate()?;
    let material = input.material.resolve(catalog)?;

    let t = NewtonMillimeters::from(NewtonMeters(input.torque_nm)).0;
    let tau_mpa = t * input.outer_radius_mm / input.polar_moment_mm4;
    let twist = Radians(t * input.length_mm / (material.g_mpa * input.polar_moment_mm4));

    let stress = StressCheck::from_peak("tau", tau_mpa, 0.0, material.tau_amm_mpa);

    Ok(QuickTorsionResult {
        label: input.label.clone(),
        material,
        tau_mpa,
        twist_rad: twist.0,
        twist_deg: Degrees::from(twist).0,
        stress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::stress::Verdict;
    use approx::assert_relative_eq;

    fn custom() -> MaterialSelection {
        MaterialSelection::Custom(MaterialProperties {
            e_mpa: 206_000.0,
            g_mpa: 80_000.0,
            sigma_amm_mpa: 160.0,
            tau_amm_mpa: 95.0,
        })
    }

    #[test]
    fn test_quick_bending() {
        let input = QuickBendingInput {
            label: "Q".to_string(),
            span_mm: 1000.0,
            load_n: 200.0,
            inertia_mm4: 1666.6666666666667,
            section_modulus_mm3: 333.3333333333333,
            material: custom(),
        };
        let r = quick_bending(&input, &Catalog::builtin()).unwrap();
        assert_relative_eq!(r.max_moment_nmm, 50_000.0);
        assert_relative_eq!(r.sigma_mpa, 150.0, max_relative = 1e-12);
        let y = 200.0 * 1e9 / (48.0 * 206_000.0 * 1666.6666666666667);
        assert_relative_eq!(r.deflection_mm, y, max_relative = 1e-12);
        assert_relative_eq!(r.stiffness_n_per_mm.unwrap(), 200.0 / y, max_relative = 1e-12);
        assert_eq!(r.stress.verdict, Verdict::Pass);
    }

    #[test]
    fn test_quick_bending_unloaded() {
        let input = QuickBendingInput {
            label: "Q".to_string(),
            span_mm: 1000.0,
            load_n: 0.0,
            inertia_mm4: 1000.0,
            section_modulus_mm3: 100.0,
            material: custom(),
        };
        let r = quick_bending(&input, &Catalog::builtin()).unwrap();
        assert_eq!(r.stiffness_n_per_mm, None);
        assert_eq!(r.stress.safety_factor, None);
    }

    #[test]
    fn test_quick_negative_load_rejected() {
        let input = QuickBendingInput {
            label: "Q".to_string(),
            span_mm: 1000.0,
            load_n: -5.0,
            inertia_mm4: 1000.0,
            section_modulus_mm3: 100.0,
            material: custom(),
        };
        let err = quick_bending(&input, &Catalog::builtin()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_quick_torsion() {
        let j = std::f64::consts::PI * 20.0_f64.powi(4) / 32.0;
        let input = QuickTorsionInput {
            label: "Q".to_string(),
            length_mm: 400.0,
            torque_nm: 60.0,
            polar_moment_mm4: j,
            outer_radius_mm: 10.0,
            material: custom(),
        };
        let r = quick_torsion(&input, &Catalog::builtin()).unwrap();
        assert_relative_eq!(r.tau_mpa, 60_000.0 * 10.0 / j, max_relative = 1e-12);
        assert_relative_eq!(r.twist_rad, 60_000.0 * 400.0 / (80_000.0 * j), max_relative = 1e-12);
        assert_relative_eq!(r.twist_deg, r.twist_rad.to_degrees(), max_relative = 1e-12);
        // τ ≈ 38.2 MPa
        assert_eq!(r.stress.verdict, Verdict::Pass);
    }
}
