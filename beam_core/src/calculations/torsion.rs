//! # Shaft Torsion Analysis
//!
//! Reaction torques, internal torque, twist and shear stress of a single
//! span under point, zonal and full-span torques.
//!
//! Torques are normalized to N·m in the load model whatever unit they were
//! entered in. Twist is computed in radians and plotted in degrees.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{Beam, MaterialSelection};
//! use beam_core::calculations::supports::EndCondition;
//! use beam_core::calculations::torsion::{solve_torsion, TorsionInput};
//! use beam_core::catalog::Catalog;
//! use beam_core::loads::{LoadPoint, TorsionLoads};
//! use beam_core::section::SectionShape;
//! use beam_core::settings::SolverSettings;
//!
//! let input = TorsionInput {
//!     label: "Drive shaft".to_string(),
//!     beam: Beam::new(
//!         500.0,
//!         EndCondition::Fixed,
//!         EndCondition::Free,
//!         SectionShape::Round { d_mm: 20.0 },
//!         MaterialSelection::catalog("C45"),
//!     ),
//!     loads: TorsionLoads::new().with_point(LoadPoint::new(500.0, 50.0)),
//! };
//!
//! let result = solve_torsion(&input, &Catalog::builtin(), &SolverSettings::default()).unwrap();
//! assert!((result.reactions.left.torque_nm + 50.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::beam::Beam;
use crate::calculations::diagram::Diagram;
use crate::calculations::internal_forces::{build_torsion_functions, TorsionFunctions};
use crate::calculations::piecewise::Extremum;
use crate::calculations::reactions::{solve_torsion_reactions, TorsionReactions};
use crate::calculations::stress::StressCheck;
use crate::calculations::supports::{validate_torsion, TorsionFamily};
use crate::catalog::{Catalog, MaterialProperties};
use crate::errors::{CalcError, CalcResult};
use crate::loads::TorsionLoads;
use crate::section::TorsionProperties;
use crate::settings::SolverSettings;
use crate::units::{Degrees, Radians};

/// Input for a torsion analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Shaft A",
///   "beam": {
///     "length_mm": 800.0,
///     "left": "FIXED",
///     "right": "FIXED",
///     "section": { "shape": "Tube", "outer_d_mm": 40.0, "wall_mm": 4.0 },
///     "material": { "source": "Catalog", "name": "42CrMo4" }
///   },
///   "loads": {
///     "point_torques": [ { "position_mm": 300.0, "magnitude": 120.0 } ],
///     "unit": "NewtonMeter"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorsionInput {
    pub label: String,
    pub beam: Beam,
    #[serde(default)]
    pub loads: TorsionLoads,
}

/// Headline values of a torsion solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorsionSummary {
    /// Largest |T| (N·m)
    pub max_torque: Extremum,
    /// Largest |τ| (MPa)
    pub max_tau_mpa: f64,
    /// Largest |φ| (degrees)
    pub max_twist_deg: f64,
    /// Largest |φ| (radians)
    pub max_twist_rad: f64,
    /// |φ(L) − φ(0)| (degrees)
    pub relative_rotation_deg: f64,
    /// Sum of distributed torques, full-span torque included (N·m)
    pub total_distributed_torque_nm: f64,
    pub no_loads: bool,
}

/// Results of a torsion solve
#[derive(Debug, Clone, Serialize)]
pub struct TorsionResult {
    pub label: String,
    pub family: TorsionFamily,
    pub length_mm: f64,
    pub torsion_section: TorsionProperties,
    pub material: MaterialProperties,
    /// G·Jt (N·mm²)
    pub torsional_rigidity_nmm2: f64,
    pub reactions: TorsionReactions,
    /// T(x) in N·m
    pub torque: Diagram,
    /// φ(x) in degrees
    pub twist: Diagram,
    /// τ = T/Wt against τ_amm
    pub stress: StressCheck,
    pub summary: TorsionSummary,
    #[serde(skip)]
    functions: TorsionFunctions,
}

impl TorsionResult {
    /// Internal torque at x (N·m), right-continuous
    pub fn torque_at(&self, x_mm: f64) -> f64 {
        self.functions.torque.value_at(x_mm)
    }

    /// Twist at x (rad)
    pub fn twist_at(&self, x_mm: f64) -> Radians {
        Radians(self.functions.twist.value_at(x_mm))
    }

    pub fn functions(&self) -> &TorsionFunctions {
        &self.functions
    }

    pub fn passes(&self) -> bool {
        self.stress.verdict.is_pass()
    }
}

/// Solve a shaft in torsion.
///
/// Catalog profiles carry no torsion data and return `SectionNotSupported`.
pub fn solve_torsion(input: &TorsionInput, catalog: &Catalog, settings: &SolverSettings) -> CalcResult<TorsionResult> {
    settings.validate()?;
    let beam = &input.beam;
    let l = beam.length_mm;

    let family = validate_torsion(beam.left, beam.right, l)?;
    let loads = input.loads.normalize(l, settings.torque_input_unit)?;
    let section = beam.section_properties(catalog)?;
    let torsion_section = section.torsion.ok_or_else(|| {
        CalcError::section_not_supported(beam.section.display_name(), "No torsion constant available for this profile")
    })?;
    let material = beam.material.resolve(catalog)?;
    let gj = material.g_mpa * torsion_section.torsion_constant_mm4;

    log::debug!(
        "Solving '{}': {} over {} mm, {} point torques, {} zones",
        input.label,
        family.name(),
        l,
        loads.points.len(),
        loads.zones.len()
    );

    let tolerance = settings.equilibrium_tolerance;
    let reactions = solve_torsion_reactions(family, l, &loads, tolerance)?;
    let functions = build_torsion_functions(l, &loads, &reactions, gj, tolerance)?;

    let grid = settings.effective_sample_count();
    let twist_deg = functions.twist.scaled(Degrees::from(Radians(1.0)).0);
    let torque = Diagram::new("T", "N·m", functions.torque.clone(), grid);
    let twist = Diagram::new("theta", "deg", twist_deg, grid);

    // T in N·m → N·mm
    let stress = StressCheck::from_function(
        "tau",
        &functions.torque,
        1000.0 / torsion_section.torsional_modulus_mm3,
        material.tau_amm_mpa,
        &torque.positions(),
    );

    let max_twist = Radians(functions.twist.extreme_abs().abs());
    let relative = Radians((functions.twist.value_at(l) - functions.twist.value_at(0.0)).abs());
    let summary = TorsionSummary {
        max_torque: functions.torque.extreme_abs(),
        max_tau_mpa: stress.worst_mpa.abs(),
        max_twist_deg: Degrees::from(max_twist).0,
        max_twist_rad: max_twist.0,
        relative_rotation_deg: Degrees::from(relative).0,
        total_distributed_torque_nm: loads.total_zones(),
        no_loads: loads.is_empty(),
    };

    Ok(TorsionResult {
        label: input.label.clone(),
        family,
        length_mm: l,
        torsion_section,
        material,
        torsional_rigidity_nmm2: gj,
        reactions,
        torque,
        twist,
        stress,
        summary,
        functions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::beam::MaterialSelection;
    use crate::calculations::supports::EndCondition;
    use crate::loads::{LoadPoint, LoadZone};
    use crate::section::SectionShape;
    use crate::units::TorqueUnit;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn input(left: EndCondition, right: EndCondition, section: SectionShape, loads: TorsionLoads) -> TorsionInput {
        TorsionInput {
            label: "shaft".to_string(),
            beam: Beam::new(
                500.0,
                left,
                right,
                section,
                MaterialSelection::Custom(MaterialProperties {
                    e_mpa: 210_000.0,
                    g_mpa: 80_000.0,
                    sigma_amm_mpa: 160.0,
                    tau_amm_mpa: 95.0,
                }),
            ),
            loads,
        }
    }

    fn solve(input: &TorsionInput) -> CalcResult<TorsionResult> {
        solve_torsion(input, &Catalog::builtin(), &SolverSettings::default())
    }

    #[test]
    fn test_fixed_free_tip_torque() {
        let loads = TorsionLoads::new().with_point(LoadPoint::new(500.0, 50.0));
        let r = solve(&input(EndCondition::Fixed, EndCondition::Free, SectionShape::Round { d_mm: 20.0 }, loads)).unwrap();

        assert_relative_eq!(r.reactions.left.torque_nm, -50.0, epsilon = 1e-9);
        assert_relative_eq!(r.torque_at(250.0), -50.0, epsilon = 1e-9);

        // τ = 16 T / (π d³)
        let tau = 16.0 * 50_000.0 / (PI * 8000.0);
        assert_relative_eq!(r.summary.max_tau_mpa, tau, max_relative = 1e-9);

        // φ = T L / (G J)
        let j = PI * 20.0_f64.powi(4) / 32.0;
        let phi = 50_000.0 * 500.0 / (80_000.0 * j);
        assert_relative_eq!(r.summary.max_twist_rad, phi, max_relative = 1e-9);
        assert_relative_eq!(r.summary.max_twist_deg, phi.to_degrees(), max_relative = 1e-9);
        // twist runs negative here; the end-to-end rotation is reported as a magnitude
        assert!(r.twist_at(500.0).0 < 0.0);
        assert_relative_eq!(r.summary.relative_rotation_deg, phi.to_degrees(), max_relative = 1e-9);
    }

    #[test]
    fn test_torque_unit_normalized() {
        let nm = TorsionLoads::new().with_point(LoadPoint::new(500.0, 50.0));
        let nmm = TorsionLoads::new()
            .with_point(LoadPoint::new(500.0, 50_000.0))
            .with_unit(TorqueUnit::NewtonMillimeter);
        let section = SectionShape::Round { d_mm: 20.0 };
        let a = solve(&input(EndCondition::Fixed, EndCondition::Free, section.clone(), nm)).unwrap();
        let b = solve(&input(EndCondition::Fixed, EndCondition::Free, section, nmm)).unwrap();
        assert_relative_eq!(a.reactions.left.torque_nm, b.reactions.left.torque_nm, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_fixed_ends_do_not_rotate() {
        let loads = TorsionLoads::new().with_zone(LoadZone::new(100.0, 300.0, 80.0));
        let r = solve(&input(
            EndCondition::Fixed,
            EndCondition::Fixed,
            SectionShape::Tube { outer_d_mm: 40.0, wall_mm: 4.0 },
            loads,
        ))
        .unwrap();
        assert!(r.twist_at(0.0).0.abs() < 1e-15);
        assert!(r.twist_at(500.0).0.abs() < 1e-12);
        assert_relative_eq!(r.summary.total_distributed_torque_nm, 80.0);
    }

    #[test]
    fn test_pinned_rejected_in_torsion() {
        let loads = TorsionLoads::new().with_point(LoadPoint::new(200.0, 10.0));
        let err = solve(&input(EndCondition::Pinned, EndCondition::Fixed, SectionShape::Round { d_mm: 20.0 }, loads))
            .unwrap_err();
        assert!(matches!(err, CalcError::Configuration { .. }));
    }

    #[test]
    fn test_standard_profile_not_supported() {
        let loads = TorsionLoads::new().with_point(LoadPoint::new(500.0, 10.0));
        let section = SectionShape::Standard { name: "IPE 100".to_string() };
        let err = solve(&input(EndCondition::Fixed, EndCondition::Free, section, loads)).unwrap_err();
        assert_eq!(err.error_code(), "SECTION_NOT_SUPPORTED");
    }
}
