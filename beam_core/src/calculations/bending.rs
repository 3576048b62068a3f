//! # Beam Bending Analysis
//!
//! Reactions, internal forces, deflection and bending stress of a single
//! span under point, zonal and full-span loads.
//!
//! ## Sign Convention
//!
//! - Forces, reactions and deflection: positive upward
//! - Reaction couples: positive counter-clockwise
//! - Moment: sagging positive, `M(L) = C_right`
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{Beam, MaterialSelection};
//! use beam_core::calculations::bending::{solve_bending, BendingInput};
//! use beam_core::calculations::supports::EndCondition;
//! use beam_core::catalog::Catalog;
//! use beam_core::loads::{BendingLoads, LoadPoint};
//! use beam_core::section::SectionShape;
//! use beam_core::settings::SolverSettings;
//!
//! let input = BendingInput {
//!     label: "Bracket".to_string(),
//!     beam: Beam::new(
//!         1000.0,
//!         EndCondition::Fixed,
//!         EndCondition::Free,
//!         SectionShape::Rectangular { b_mm: 20.0, h_mm: 10.0 },
//!         MaterialSelection::catalog("S235JR"),
//!     ),
//!     loads: BendingLoads::new().with_point(LoadPoint::new(1000.0, -100.0)),
//! };
//!
//! let result = solve_bending(&input, &Catalog::builtin(), &SolverSettings::default()).unwrap();
//! assert!((result.reactions.left.force_n - 100.0).abs() < 1e-9);
//! assert!(result.deflection_at(1000.0) < 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::beam::Beam;
use crate::calculations::diagram::Diagram;
use crate::calculations::internal_forces::{build_bending_functions, BendingFunctions};
use crate::calculations::piecewise::Extremum;
use crate::calculations::reactions::{solve_bending_reactions, BendingReactions};
use crate::calculations::stress::StressCheck;
use crate::calculations::supports::{validate_bending, BendingFamily};
use crate::catalog::{Catalog, MaterialProperties};
use crate::errors::CalcResult;
use crate::loads::BendingLoads;
use crate::section::SectionProperties;
use crate::settings::SolverSettings;

/// Deflection magnitude below which the equivalent stiffness is undefined (mm)
const NEGLIGIBLE_DEFLECTION_MM: f64 = 1e-12;

/// Input for a bending analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Shelf beam",
///   "beam": {
///     "length_mm": 1000.0,
///     "left": "PINNED",
///     "right": "PINNED",
///     "section": { "shape": "Rectangular", "b_mm": 20.0, "h_mm": 10.0 },
///     "material": { "source": "Catalog", "name": "S235JR" }
///   },
///   "loads": {
///     "point_loads": [ { "position_mm": 300.0, "magnitude": -50.0 } ],
///     "zones": [ { "start_mm": 0.0, "end_mm": 1000.0, "total": -1000.0 } ]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingInput {
    /// User label (e.g., "T-1")
    pub label: String,
    pub beam: Beam,
    #[serde(default)]
    pub loads: BendingLoads,
}

/// Headline values of a bending solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingSummary {
    /// Largest |V| (N)
    pub max_shear: Extremum,
    /// Largest |M| (N·mm)
    pub max_moment: Extremum,
    /// Largest |y| (mm)
    pub max_deflection: Extremum,
    /// (max|P| + |ΣQ_zones|) / |y|max (N/mm); `None` when the beam does not deflect
    pub equivalent_stiffness_n_per_mm: Option<f64>,
    /// Sum of zone totals, full-span load included (N)
    pub total_zone_load_n: f64,
    /// Nothing was applied after dropping zero loads
    pub no_loads: bool,
}

/// Results of a bending solve.
///
/// Diagrams serialize as sample arrays; the exact internal functions stay
/// in memory and are reachable through the `*_at` accessors.
#[derive(Debug, Clone, Serialize)]
pub struct BendingResult {
    pub label: String,
    pub family: BendingFamily,
    pub length_mm: f64,
    pub section: SectionProperties,
    pub material: MaterialProperties,
    /// E·I (N·mm²)
    pub flexural_rigidity_nmm2: f64,
    pub reactions: BendingReactions,
    /// V(x) in N
    pub shear: Diagram,
    /// M(x) in N·mm
    pub moment: Diagram,
    /// y(x) in mm
    pub deflection: Diagram,
    /// σ = M/W against σ_amm
    pub stress: StressCheck,
    pub summary: BendingSummary,
    #[serde(skip)]
    functions: BendingFunctions,
}

impl BendingResult {
    /// Shear force at x (N), right-continuous
    pub fn shear_at(&self, x_mm: f64) -> f64 {
        self.functions.shear.value_at(x_mm)
    }

    /// Bending moment at x (N·mm)
    pub fn moment_at(&self, x_mm: f64) -> f64 {
        self.functions.moment.value_at(x_mm)
    }

    /// Slope at x (rad)
    pub fn slope_at(&self, x_mm: f64) -> f64 {
        self.functions.slope.value_at(x_mm)
    }

    /// Deflection at x (mm)
    pub fn deflection_at(&self, x_mm: f64) -> f64 {
        self.functions.deflection.value_at(x_mm)
    }

    pub fn functions(&self) -> &BendingFunctions {
        &self.functions
    }

    pub fn passes(&self) -> bool {
        self.stress.verdict.is_pass()
    }
}

/// Solve a beam in bending.
///
/// Configuration and input errors are raised before any reaction is
/// computed; a failed equilibrium or compatibility check returns
/// `NumericConsistency` instead of a result.
pub fn solve_bending(input: &BendingInput, catalog: &Catalog, settings: &SolverSettings) -> CalcResult<BendingResult> {
    settings.validate()?;
    let beam = &input.beam;
    let l = beam.length_mm;

    let family = validate_bending(beam.left, beam.right, l)?;
    let loads = input.loads.normalize(l)?;
    let section = beam.section_properties(catalog)?;
    let material = beam.material.resolve(catalog)?;
    let ei = material.e_mpa * section.inertia_mm4;

    log::debug!(
        "Solving '{}': {} over {} mm, {} point loads, {} zones",
        input.label,
        family.name(),
        l,
        loads.points.len(),
        loads.zones.len()
    );

    let tolerance = settings.equilibrium_tolerance;
    let reactions = solve_bending_reactions(family, l, &loads, tolerance)?;
    let functions = build_bending_functions(l, &loads, &reactions, ei, tolerance)?;

    let grid = settings.effective_sample_count();
    let shear = Diagram::new("V", "N", functions.shear.clone(), grid);
    let moment = Diagram::new("M", "N·mm", functions.moment.clone(), grid);
    let deflection = Diagram::new("y", "mm", functions.deflection.clone(), grid);

    let stress = StressCheck::from_function(
        "sigma",
        &functions.moment,
        1.0 / section.section_modulus_mm3,
        material.sigma_amm_mpa,
        &moment.positions(),
    );

    let max_deflection = functions.deflection.extreme_abs();
    let total_zone_load_n = loads.total_zones();
    let equivalent_stiffness_n_per_mm = if max_deflection.abs() > NEGLIGIBLE_DEFLECTION_MM {
        Some((loads.max_abs_point() + total_zone_load_n.abs()) / max_deflection.abs())
    } else {
        None
    };
    let summary = BendingSummary {
        max_shear: functions.shear.extreme_abs(),
        max_moment: functions.moment.extreme_abs(),
        max_deflection,
        equivalent_stiffness_n_per_mm,
        total_zone_load_n,
        no_loads: loads.is_empty(),
    };

    Ok(BendingResult {
        label: input.label.clone(),
        family,
        length_mm: l,
        section,
        material,
        flexural_rigidity_nmm2: ei,
        reactions,
        shear,
        moment,
        deflection,
        stress,
        summary,
        functions,
    })
}
