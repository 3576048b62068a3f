//! # Beam Calculations
//!
//! This module contains the beam analysis engine. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `solve_*(input, catalog, settings) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Pipeline
//!
//! load model + catalog values → [`supports`] → [`reactions`] →
//! [`internal_forces`] → [`stress`] → [`diagram`]
//!
//! ## Available Calculations
//!
//! - [`bending`] - Single span in bending, any valid pair of end conditions
//! - [`torsion`] - Single shaft in torsion
//! - [`quick`] - Direct-formula bending and torsion checks

pub mod beam;
pub mod bending;
pub mod diagram;
pub mod internal_forces;
pub mod piecewise;
pub mod quick;
pub mod reactions;
pub mod stress;
pub mod supports;
pub mod torsion;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::errors::CalcResult;
use crate::settings::SolverSettings;

// Re-export commonly used types
pub use beam::{Beam, MaterialSelection};
pub use bending::{solve_bending, BendingInput, BendingResult, BendingSummary};
pub use diagram::{Diagram, DiagramSample};
pub use quick::{quick_bending, quick_torsion, QuickBendingInput, QuickBendingResult, QuickTorsionInput, QuickTorsionResult};
pub use stress::{StressCheck, Verdict};
pub use supports::{BendingFamily, EndCondition, Side, Stability, TorsionFamily};
pub use torsion::{solve_torsion, TorsionInput, TorsionResult, TorsionSummary};

/// Enum wrapper for all calculation types.
///
/// A job file holds one of these.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "QuickTorsion",
///   "label": "Q-2",
///   "length_mm": 400.0,
///   "torque_nm": 60.0,
///   "polar_moment_mm4": 15708.0,
///   "outer_radius_mm": 10.0,
///   "material": { "source": "Catalog", "name": "C45" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Span in bending
    Bending(BendingInput),
    /// Shaft in torsion
    Torsion(TorsionInput),
    /// Centred point load, direct formulas
    QuickBending(QuickBendingInput),
    /// Constant torque, direct formulas
    QuickTorsion(QuickTorsionInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Bending(b) => &b.label,
            CalculationItem::Torsion(t) => &t.label,
            CalculationItem::QuickBending(q) => &q.label,
            CalculationItem::QuickTorsion(q) => &q.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Bending(_) => "Bending",
            CalculationItem::Torsion(_) => "Torsion",
            CalculationItem::QuickBending(_) => "QuickBending",
            CalculationItem::QuickTorsion(_) => "QuickTorsion",
        }
    }

    /// Run the calculation against a catalog snapshot
    pub fn run(&self, catalog: &Catalog, settings: &SolverSettings) -> CalcResult<CalculationOutput> {
        log::debug!("Running {} '{}'", self.calc_type(), self.label());
        let output = match self {
            CalculationItem::Bending(input) => CalculationOutput::Bending(solve_bending(input, catalog, settings)?),
            CalculationItem::Torsion(input) => CalculationOutput::Torsion(solve_torsion(input, catalog, settings)?),
            CalculationItem::QuickBending(input) => CalculationOutput::QuickBending(quick_bending(input, catalog)?),
            CalculationItem::QuickTorsion(input) => CalculationOutput::QuickTorsion(quick_torsion(input, catalog)?),
        };
        Ok(output)
    }
}

/// Result of any [`CalculationItem`]
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Bending(BendingResult),
    Torsion(TorsionResult),
    QuickBending(QuickBendingResult),
    QuickTorsion(QuickTorsionResult),
}

impl CalculationOutput {
    /// Stress verification of the result
    pub fn stress(&self) -> &StressCheck {
        match self {
            CalculationOutput::Bending(r) => &r.stress,
            CalculationOutput::Torsion(r) => &r.stress,
            CalculationOutput::QuickBending(r) => &r.stress,
            CalculationOutput::QuickTorsion(r) => &r.stress,
        }
    }

    pub fn passes(&self) -> bool {
        self.stress().verdict.is_pass()
    }
}
