//! # beam_core - Single-Span Beam Analysis Engine
//!
//! `beam_core` computes support reactions, exact piecewise internal-force
//! functions, stresses and plotting diagrams for one straight prismatic
//! span in bending or torsion. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Injected catalog**: Material and section tables are a read-only value passed into each solve
//! - **Closed-form families**: Every supported pair of end conditions is a named case
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::{Beam, BendingInput, CalculationItem, EndCondition, MaterialSelection};
//! use beam_core::catalog::Catalog;
//! use beam_core::loads::{BendingLoads, LoadZone};
//! use beam_core::section::SectionShape;
//! use beam_core::settings::SolverSettings;
//!
//! let item = CalculationItem::Bending(BendingInput {
//!     label: "T-1".to_string(),
//!     beam: Beam::new(
//!         1000.0,
//!         EndCondition::Pinned,
//!         EndCondition::Pinned,
//!         SectionShape::Rectangular { b_mm: 20.0, h_mm: 10.0 },
//!         MaterialSelection::catalog("S235JR"),
//!     ),
//!     loads: BendingLoads::new().with_zone(LoadZone::new(0.0, 1000.0, -1000.0)),
//! });
//!
//! let output = item.run(&Catalog::builtin(), &SolverSettings::default()).unwrap();
//! let json = serde_json::to_string_pretty(&output).unwrap();
//! assert!(json.contains("\"reactions\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Support validation, reactions, internal functions, stresses, diagrams
//! - [`loads`] - Point, zonal and full-span load model
//! - [`section`] - Section shapes and their properties
//! - [`catalog`] - Material and standard profile tables
//! - [`equations`] - Closed-form reaction kernels and section formulas
//! - [`settings`] - Solver tunables
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod section;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use catalog::Catalog;
pub use errors::{CalcError, CalcResult};
pub use settings::SolverSettings;
