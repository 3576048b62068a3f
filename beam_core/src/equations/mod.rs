//! # Structural Mechanics Equations
//!
//! Closed-form formulas used by the solver, kept in one place so they can
//! be checked against handbook tables.
//!
//! ## Modules
//!
//! - [`beam`] - Support reactions per support family (point loads and zones)
//! - [`section`] - Cross-section properties (A, I, W, Jt)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive upward, as entered (a gravity load is negative)
//! - **Reactions**: Positive upward; couples positive counter-clockwise
//! - **Shear**: Sum of forces to the left of the cut
//! - **Moment**: Positive when sagging (tension on bottom fiber)
//! - **Deflection**: Positive upward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod beam;
pub mod section;

pub use beam::{
    EndActions,
    simply_supported_point_reactions,
    simply_supported_zone_reactions,
    cantilever_point_reactions,
    cantilever_zone_reactions,
    fixed_fixed_point_reactions,
    fixed_fixed_zone_reactions,
    propped_cantilever_point_reactions,
    propped_cantilever_zone_reactions,
    torsion_fixed_fixed_point_reactions,
    torsion_fixed_fixed_zone_reactions,
};
