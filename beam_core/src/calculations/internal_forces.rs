//! # Internal Function Builder
//!
//! Builds the exact piecewise internal functions of a solved span:
//!
//! - Bending: shear V(x), moment M(x), slope θ(x), deflection y(x)
//! - Torsion: torque T(x), twist φ(x)
//!
//! Segment boundaries are 0, L, every point-load position and every zone
//! edge. Shear (torque) is accumulated from the left reaction and the loads
//! left of each segment; the other functions are running integrals, so they
//! are continuous by construction.
//!
//! ## Integration Constants
//!
//! `EI·y'' = M`. With Θ₀ and Y₀ the integrals started from zero:
//!
//! | Family                     | θ(0)              | y(0)                   |
//! |----------------------------|-------------------|------------------------|
//! | clamped at the left        | 0                 | 0                      |
//! | simply supported           | −Y₀(L)/L          | 0                      |
//! | cantilever clamped right   | −Θ₀(L)            | −(Y₀(L) + θ(0)·L)      |
//! | propped, clamped right     | −Θ₀(L)            | 0                      |
//!
//! The remaining end conditions of the indeterminate families are then
//! compatibility checks: they hold only if the reactions are right.

use serde::{Deserialize, Serialize};

use crate::calculations::piecewise::{PiecewiseFunction, Polynomial, Segment};
use crate::calculations::reactions::{BendingReactions, TorsionReactions};
use crate::calculations::supports::{BendingFamily, Side, TorsionFamily};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{merge_tolerance, LoadSet};

/// Internal functions of a span in bending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingFunctions {
    /// Shear force (N)
    pub shear: PiecewiseFunction,
    /// Bending moment, sagging positive (N·mm)
    pub moment: PiecewiseFunction,
    /// Slope (rad)
    pub slope: PiecewiseFunction,
    /// Deflection, positive upward (mm)
    pub deflection: PiecewiseFunction,
}

/// Internal functions of a shaft in torsion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorsionFunctions {
    /// Internal torque (N·m)
    pub torque: PiecewiseFunction,
    /// Twist angle (rad)
    pub twist: PiecewiseFunction,
}

/// Step-and-ramp accumulation of `left_value` plus every load left of x.
///
/// A point load counts from its own position onward; a zone contributes
/// its intensity times the covered length.
pub fn accumulate_loads(length_mm: f64, loads: &LoadSet, left_value: f64) -> PiecewiseFunction {
    let tol = merge_tolerance(length_mm);
    let xs = loads.boundaries(length_mm);

    let segments = xs
        .windows(2)
        .map(|w| {
            let (start, end) = (w[0], w[1]);
            let mut c0 = left_value;
            let mut c1 = 0.0;

            for p in &loads.points {
                if p.position_mm <= start + tol {
                    c0 += p.magnitude;
                }
            }
            for z in &loads.zones {
                if z.end_mm <= start + tol {
                    c0 += z.total;
                } else if z.start_mm <= start + tol {
                    let w = z.intensity();
                    c0 += w * (start - z.start_mm);
                    c1 += w;
                }
            }

            Segment {
                start_mm: start,
                end_mm: end,
                poly: Polynomial::linear(c0, c1),
            }
        })
        .collect();

    PiecewiseFunction::from_segments(segments)
}

fn check_compatibility(check: &str, residual: f64, scale: f64, tolerance: f64) -> CalcResult<()> {
    if residual.abs() <= tolerance * scale {
        return Ok(());
    }
    log::error!("Compatibility check '{}' failed: residual {:e}, scale {:e}", check, residual, scale);
    Err(CalcError::numeric_consistency(check, residual, tolerance * scale))
}

/// Build V, M, θ and y for a solved beam.
///
/// `flexural_rigidity` is E·I in N·mm².
pub fn build_bending_functions(
    length_mm: f64,
    loads: &LoadSet,
    reactions: &BendingReactions,
    flexural_rigidity: f64,
    tolerance: f64,
) -> CalcResult<BendingFunctions> {
    let l = length_mm;
    let shear = accumulate_loads(l, loads, reactions.left.force_n);
    let moment = shear.integral(-reactions.left.moment_nmm);
    let curvature = moment.scaled(1.0 / flexural_rigidity);

    let slope_0 = curvature.integral(0.0);
    let defl_0 = slope_0.integral(0.0);
    let (theta_l0, y_l0) = (slope_0.value_at(l), defl_0.value_at(l));

    let (theta0, y0) = match reactions.family {
        BendingFamily::Cantilever { fixed: Side::Left }
        | BendingFamily::FixedFixed
        | BendingFamily::ProppedCantilever { fixed: Side::Left } => (0.0, 0.0),
        BendingFamily::SimplySupported => (-y_l0 / l, 0.0),
        BendingFamily::Cantilever { fixed: Side::Right } => {
            let theta0 = -theta_l0;
            (theta0, -(y_l0 + theta0 * l))
        }
        BendingFamily::ProppedCantilever { fixed: Side::Right } => (-theta_l0, 0.0),
    };

    let slope = curvature.integral(theta0);
    let deflection = slope.integral(y0);

    // characteristic magnitudes of y and θ for the residual checks
    let y_scale = loads.magnitude_scale() * l.powi(3) / flexural_rigidity;
    let theta_scale = y_scale / l;
    let (theta_l, y_l) = (slope.value_at(l), deflection.value_at(l));
    match reactions.family {
        BendingFamily::FixedFixed => {
            check_compatibility("deflection at right clamp", y_l, y_scale, tolerance)?;
            check_compatibility("slope at right clamp", theta_l, theta_scale, tolerance)?;
        }
        BendingFamily::ProppedCantilever { .. } => {
            check_compatibility("deflection at right support", y_l, y_scale, tolerance)?;
        }
        _ => {}
    }

    log::debug!(
        "Bending functions: {} segments, θ(0) = {:e} rad, y(0) = {:e} mm",
        shear.segments().len(),
        theta0,
        y0
    );

    Ok(BendingFunctions {
        shear,
        moment,
        slope,
        deflection,
    })
}

/// Build T and φ for a solved shaft.
///
/// Torques are in N·m; `torsional_rigidity` is G·Jt in N·mm².
pub fn build_torsion_functions(
    length_mm: f64,
    loads: &LoadSet,
    reactions: &TorsionReactions,
    torsional_rigidity: f64,
    tolerance: f64,
) -> CalcResult<TorsionFunctions> {
    let l = length_mm;
    let torque = accumulate_loads(l, loads, reactions.left.torque_nm);
    let rate = torque.scaled(1000.0 / torsional_rigidity);

    let twist = match reactions.family {
        TorsionFamily::FixedFree | TorsionFamily::FixedFixed => rate.integral(0.0),
        TorsionFamily::FreeFixed => {
            let phi_l0 = rate.integral(0.0).value_at(l);
            rate.integral(-phi_l0)
        }
    };

    if reactions.family == TorsionFamily::FixedFixed {
        let scale = loads.magnitude_scale() * 1000.0 * l / torsional_rigidity;
        check_compatibility("twist at right clamp", twist.value_at(l), scale, tolerance)?;
    }

    log::debug!("Torsion functions: {} segments", torque.segments().len());

    Ok(TorsionFunctions { torque, twist })
}
