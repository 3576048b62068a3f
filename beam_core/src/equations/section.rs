//! # Cross-Section Property Formulas
//!
//! Geometric properties of the analytic section shapes used by the beam
//! engine: solid round, round tube, solid rectangle and rectangular tube.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area (mm²)
//! - `I` = Moment of inertia about the bending axis (mm⁴)
//! - `W` = Section modulus I/c (mm³)
//! - `Jt` = Torsion constant (mm⁴)
//! - `r_max` = Distance from the axis to the farthest fiber (mm)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Tables A.1 and 10.7

use std::f64::consts::PI;

// =============================================================================
// SOLID ROUND
// =============================================================================

/// Area of a solid round bar
///
/// # Formula
/// A = πd²/4
#[inline]
pub fn round_area(d: f64) -> f64 {
    PI * d * d / 4.0
}

/// Moment of inertia of a solid round bar
///
/// # Formula
/// I = πd⁴/64
///
/// # Example
/// ```rust
/// use beam_core::equations::section::round_moment_of_inertia;
///
/// let i = round_moment_of_inertia(20.0);
/// assert!((i - 7853.98).abs() < 0.01);
/// ```
#[inline]
pub fn round_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

/// Polar moment of inertia of a solid round bar (equals its torsion constant)
///
/// # Formula
/// Jt = πd⁴/32
#[inline]
pub fn round_torsion_constant(d: f64) -> f64 {
    PI * d.powi(4) / 32.0
}

// =============================================================================
// ROUND TUBE
// =============================================================================

/// Area of a round tube with outer diameter `outer_d` and inner diameter `inner_d`
///
/// # Formula
/// A = π(D² − d²)/4
#[inline]
pub fn tube_area(outer_d: f64, inner_d: f64) -> f64 {
    PI * (outer_d.powi(2) - inner_d.powi(2)) / 4.0
}

/// Moment of inertia of a round tube
///
/// # Formula
/// I = π(D⁴ − d⁴)/64
#[inline]
pub fn tube_moment_of_inertia(outer_d: f64, inner_d: f64) -> f64 {
    PI * (outer_d.powi(4) - inner_d.powi(4)) / 64.0
}

/// Torsion constant of a round tube
///
/// # Formula
/// Jt = π(D⁴ − d⁴)/32
#[inline]
pub fn tube_torsion_constant(outer_d: f64, inner_d: f64) -> f64 {
    PI * (outer_d.powi(4) - inner_d.powi(4)) / 32.0
}

// =============================================================================
// SOLID RECTANGLE
// =============================================================================

/// Area of a solid rectangle
///
/// # Formula
/// A = b × h
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Moment of inertia of a rectangle bending about the axis parallel to `b`
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(20.0, 10.0);
/// assert!((i - 1666.667).abs() < 0.001);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Saint-Venant torsion constant of a solid rectangle (approximation)
///
/// # Formula
/// With a = max(b, h), c = min(b, h), β = c/a:
///
/// Jt = a·c³·(1/3 − 0.21·β·(1 − β⁴/12))
#[inline]
pub fn rectangular_torsion_constant(b: f64, h: f64) -> f64 {
    let a = b.max(h);
    let c = b.min(h);
    let beta = if a > 0.0 { c / a } else { 0.0 };
    a * c.powi(3) * (1.0 / 3.0 - 0.21 * beta * (1.0 - beta.powi(4) / 12.0))
}

/// Farthest fiber distance of a rectangle from its centroid (half diagonal)
#[inline]
pub fn rectangular_corner_radius(b: f64, h: f64) -> f64 {
    0.5 * b.hypot(h)
}

// =============================================================================
// RECTANGULAR TUBE
// =============================================================================

/// Area of a rectangular tube with uniform wall `s`
///
/// # Formula
/// A = bh − (b − 2s)(h − 2s)
#[inline]
pub fn rectangular_tube_area(b: f64, h: f64, s: f64) -> f64 {
    b * h - (b - 2.0 * s) * (h - 2.0 * s)
}

/// Moment of inertia of a rectangular tube bending about the axis parallel to `b`
///
/// # Formula
/// I = (bh³ − bᵢhᵢ³)/12 with bᵢ = b − 2s, hᵢ = h − 2s
#[inline]
pub fn rectangular_tube_moment_of_inertia(b: f64, h: f64, s: f64) -> f64 {
    let bi = b - 2.0 * s;
    let hi = h - 2.0 * s;
    (b * h.powi(3) - bi * hi.powi(3)) / 12.0
}

/// Torsion constant of a thin-walled closed rectangular tube (Bredt)
///
/// # Formula
/// Jt = 4·Am² / Σ(l/t), with Am = (b − s)(h − s) the area enclosed by the
/// wall midline and Σ(l/t) = 2((b − s)/s + (h − s)/s)
#[inline]
pub fn rectangular_tube_torsion_constant(b: f64, h: f64, s: f64) -> f64 {
    let bm = b - s;
    let hm = h - s;
    let enclosed = bm * hm;
    let sum_l_over_t = 2.0 * (bm / s + hm / s);
    4.0 * enclosed.powi(2) / sum_l_over_t
}

// =============================================================================
// GENERIC
// =============================================================================

/// Section modulus from inertia and extreme fiber distance
///
/// # Formula
/// W = I/c
#[inline]
pub fn section_modulus(inertia: f64, c: f64) -> f64 {
    inertia / c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() / b.abs().max(1.0) < 1e-6
    }

    #[test]
    fn test_round_properties() {
        let d = 20.0;
        assert!(approx_eq(round_area(d), 314.159265));
        assert!(approx_eq(round_torsion_constant(d), 2.0 * round_moment_of_inertia(d)));
        // W = πd³/32
        let w = section_modulus(round_moment_of_inertia(d), d / 2.0);
        assert!(approx_eq(w, PI * d.powi(3) / 32.0));
    }

    #[test]
    fn test_tube_reduces_to_round_for_zero_bore() {
        assert!(approx_eq(tube_area(30.0, 0.0), round_area(30.0)));
        assert!(approx_eq(tube_moment_of_inertia(30.0, 0.0), round_moment_of_inertia(30.0)));
        assert!(approx_eq(tube_torsion_constant(30.0, 0.0), round_torsion_constant(30.0)));
    }

    #[test]
    fn test_rectangular_inertia() {
        // 20 x 10 mm, bending about the axis parallel to b
        assert!(approx_eq(rectangular_moment_of_inertia(20.0, 10.0), 1666.6666667));
        assert!(approx_eq(rectangular_area(20.0, 10.0), 200.0));
    }

    #[test]
    fn test_square_torsion_constant() {
        // β = 1: Jt = a⁴ (1/3 − 0.21·(11/12)) ≈ 0.1408·a⁴
        let jt = rectangular_torsion_constant(10.0, 10.0);
        assert!(approx_eq(jt, 10_000.0 * (1.0 / 3.0 - 0.21 * (11.0 / 12.0))));
        // symmetric in b and h
        assert!(approx_eq(rectangular_torsion_constant(20.0, 10.0), rectangular_torsion_constant(10.0, 20.0)));
    }

    #[test]
    fn test_rectangular_tube() {
        let (b, h, s) = (40.0, 60.0, 3.0);
        assert!(approx_eq(rectangular_tube_area(b, h, s), 40.0 * 60.0 - 34.0 * 54.0));
        let i = rectangular_tube_moment_of_inertia(b, h, s);
        assert!(i < rectangular_moment_of_inertia(b, h));
        // Am = 37 * 57, Σ l/t = 2 (37/3 + 57/3)
        let expected = 4.0 * (37.0 * 57.0_f64).powi(2) / (2.0 * (37.0 / 3.0 + 57.0 / 3.0));
        assert!(approx_eq(rectangular_tube_torsion_constant(b, h, s), expected));
    }

    #[test]
    fn test_corner_radius() {
        assert!(approx_eq(rectangular_corner_radius(6.0, 8.0), 5.0));
    }
}
