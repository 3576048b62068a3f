//! # Closed-Form Support Reactions
//!
//! Reaction formulas for a single prismatic span under a point load or a
//! uniformly distributed zone, one group per support family.
//!
//! ## Sign Convention
//!
//! - Loads and reaction forces: positive upward
//! - Reaction couples: positive counter-clockwise
//! - `a` is measured from the left end, `b = L − a`
//!
//! Reactions balance the applied load, so a downward (negative) load
//! produces positive reaction forces.
//!
//! ## Zones
//!
//! Zone reactions in the determinate families use the zone resultant at
//! its centroid. In the indeterminate families the point-load kernel is
//! integrated exactly over the zone with three Gauss-Legendre points
//! placed about the zone centre.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//!   (cases 1a, 1c, 1d, 1e and 2a, 2c, 2d, 2e)

/// Reaction couple and force at each end of a span
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EndActions {
    /// Force at the left end (N)
    pub force_left: f64,
    /// Couple at the left end (N·mm)
    pub couple_left: f64,
    /// Force at the right end (N)
    pub force_right: f64,
    /// Couple at the right end (N·mm)
    pub couple_right: f64,
}

impl std::ops::Add for EndActions {
    type Output = EndActions;

    fn add(self, rhs: EndActions) -> EndActions {
        EndActions {
            force_left: self.force_left + rhs.force_left,
            couple_left: self.couple_left + rhs.couple_left,
            force_right: self.force_right + rhs.force_right,
            couple_right: self.couple_right + rhs.couple_right,
        }
    }
}

impl std::ops::AddAssign for EndActions {
    fn add_assign(&mut self, rhs: EndActions) {
        *self = *self + rhs;
    }
}

/// Three-point Gauss-Legendre split of a zone into `(load, position)` pairs
///
/// Exact for kernels up to degree five in the load position. Positions are
/// taken about the zone centre, so no large terms cancel for narrow zones.
fn zone_gauss_points(total: f64, x1: f64, x2: f64) -> [(f64, f64); 3] {
    let centre = 0.5 * (x1 + x2);
    let offset = 0.5 * (x2 - x1) * (0.6f64).sqrt();
    let outer = total * 5.0 / 18.0;
    [(outer, centre - offset), (total - 2.0 * outer, centre), (outer, centre + offset)]
}

// =============================================================================
// SIMPLY SUPPORTED (pinned/hinged both ends)
// =============================================================================

/// Reactions of a simply supported span under point load `p` at `a`
///
/// ```text
///           ↓ P
///    ═══════════════
///    △   a       b  △
///   R1 ←────L────→ R2
/// ```
///
/// # Formulas
/// - R1 = −P·b/L
/// - R2 = −P·a/L
#[inline]
pub fn simply_supported_point_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    (-p * (l - a) / l, -p * a / l)
}

/// Reactions of a simply supported span under a zone totalling `total` over [x1, x2]
///
/// The zone acts through its centroid c = (x1 + x2)/2.
#[inline]
pub fn simply_supported_zone_reactions(total: f64, x1: f64, x2: f64, l: f64) -> (f64, f64) {
    let centroid = (x1 + x2) / 2.0;
    simply_supported_point_reactions(total, centroid, l)
}

// =============================================================================
// CANTILEVER (fixed at x = 0, free at x = L)
// =============================================================================

/// Reactions at the fixed left end of a cantilever under point load `p` at `a`
///
/// # Formulas
/// - R = −P
/// - C = −P·a
///
/// # Example
/// ```rust
/// use beam_core::equations::beam::cantilever_point_reactions;
///
/// // 100 N downward at the tip of a 1000 mm cantilever
/// let (r, c) = cantilever_point_reactions(-100.0, 1000.0);
/// assert_eq!(r, 100.0);
/// assert_eq!(c, 100_000.0);
/// ```
#[inline]
pub fn cantilever_point_reactions(p: f64, a: f64) -> (f64, f64) {
    (-p, -p * a)
}

/// Reactions at the fixed left end of a cantilever under a zone over [x1, x2]
#[inline]
pub fn cantilever_zone_reactions(total: f64, x1: f64, x2: f64) -> (f64, f64) {
    let centroid = (x1 + x2) / 2.0;
    cantilever_point_reactions(total, centroid)
}

// =============================================================================
// FIXED-FIXED
// =============================================================================

/// End actions of a fixed-fixed span under point load `p` at `a`
///
/// # Formulas (b = L − a)
/// - R1 = −P·b²(3a + b)/L³
/// - C1 = −P·a·b²/L²
/// - R2 = −P·a²(a + 3b)/L³
/// - C2 = +P·a²·b/L²
#[inline]
pub fn fixed_fixed_point_reactions(p: f64, a: f64, l: f64) -> EndActions {
    let b = l - a;
    EndActions {
        force_left: -p * b * b * (3.0 * a + b) / l.powi(3),
        couple_left: -p * a * b * b / (l * l),
        force_right: -p * a * a * (a + 3.0 * b) / l.powi(3),
        couple_right: p * a * a * b / (l * l),
    }
}

/// End actions of a fixed-fixed span under a zone totalling `total` over [x1, x2]
///
/// The point kernel is cubic in the load position, so three Gauss points
/// integrate it exactly.
pub fn fixed_fixed_zone_reactions(total: f64, x1: f64, x2: f64, l: f64) -> EndActions {
    zone_gauss_points(total, x1, x2)
        .into_iter()
        .fold(EndActions::default(), |acc, (p, s)| acc + fixed_fixed_point_reactions(p, s, l))
}

// =============================================================================
// PROPPED CANTILEVER (fixed at x = 0, pinned at x = L)
// =============================================================================

/// Reactions of a propped cantilever (fixed left, pinned right) under point load `p` at `a`
///
/// Returns `(R_fixed, C_fixed, R_pinned)`.
///
/// # Formulas (b = L − a)
/// - R2 = −P·a²(3L − a)/(2L³)
/// - R1 = −P − R2
/// - C1 = −P·a·b·(L + b)/(2L²)
#[inline]
pub fn propped_cantilever_point_reactions(p: f64, a: f64, l: f64) -> (f64, f64, f64) {
    let b = l - a;
    let r_pinned = -p * a * a * (3.0 * l - a) / (2.0 * l.powi(3));
    let r_fixed = -p - r_pinned;
    let c_fixed = -p * a * b * (l + b) / (2.0 * l * l);
    (r_fixed, c_fixed, r_pinned)
}

/// Reactions of a propped cantilever (fixed left, pinned right) under a zone over [x1, x2]
///
/// Returns `(R_fixed, C_fixed, R_pinned)`. Integrated with three Gauss points,
/// exact for the cubic point kernel.
pub fn propped_cantilever_zone_reactions(total: f64, x1: f64, x2: f64, l: f64) -> (f64, f64, f64) {
    let mut r_pinned = 0.0;
    let mut c_fixed = 0.0;
    for (p, s) in zone_gauss_points(total, x1, x2) {
        let (_, c, r) = propped_cantilever_point_reactions(p, s, l);
        r_pinned += r;
        c_fixed += c;
    }
    (-total - r_pinned, c_fixed, r_pinned)
}

// =============================================================================
// TORSION
// =============================================================================

/// End torques of a shaft fixed at both ends under point torque `t` at `a`
///
/// Twist compatibility θ(L) = 0 splits the torque in inverse proportion
/// to the loaded lengths.
///
/// # Formulas
/// - T1 = −T·b/L
/// - T2 = −T·a/L
#[inline]
pub fn torsion_fixed_fixed_point_reactions(t: f64, a: f64, l: f64) -> (f64, f64) {
    (-t * (l - a) / l, -t * a / l)
}

/// End torques of a shaft fixed at both ends under a zone of torque over [x1, x2]
///
/// The kernel is linear in the load position, so the centroid gives the exact integral.
#[inline]
pub fn torsion_fixed_fixed_zone_reactions(total: f64, x1: f64, x2: f64, l: f64) -> (f64, f64) {
    torsion_fixed_fixed_point_reactions(total, (x1 + x2) / 2.0, l)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * b.abs().max(1.0)
    }

    /// Sum of moments about x = 0 of load + reactions (CCW positive)
    fn moment_residual(p: f64, a: f64, l: f64, e: EndActions) -> f64 {
        p * a + e.force_right * l + e.couple_left + e.couple_right
    }

    #[test]
    fn test_simply_supported_point_asymmetric() {
        // 1000 N downward at 300 mm on a 1000 mm span
        let (r1, r2) = simply_supported_point_reactions(-1000.0, 300.0, 1000.0);
        assert!(approx_eq(r1, 700.0), "R1 = {}", r1);
        assert!(approx_eq(r2, 300.0), "R2 = {}", r2);
    }

    #[test]
    fn test_simply_supported_full_zone() {
        let (r1, r2) = simply_supported_zone_reactions(-1000.0, 0.0, 1000.0, 1000.0);
        assert!(approx_eq(r1, 500.0));
        assert!(approx_eq(r2, 500.0));
    }

    #[test]
    fn test_fixed_fixed_midspan_point() {
        // Classic: R = P/2, |C| = PL/8
        let e = fixed_fixed_point_reactions(-800.0, 500.0, 1000.0);
        assert!(approx_eq(e.force_left, 400.0));
        assert!(approx_eq(e.force_right, 400.0));
        assert!(approx_eq(e.couple_left, 100_000.0));
        assert!(approx_eq(e.couple_right, -100_000.0));
        assert!(moment_residual(-800.0, 500.0, 1000.0, e).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_fixed_off_center_equilibrium() {
        let (p, a, l) = (250.0, 170.0, 900.0);
        let e = fixed_fixed_point_reactions(p, a, l);
        assert!((e.force_left + e.force_right + p).abs() < 1e-9);
        assert!(moment_residual(p, a, l, e).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_fixed_full_uniform() {
        // Full span: R = wL/2, |C| = wL²/12
        let l = 1200.0;
        let e = fixed_fixed_zone_reactions(-1200.0, 0.0, l, l); // w = -1 N/mm
        assert!(approx_eq(e.force_left, 600.0));
        assert!(approx_eq(e.force_right, 600.0));
        assert!(approx_eq(e.couple_left, l * l / 12.0));
        assert!(approx_eq(e.couple_right, -l * l / 12.0));
    }

    #[test]
    fn test_fixed_fixed_zone_matches_point_limit() {
        // A very short zone behaves like a point load at its centroid
        let l = 1000.0;
        let zone = fixed_fixed_zone_reactions(-100.0, 299.995, 300.005, l);
        let point = fixed_fixed_point_reactions(-100.0, 300.0, l);
        assert!((zone.force_left - point.force_left).abs() < 1e-4);
        assert!((zone.couple_left - point.couple_left).abs() < 1e-2);
        assert!((zone.couple_right - point.couple_right).abs() < 1e-2);
    }

    #[test]
    fn test_narrow_zones_keep_equilibrium() {
        let p = -500.0;
        for l in [1_000.0, 100_000.0] {
            for width in [1e-7, 1e-5, 1e-3] {
                let x1 = 0.37 * l;
                let centre = x1 + width / 2.0;

                let e = fixed_fixed_zone_reactions(p, x1, x1 + width, l);
                assert!((e.force_left + e.force_right + p).abs() < 1e-12 * p.abs(), "L={} width={}", l, width);
                assert!(moment_residual(p, centre, l, e).abs() < 1e-12 * p.abs() * l, "L={} width={}", l, width);

                let (r_fixed, c_fixed, r_pinned) = propped_cantilever_zone_reactions(p, x1, x1 + width, l);
                let residual = p * centre + r_pinned * l + c_fixed;
                assert!(residual.abs() < 1e-12 * p.abs() * l, "L={} width={}", l, width);
                assert!((r_fixed + r_pinned + p).abs() < 1e-12 * p.abs());
            }
        }
    }

    #[test]
    fn test_propped_cantilever_full_uniform() {
        // R_pinned = 3wL/8, R_fixed = 5wL/8, |C| = wL²/8
        let l = 800.0;
        let (r_fixed, c_fixed, r_pinned) = propped_cantilever_zone_reactions(-800.0, 0.0, l, l);
        assert!(approx_eq(r_pinned, 300.0));
        assert!(approx_eq(r_fixed, 500.0));
        assert!(approx_eq(c_fixed, l * l / 8.0));
    }

    #[test]
    fn test_propped_cantilever_midspan_point() {
        // R_pinned = 5P/16, |C| = 3PL/16
        let (r_fixed, c_fixed, r_pinned) = propped_cantilever_point_reactions(-1600.0, 500.0, 1000.0);
        assert!(approx_eq(r_pinned, 500.0));
        assert!(approx_eq(r_fixed, 1100.0));
        assert!(approx_eq(c_fixed, 300_000.0));
    }

    #[test]
    fn test_cantilever_zone() {
        let (r, c) = cantilever_zone_reactions(-200.0, 200.0, 600.0);
        assert!(approx_eq(r, 200.0));
        assert!(approx_eq(c, 80_000.0));
    }

    #[test]
    fn test_torsion_fixed_fixed_split() {
        let (t1, t2) = torsion_fixed_fixed_point_reactions(10.0, 250.0, 1000.0);
        assert!(approx_eq(t1, -7.5));
        assert!(approx_eq(t2, -2.5));
    }

    #[test]
    fn test_end_actions_add() {
        let a = EndActions { force_left: 1.0, couple_left: 2.0, force_right: 3.0, couple_right: 4.0 };
        let mut b = a;
        b += a;
        assert_eq!(b.couple_right, 8.0);
    }
}
