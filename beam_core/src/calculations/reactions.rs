//! # Reaction Solver
//!
//! Superposes the closed-form kernels of [`crate::equations::beam`] over
//! every load, then verifies global equilibrium before anything downstream
//! sees the result.
//!
//! Families clamped on the right are solved as their left-clamped mirror
//! image (x → L − x): forces swap ends, couples swap ends and change sign.

use serde::{Deserialize, Serialize};

use crate::calculations::supports::{BendingFamily, Side, TorsionFamily};
use crate::equations::beam::{
    cantilever_point_reactions, cantilever_zone_reactions, fixed_fixed_point_reactions,
    fixed_fixed_zone_reactions, propped_cantilever_point_reactions, propped_cantilever_zone_reactions,
    simply_supported_point_reactions, simply_supported_zone_reactions, torsion_fixed_fixed_point_reactions,
    torsion_fixed_fixed_zone_reactions, EndActions,
};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadSet, LoadZone};

/// Support reaction in bending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub position_mm: f64,
    /// Transverse force, positive upward (N)
    pub force_n: f64,
    /// Couple, positive counter-clockwise (N·mm); zero at unclamped ends
    pub moment_nmm: f64,
}

/// Reactions at both ends of a span in bending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendingReactions {
    pub family: BendingFamily,
    pub left: Reaction,
    pub right: Reaction,
}

impl BendingReactions {
    pub fn end_actions(&self) -> EndActions {
        EndActions {
            force_left: self.left.force_n,
            couple_left: self.left.moment_nmm,
            force_right: self.right.force_n,
            couple_right: self.right.moment_nmm,
        }
    }
}

/// Support reaction in torsion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorqueReaction {
    pub position_mm: f64,
    /// Reaction torque, right-hand about +x (N·m)
    pub torque_nm: f64,
}

/// Reactions at both ends of a shaft in torsion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorsionReactions {
    pub family: TorsionFamily,
    pub left: TorqueReaction,
    pub right: TorqueReaction,
}

/// End actions of a left-clamped mirror solution, mapped back onto the real span
fn unmirror(e: EndActions) -> EndActions {
    EndActions {
        force_left: e.force_right,
        couple_left: -e.couple_right,
        force_right: e.force_left,
        couple_right: -e.couple_left,
    }
}

fn mirror_zone(z: &LoadZone, l: f64) -> LoadZone {
    LoadZone::new(l - z.end_mm, l - z.start_mm, z.total)
}

/// Left-clamped kernels for a point load
fn point_actions(family: BendingFamily, p: f64, a: f64, l: f64) -> EndActions {
    match family {
        BendingFamily::SimplySupported => {
            let (r1, r2) = simply_supported_point_reactions(p, a, l);
            EndActions { force_left: r1, force_right: r2, ..Default::default() }
        }
        BendingFamily::Cantilever { fixed: Side::Left } => {
            let (r, c) = cantilever_point_reactions(p, a);
            EndActions { force_left: r, couple_left: c, ..Default::default() }
        }
        BendingFamily::FixedFixed => fixed_fixed_point_reactions(p, a, l),
        BendingFamily::ProppedCantilever { fixed: Side::Left } => {
            let (r_fixed, c_fixed, r_pinned) = propped_cantilever_point_reactions(p, a, l);
            EndActions { force_left: r_fixed, couple_left: c_fixed, force_right: r_pinned, couple_right: 0.0 }
        }
        BendingFamily::Cantilever { fixed: Side::Right } => {
            unmirror(point_actions(BendingFamily::Cantilever { fixed: Side::Left }, p, l - a, l))
        }
        BendingFamily::ProppedCantilever { fixed: Side::Right } => {
            unmirror(point_actions(BendingFamily::ProppedCantilever { fixed: Side::Left }, p, l - a, l))
        }
    }
}

/// Left-clamped kernels for a zone load
fn zone_actions(family: BendingFamily, z: &LoadZone, l: f64) -> EndActions {
    let (total, x1, x2) = (z.total, z.start_mm, z.end_mm);
    match family {
        BendingFamily::SimplySupported => {
            let (r1, r2) = simply_supported_zone_reactions(total, x1, x2, l);
            EndActions { force_left: r1, force_right: r2, ..Default::default() }
        }
        BendingFamily::Cantilever { fixed: Side::Left } => {
            let (r, c) = cantilever_zone_reactions(total, x1, x2);
            EndActions { force_left: r, couple_left: c, ..Default::default() }
        }
        BendingFamily::FixedFixed => fixed_fixed_zone_reactions(total, x1, x2, l),
        BendingFamily::ProppedCantilever { fixed: Side::Left } => {
            let (r_fixed, c_fixed, r_pinned) = propped_cantilever_zone_reactions(total, x1, x2, l);
            EndActions { force_left: r_fixed, couple_left: c_fixed, force_right: r_pinned, couple_right: 0.0 }
        }
        BendingFamily::Cantilever { fixed: Side::Right } => unmirror(zone_actions(
            BendingFamily::Cantilever { fixed: Side::Left },
            &mirror_zone(z, l),
            l,
        )),
        BendingFamily::ProppedCantilever { fixed: Side::Right } => unmirror(zone_actions(
            BendingFamily::ProppedCantilever { fixed: Side::Left },
            &mirror_zone(z, l),
            l,
        )),
    }
}

fn within_tolerance(residual: f64, scale: f64, tolerance: f64) -> bool {
    residual.abs() <= tolerance * scale
}

/// Check ΣF = 0 and ΣM = 0 (about x = 0) for a set of end actions
pub fn check_bending_equilibrium(
    length_mm: f64,
    loads: &LoadSet,
    actions: &EndActions,
    tolerance: f64,
) -> CalcResult<()> {
    let force_scale = loads.magnitude_scale();
    let sum_f = actions.force_left + actions.force_right + loads.total();
    if !within_tolerance(sum_f, force_scale, tolerance) {
        log::error!("Force equilibrium residual {:e} N exceeds tolerance", sum_f);
        return Err(CalcError::numeric_consistency("sum of forces", sum_f, tolerance * force_scale));
    }

    let moment_scale = force_scale * length_mm;
    let sum_m = actions.force_right * length_mm
        + actions.couple_left
        + actions.couple_right
        + loads.moment_about_origin();
    if !within_tolerance(sum_m, moment_scale, tolerance) {
        log::error!("Moment equilibrium residual {:e} N·mm exceeds tolerance", sum_m);
        return Err(CalcError::numeric_consistency("sum of moments", sum_m, tolerance * moment_scale));
    }
    Ok(())
}

/// Reactions of a validated beam under a normalized load set
pub fn solve_bending_reactions(
    family: BendingFamily,
    length_mm: f64,
    loads: &LoadSet,
    tolerance: f64,
) -> CalcResult<BendingReactions> {
    let mut actions = EndActions::default();
    for p in &loads.points {
        actions += point_actions(family, p.magnitude, p.position_mm, length_mm);
    }
    for z in &loads.zones {
        actions += zone_actions(family, z, length_mm);
    }

    check_bending_equilibrium(length_mm, loads, &actions, tolerance)?;

    log::debug!(
        "Reactions ({}): left {:.4} N / {:.4} N·mm, right {:.4} N / {:.4} N·mm",
        family.name(),
        actions.force_left,
        actions.couple_left,
        actions.force_right,
        actions.couple_right
    );

    Ok(BendingReactions {
        family,
        left: Reaction {
            position_mm: 0.0,
            force_n: actions.force_left,
            moment_nmm: actions.couple_left,
        },
        right: Reaction {
            position_mm: length_mm,
            force_n: actions.force_right,
            moment_nmm: actions.couple_right,
        },
    })
}

/// Reaction torques of a validated shaft under a normalized torque set (N·m)
pub fn solve_torsion_reactions(
    family: TorsionFamily,
    length_mm: f64,
    loads: &LoadSet,
    tolerance: f64,
) -> CalcResult<TorsionReactions> {
    let applied = loads.total();
    let (left, right) = match family {
        TorsionFamily::FixedFree => (-applied, 0.0),
        TorsionFamily::FreeFixed => (0.0, -applied),
        TorsionFamily::FixedFixed => {
            let mut t = (0.0, 0.0);
            for p in &loads.points {
                let (t1, t2) = torsion_fixed_fixed_point_reactions(p.magnitude, p.position_mm, length_mm);
                t.0 += t1;
                t.1 += t2;
            }
            for z in &loads.zones {
                let (t1, t2) = torsion_fixed_fixed_zone_reactions(z.total, z.start_mm, z.end_mm, length_mm);
                t.0 += t1;
                t.1 += t2;
            }
            t
        }
    };

    let residual = left + right + applied;
    let scale = loads.magnitude_scale();
    if !within_tolerance(residual, scale, tolerance) {
        log::error!("Torque equilibrium residual {:e} N·m exceeds tolerance", residual);
        return Err(CalcError::numeric_consistency("sum of torques", residual, tolerance * scale));
    }

    log::debug!("Reaction torques ({}): left {:.4} N·m, right {:.4} N·m", family.name(), left, right);

    Ok(TorsionReactions {
        family,
        left: TorqueReaction { position_mm: 0.0, torque_nm: left },
        right: TorqueReaction { position_mm: length_mm, torque_nm: right },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::LoadPoint;

    const ALL_FAMILIES: [BendingFamily; 6] = [
        BendingFamily::SimplySupported,
        BendingFamily::Cantilever { fixed: Side::Left },
        BendingFamily::Cantilever { fixed: Side::Right },
        BendingFamily::FixedFixed,
        BendingFamily::ProppedCantilever { fixed: Side::Left },
        BendingFamily::ProppedCantilever { fixed: Side::Right },
    ];

    fn mixed_loads() -> LoadSet {
        LoadSet {
            points: vec![LoadPoint::new(0.0, -30.0), LoadPoint::new(420.0, -250.0), LoadPoint::new(1000.0, 75.0)],
            zones: vec![LoadZone::new(100.0, 700.0, -600.0), LoadZone::new(650.0, 900.0, 40.0)],
        }
    }

    #[test]
    fn test_tip_load_on_cantilever() {
        let loads = LoadSet { points: vec![LoadPoint::new(1000.0, -100.0)], zones: vec![] };
        let r = solve_bending_reactions(BendingFamily::Cantilever { fixed: Side::Left }, 1000.0, &loads, 1e-9)
            .unwrap();
        assert_eq!(r.left.force_n, 100.0);
        assert_eq!(r.left.moment_nmm, 100_000.0);
        assert_eq!(r.right.force_n, 0.0);
    }

    #[test]
    fn test_right_cantilever_mirrors_left() {
        let loads = LoadSet { points: vec![LoadPoint::new(0.0, -100.0)], zones: vec![] };
        let r = solve_bending_reactions(BendingFamily::Cantilever { fixed: Side::Right }, 1000.0, &loads, 1e-9)
            .unwrap();
        assert_eq!(r.right.force_n, 100.0);
        // load at the free left end turns the clamp clockwise
        assert_eq!(r.right.moment_nmm, -100_000.0);
        assert_eq!(r.left.force_n, 0.0);
    }

    #[test]
    fn test_uniform_simply_supported() {
        let loads = LoadSet { points: vec![], zones: vec![LoadZone::new(0.0, 1000.0, -1000.0)] };
        let r = solve_bending_reactions(BendingFamily::SimplySupported, 1000.0, &loads, 1e-9).unwrap();
        assert!((r.left.force_n - 500.0).abs() < 1e-9);
        assert!((r.right.force_n - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_family_in_equilibrium() {
        let loads = mixed_loads();
        for family in ALL_FAMILIES {
            let r = solve_bending_reactions(family, 1000.0, &loads, 1e-9).unwrap();
            assert!(check_bending_equilibrium(1000.0, &loads, &r.end_actions(), 1e-9).is_ok());
        }
    }

    #[test]
    fn test_propped_right_mirror_midspan() {
        // pinned left, fixed right, P at midspan: R_pinned = 5P/16
        let loads = LoadSet { points: vec![LoadPoint::new(500.0, -1600.0)], zones: vec![] };
        let r = solve_bending_reactions(BendingFamily::ProppedCantilever { fixed: Side::Right }, 1000.0, &loads, 1e-9)
            .unwrap();
        assert!((r.left.force_n - 500.0).abs() < 1e-9);
        assert!((r.right.force_n - 1100.0).abs() < 1e-9);
        assert!((r.right.moment_nmm + 300_000.0).abs() < 1e-6);
        assert_eq!(r.left.moment_nmm, 0.0);
    }

    #[test]
    fn test_equilibrium_violation_is_reported() {
        let loads = LoadSet { points: vec![LoadPoint::new(500.0, -10.0)], zones: vec![] };
        let wrong = EndActions { force_left: 5.0, force_right: 4.0, ..Default::default() };
        let err = check_bending_equilibrium(1000.0, &loads, &wrong, 1e-9).unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_CONSISTENCY");
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_no_loads_no_reactions() {
        let r = solve_bending_reactions(BendingFamily::FixedFixed, 800.0, &LoadSet::default(), 1e-9).unwrap();
        assert_eq!(r.end_actions(), EndActions::default());
    }

    #[test]
    fn test_torsion_families() {
        let loads = LoadSet {
            points: vec![LoadPoint::new(250.0, 10.0)],
            zones: vec![LoadZone::new(500.0, 1000.0, 4.0)],
        };
        let r = solve_torsion_reactions(TorsionFamily::FixedFree, 1000.0, &loads, 1e-9).unwrap();
        assert_eq!(r.left.torque_nm, -14.0);
        assert_eq!(r.right.torque_nm, 0.0);

        let r = solve_torsion_reactions(TorsionFamily::FreeFixed, 1000.0, &loads, 1e-9).unwrap();
        assert_eq!(r.right.torque_nm, -14.0);

        let r = solve_torsion_reactions(TorsionFamily::FixedFixed, 1000.0, &loads, 1e-9).unwrap();
        // point: −7.5 / −2.5, zone centroid 750: −1 / −3
        assert!((r.left.torque_nm + 8.5).abs() < 1e-12);
        assert!((r.right.torque_nm + 5.5).abs() < 1e-12);
    }
}
