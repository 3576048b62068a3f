//! # Boundary Condition Validator
//!
//! Classifies a pair of end conditions into a closed-form support family
//! before any reaction is computed. Only a fixed, enumerable set of
//! families is solved; everything else is rejected up front.
//!
//! ## Bending
//!
//! | Left \ Right      | FREE            | PINNED / HINGED          | FIXED                     |
//! |-------------------|-----------------|--------------------------|---------------------------|
//! | FREE              | invalid         | invalid                  | cantilever (fixed right)  |
//! | PINNED / HINGED   | invalid         | simply supported         | propped (fixed right)     |
//! | FIXED             | cantilever      | propped (fixed left)     | fixed-fixed               |
//!
//! PINNED and HINGED restrain the same thing (transverse displacement) and
//! are kept apart for labelling only.
//!
//! ## Torsion
//!
//! Only rotation about the axis matters, so only FIXED–FREE, FREE–FIXED
//! and FIXED–FIXED are accepted.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::supports::{classify_bending, EndCondition, Stability};
//!
//! let c = classify_bending(EndCondition::Fixed, EndCondition::Pinned);
//! assert_eq!(c.stability, Stability::IndeterminateSupported);
//!
//! let c = classify_bending(EndCondition::Free, EndCondition::Free);
//! assert_eq!(c.stability, Stability::Invalid);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::validate_length;

/// Restraint at one end of the span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndCondition {
    /// No restraint (libera)
    #[serde(alias = "LIBERA")]
    Free,
    /// Transverse displacement restrained (appoggiata)
    #[serde(alias = "APPOGGIATA")]
    Pinned,
    /// Transverse displacement restrained, zero moment (incernierata)
    #[serde(alias = "INCERNIERATA")]
    Hinged,
    /// Displacement and rotation restrained (incastrata)
    #[serde(alias = "INCASTRATA")]
    Fixed,
}

impl EndCondition {
    pub const ALL: [EndCondition; 4] = [
        EndCondition::Free,
        EndCondition::Pinned,
        EndCondition::Hinged,
        EndCondition::Fixed,
    ];

    /// Upper-case English label
    pub fn label(&self) -> &'static str {
        match self {
            EndCondition::Free => "FREE",
            EndCondition::Pinned => "PINNED",
            EndCondition::Hinged => "HINGED",
            EndCondition::Fixed => "FIXED",
        }
    }

    /// Italian label used on legacy forms
    pub fn italian_label(&self) -> &'static str {
        match self {
            EndCondition::Free => "LIBERA",
            EndCondition::Pinned => "APPOGGIATA",
            EndCondition::Hinged => "INCERNIERATA",
            EndCondition::Fixed => "INCASTRATA",
        }
    }

    /// Restrains transverse displacement
    pub fn restrains_displacement(&self) -> bool {
        !matches!(self, EndCondition::Free)
    }

    /// Restrains rotation (bending slope, or twist about the axis)
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, EndCondition::Fixed)
    }

    fn is_pin_like(&self) -> bool {
        matches!(self, EndCondition::Pinned | EndCondition::Hinged)
    }
}

impl fmt::Display for EndCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EndCondition {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase();
        EndCondition::ALL
            .into_iter()
            .find(|c| c.label() == key || c.italian_label() == key)
            .ok_or_else(|| {
                CalcError::invalid_input("end_condition", s, "Expected FREE, PINNED, HINGED or FIXED")
            })
    }
}

/// Which end carries the clamp in a one-sided family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Static classification of a support pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stability {
    Determinate,
    IndeterminateSupported,
    Invalid,
}

/// Closed-form bending solution family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family")]
pub enum BendingFamily {
    /// Pin-like supports at both ends
    SimplySupported,
    /// One end fixed, the other free
    Cantilever { fixed: Side },
    /// Both ends fixed
    FixedFixed,
    /// One end fixed, the other pin-like
    ProppedCantilever { fixed: Side },
}

impl BendingFamily {
    pub fn stability(&self) -> Stability {
        match self {
            BendingFamily::SimplySupported | BendingFamily::Cantilever { .. } => Stability::Determinate,
            BendingFamily::FixedFixed | BendingFamily::ProppedCantilever { .. } => {
                Stability::IndeterminateSupported
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BendingFamily::SimplySupported => "simply supported",
            BendingFamily::Cantilever { fixed: Side::Left } => "cantilever (fixed left)",
            BendingFamily::Cantilever { fixed: Side::Right } => "cantilever (fixed right)",
            BendingFamily::FixedFixed => "fixed-fixed",
            BendingFamily::ProppedCantilever { fixed: Side::Left } => "propped cantilever (fixed left)",
            BendingFamily::ProppedCantilever { fixed: Side::Right } => "propped cantilever (fixed right)",
        }
    }
}

/// Closed-form torsion solution family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TorsionFamily {
    FixedFree,
    FreeFixed,
    FixedFixed,
}

impl TorsionFamily {
    pub fn stability(&self) -> Stability {
        match self {
            TorsionFamily::FixedFixed => Stability::IndeterminateSupported,
            _ => Stability::Determinate,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TorsionFamily::FixedFree => "fixed-free",
            TorsionFamily::FreeFixed => "free-fixed",
            TorsionFamily::FixedFixed => "fixed-fixed",
        }
    }
}

/// Validator outcome: stability class plus the family when one applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification<F> {
    pub stability: Stability,
    pub family: Option<F>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl<F> Classification<F> {
    fn invalid(reason: &'static str) -> Self {
        Classification {
            stability: Stability::Invalid,
            family: None,
            reason: Some(reason),
        }
    }
}

/// Classify an end-condition pair for bending
pub fn classify_bending(left: EndCondition, right: EndCondition) -> Classification<BendingFamily> {
    use EndCondition::*;

    let family = match (left, right) {
        (Free, Free) => return Classification::invalid("Beam is not restrained at either end"),
        (Free, r) if r.is_pin_like() => {
            return Classification::invalid("A single pin-like support leaves a rigid rotation free")
        }
        (l, Free) if l.is_pin_like() => {
            return Classification::invalid("A single pin-like support leaves a rigid rotation free")
        }
        (Fixed, Free) => BendingFamily::Cantilever { fixed: Side::Left },
        (Free, Fixed) => BendingFamily::Cantilever { fixed: Side::Right },
        (Fixed, Fixed) => BendingFamily::FixedFixed,
        (Fixed, _) => BendingFamily::ProppedCantilever { fixed: Side::Left },
        (_, Fixed) => BendingFamily::ProppedCantilever { fixed: Side::Right },
        _ => BendingFamily::SimplySupported,
    };

    Classification {
        stability: family.stability(),
        family: Some(family),
        reason: None,
    }
}

/// Classify an end-condition pair for torsion
pub fn classify_torsion(left: EndCondition, right: EndCondition) -> Classification<TorsionFamily> {
    use EndCondition::*;

    let family = match (left, right) {
        (Fixed, Free) => TorsionFamily::FixedFree,
        (Free, Fixed) => TorsionFamily::FreeFixed,
        (Fixed, Fixed) => TorsionFamily::FixedFixed,
        (Free, Free) => return Classification::invalid("Shaft is not restrained against twist"),
        _ => {
            return Classification::invalid(
                "Only FIXED and FREE ends are allowed in torsion (pin-like ends do not restrain twist)",
            )
        }
    };

    Classification {
        stability: family.stability(),
        family: Some(family),
        reason: None,
    }
}

/// Validate length and supports for bending, returning the family to solve
pub fn validate_bending(left: EndCondition, right: EndCondition, length_mm: f64) -> CalcResult<BendingFamily> {
    let classification = classify_bending(left, right);
    let family = classification.family.ok_or_else(|| {
        CalcError::configuration(
            left.label(),
            right.label(),
            classification.reason.unwrap_or("Unsupported end-condition pair"),
        )
    })?;
    validate_length(length_mm)?;
    log::debug!("Bending supports {}-{}: {}", left, right, family.name());
    Ok(family)
}

/// Validate length and supports for torsion, returning the family to solve
pub fn validate_torsion(left: EndCondition, right: EndCondition, length_mm: f64) -> CalcResult<TorsionFamily> {
    let classification = classify_torsion(left, right);
    let family = classification.family.ok_or_else(|| {
        CalcError::configuration(
            left.label(),
            right.label(),
            classification.reason.unwrap_or("Unsupported end-condition pair"),
        )
    })?;
    validate_length(length_mm)?;
    log::debug!("Torsion supports {}-{}: {}", left, right, family.name());
    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use EndCondition::*;

    #[test]
    fn test_bending_table() {
        let expect = |l, r, fam: Option<BendingFamily>| {
            assert_eq!(classify_bending(l, r).family, fam, "{}-{}", l, r);
        };
        expect(Free, Free, None);
        expect(Free, Pinned, None);
        expect(Hinged, Free, None);
        expect(Fixed, Free, Some(BendingFamily::Cantilever { fixed: Side::Left }));
        expect(Free, Fixed, Some(BendingFamily::Cantilever { fixed: Side::Right }));
        expect(Pinned, Hinged, Some(BendingFamily::SimplySupported));
        expect(Hinged, Hinged, Some(BendingFamily::SimplySupported));
        expect(Fixed, Fixed, Some(BendingFamily::FixedFixed));
        expect(Fixed, Hinged, Some(BendingFamily::ProppedCantilever { fixed: Side::Left }));
        expect(Pinned, Fixed, Some(BendingFamily::ProppedCantilever { fixed: Side::Right }));
    }

    #[test]
    fn test_stability_classes() {
        assert_eq!(classify_bending(Pinned, Pinned).stability, Stability::Determinate);
        assert_eq!(classify_bending(Fixed, Pinned).stability, Stability::IndeterminateSupported);
        assert_eq!(classify_bending(Free, Free).stability, Stability::Invalid);
        assert_eq!(classify_torsion(Fixed, Fixed).stability, Stability::IndeterminateSupported);
    }

    #[test]
    fn test_torsion_accepts_only_fixed_free_pairs() {
        let mut accepted = Vec::new();
        for l in EndCondition::ALL {
            for r in EndCondition::ALL {
                if classify_torsion(l, r).family.is_some() {
                    accepted.push((l, r));
                }
            }
        }
        assert_eq!(accepted, vec![(Free, Fixed), (Fixed, Free), (Fixed, Fixed)]);
    }

    #[test]
    fn test_free_free_is_configuration_error() {
        let err = validate_bending(Free, Free, 1000.0).unwrap_err();
        match err {
            CalcError::Configuration { left, right, .. } => {
                assert_eq!(left, "FREE");
                assert_eq!(right, "FREE");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_configuration_checked_before_length() {
        let err = validate_torsion(Pinned, Fixed, -1.0).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION");
        let err = validate_torsion(Fixed, Free, -1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("incastrata".parse::<EndCondition>().unwrap(), Fixed);
        assert_eq!("APPOGGIATA".parse::<EndCondition>().unwrap(), Pinned);
        assert_eq!(" hinged ".parse::<EndCondition>().unwrap(), Hinged);
        assert_eq!("Libera".parse::<EndCondition>().unwrap(), Free);
        assert!("ROLLER".parse::<EndCondition>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Fixed).unwrap(), "\"FIXED\"");
        let c: EndCondition = serde_json::from_str("\"HINGED\"").unwrap();
        assert_eq!(c, Hinged);
    }
}
