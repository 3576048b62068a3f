//! # Unit Types
//!
//! Lightweight newtype wrappers for the units the engine works in.
//!
//! ## Working Units
//!
//! - Length: millimeters (mm)
//! - Force: newtons (N)
//! - Bending moment: newton-millimeters (N·mm)
//! - Torque: newton-meters (N·m) for loads and reported values,
//!   newton-millimeters inside stiffness and stress formulas
//! - Stress and moduli: megapascals (MPa = N/mm²)
//! - Angles: radians internally, degrees for display
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{NewtonMeters, NewtonMillimeters, Radians, Degrees};
//!
//! let torque = NewtonMeters(60.0);
//! let torque_nmm: NewtonMillimeters = torque.into();
//! assert_eq!(torque_nmm.0, 60_000.0);
//!
//! let angle: Degrees = Radians(std::f64::consts::PI).into();
//! assert!((angle.0 - 180.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Moment / Torque Units
// ============================================================================

/// Moment or torque in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment or torque in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<NewtonMeters> for NewtonMillimeters {
    fn from(nm: NewtonMeters) -> Self {
        NewtonMillimeters(nm.0 * 1000.0)
    }
}

impl From<NewtonMillimeters> for NewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        NewtonMeters(nmm.0 / 1000.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

// ============================================================================
// Torque Input Unit
// ============================================================================

/// Unit in which torque loads are entered.
///
/// Whatever the input unit, the load model stores torques in N·m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TorqueUnit {
    /// N·m (default)
    #[default]
    NewtonMeter,
    /// N·mm
    NewtonMillimeter,
}

impl TorqueUnit {
    /// Convert a value entered in this unit to N·m
    pub fn to_newton_meters(&self, value: f64) -> NewtonMeters {
        match self {
            TorqueUnit::NewtonMeter => NewtonMeters(value),
            TorqueUnit::NewtonMillimeter => NewtonMillimeters(value).into(),
        }
    }

    /// Unit symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            TorqueUnit::NewtonMeter => "N·m",
            TorqueUnit::NewtonMillimeter => "N·mm",
        }
    }
}

impl std::fmt::Display for TorqueUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torque_conversions() {
        let nmm: NewtonMillimeters = NewtonMeters(2.5).into();
        assert_eq!(nmm.0, 2500.0);
        let nm: NewtonMeters = NewtonMillimeters(1500.0).into();
        assert_eq!(nm.0, 1.5);
    }

    #[test]
    fn test_torque_unit_normalization() {
        assert_eq!(TorqueUnit::NewtonMeter.to_newton_meters(12.0).0, 12.0);
        assert_eq!(TorqueUnit::NewtonMillimeter.to_newton_meters(12_000.0).0, 12.0);
    }

    #[test]
    fn test_angle_conversion() {
        let deg: Degrees = Radians(std::f64::consts::FRAC_PI_2).into();
        assert!((deg.0 - 90.0).abs() < 1e-12);
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&NewtonMeters(3.0)).unwrap();
        assert_eq!(json, "3.0");
        let unit: TorqueUnit = serde_json::from_str("\"NewtonMillimeter\"").unwrap();
        assert_eq!(unit, TorqueUnit::NewtonMillimeter);
    }
}
