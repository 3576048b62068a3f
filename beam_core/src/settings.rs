//! # Solver Settings
//!
//! Tunables shared by both solve entry points. Every field has a default so
//! a settings file only needs to name what it changes.
//!
//! ## JSON Example
//!
//! ```json
//! { "sample_count": 401 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::TorqueUnit;

/// Fewest uniform grid points a diagram may use
pub const MIN_SAMPLE_COUNT: usize = 11;

/// Solver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Uniform grid points per diagram (segment boundaries and critical points come on top)
    pub sample_count: usize,

    /// Relative tolerance for equilibrium and compatibility residuals
    pub equilibrium_tolerance: f64,

    /// Unit assumed for torque loads that do not name one
    pub torque_input_unit: TorqueUnit,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            sample_count: 241,
            equilibrium_tolerance: 1e-9,
            torque_input_unit: TorqueUnit::NewtonMeter,
        }
    }
}

impl SolverSettings {
    /// Set the uniform sample count (builder pattern)
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Sample count clamped to the supported minimum
    pub fn effective_sample_count(&self) -> usize {
        self.sample_count.max(MIN_SAMPLE_COUNT)
    }

    /// Validate settings values
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.equilibrium_tolerance > 0.0 && self.equilibrium_tolerance < 1.0) {
            return Err(CalcError::invalid_input(
                "equilibrium_tolerance",
                self.equilibrium_tolerance.to_string(),
                "Tolerance must be in (0, 1)",
            ));
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings: SolverSettings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SolverSettings::default();
        assert_eq!(settings.sample_count, 241);
        assert_eq!(settings.torque_input_unit, TorqueUnit::NewtonMeter);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: SolverSettings = serde_json::from_str(r#"{ "sample_count": 51 }"#).unwrap();
        assert_eq!(settings.sample_count, 51);
        assert_eq!(settings.equilibrium_tolerance, 1e-9);
    }

    #[test]
    fn test_sample_count_is_clamped() {
        let settings = SolverSettings::default().with_sample_count(3);
        assert_eq!(settings.effective_sample_count(), MIN_SAMPLE_COUNT);
    }

    #[test]
    fn test_invalid_tolerance() {
        let settings = SolverSettings {
            equilibrium_tolerance: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SolverSettings::from_json_file("/nonexistent/settings.json").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
