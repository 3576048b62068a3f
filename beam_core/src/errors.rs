//! # Error Types
//!
//! Structured error types for beam_core. Every variant carries enough
//! context (which end, which load index, which residual) for a caller to
//! present a precise message or to react programmatically.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_mm".to_string(),
//!             value: length_mm.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive length, zone with start >= end,
    /// position outside the span, ...). Rejected before any solve starts.
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The end-condition pair is unstable or not handled for this analysis.
    #[error("Invalid support configuration {left} - {right}: {reason}")]
    Configuration {
        left: String,
        right: String,
        reason: String,
    },

    /// An equilibrium or compatibility residual exceeded its tolerance.
    ///
    /// This signals a defect in the closed-form coefficients, never a user mistake.
    #[error("Numeric consistency check '{check}' failed: residual {residual:e} exceeds tolerance {tolerance:e}")]
    NumericConsistency {
        check: String,
        residual: f64,
        tolerance: f64,
    },

    /// Material not found in the catalog snapshot
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Standard section not found in the catalog snapshot
    #[error("Section not found: {section_name}")]
    SectionNotFound { section_name: String },

    /// The section exists but cannot be used for the requested analysis
    #[error("Section '{section}' not supported: {reason}")]
    SectionNotSupported { section: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(left: impl Into<String>, right: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Configuration {
            left: left.into(),
            right: right.into(),
            reason: reason.into(),
        }
    }

    /// Create a NumericConsistency error
    pub fn numeric_consistency(check: impl Into<String>, residual: f64, tolerance: f64) -> Self {
        CalcError::NumericConsistency {
            check: check.into(),
            residual,
            tolerance,
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(section_name: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            section_name: section_name.into(),
        }
    }

    /// Create a SectionNotSupported error
    pub fn section_not_supported(section: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::SectionNotSupported {
            section: section.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether this error should be shown to the end user as a correctable condition.
    ///
    /// Numeric consistency failures are internal defects.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, CalcError::NumericConsistency { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Configuration { .. } => "CONFIGURATION",
            CalcError::NumericConsistency { .. } => "NUMERIC_CONSISTENCY",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::SectionNotSupported { .. } => "SECTION_NOT_SUPPORTED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
