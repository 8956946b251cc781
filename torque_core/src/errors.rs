//! # Error Types
//!
//! Structured error types for torque_core. The resolution engine itself is
//! total, so these only surface from the optional input validation, from
//! parsing user-facing tokens (units, modes, table sets) and from building
//! custom tables.
//!
//! ## Example
//!
//! ```rust
//! use torque_core::errors::{CalcError, CalcResult};
//!
//! fn check_percent(pct: f64) -> CalcResult<()> {
//!     if !(30.0..=70.0).contains(&pct) {
//!         return Err(CalcError::invalid_percent(pct, "Removal percent must be 30-70"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_percent(50.0).is_ok());
//! assert_eq!(check_percent(90.0).unwrap_err().error_code(), "INVALID_PERCENT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for torque_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for torque operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Cap diameter is outside the supported domain
    #[error("Invalid diameter: {value} mm - {reason}")]
    InvalidDiameter { value: String, reason: String },

    /// Removal percentage is outside the supported domain
    #[error("Invalid removal percent: {value}% - {reason}")]
    InvalidPercent { value: String, reason: String },

    /// Unit token not recognized
    #[error("Unknown torque unit: '{unit}' (expected inlb, N·m or kgf·cm)")]
    UnknownUnit { unit: String },

    /// Resolution mode token not recognized
    #[error("Unknown resolution mode: '{mode}' (expected table or rule)")]
    UnknownMode { mode: String },

    /// Table set name not recognized
    #[error("Unknown table set: '{name}' (expected minimal, extended or vendor)")]
    UnknownTableSet { name: String },

    /// A custom table entry breaks the range invariant
    #[error("Invalid table entry for size {key}: {reason}")]
    InvalidTableEntry { key: u32, reason: String },

    /// The active table set carries no neck-finish table
    #[error("Table set '{table_set}' has no neck-finish specifications")]
    NeckSpecUnavailable { table_set: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidDiameter error
    pub fn invalid_diameter(value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidDiameter {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidPercent error
    pub fn invalid_percent(value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidPercent {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit { unit: unit.into() }
    }

    /// Create an UnknownMode error
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        CalcError::UnknownMode { mode: mode.into() }
    }

    /// Create an UnknownTableSet error
    pub fn unknown_table_set(name: impl Into<String>) -> Self {
        CalcError::UnknownTableSet { name: name.into() }
    }

    /// Create an InvalidTableEntry error
    pub fn invalid_table_entry(key: u32, reason: impl Into<String>) -> Self {
        CalcError::InvalidTableEntry {
            key,
            reason: reason.into(),
        }
    }

    /// Create a NeckSpecUnavailable error
    pub fn neck_spec_unavailable(table_set: impl Into<String>) -> Self {
        CalcError::NeckSpecUnavailable {
            table_set: table_set.into(),
        }
    }

    /// True when the error comes from user input that can simply be corrected
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidDiameter { .. }
                | CalcError::InvalidPercent { .. }
                | CalcError::UnknownUnit { .. }
                | CalcError::UnknownMode { .. }
                | CalcError::UnknownTableSet { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDiameter { .. } => "INVALID_DIAMETER",
            CalcError::InvalidPercent { .. } => "INVALID_PERCENT",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownMode { .. } => "UNKNOWN_MODE",
            CalcError::UnknownTableSet { .. } => "UNKNOWN_TABLE_SET",
            CalcError::InvalidTableEntry { .. } => "INVALID_TABLE_ENTRY",
            CalcError::NeckSpecUnavailable { .. } => "NECK_SPEC_UNAVAILABLE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
