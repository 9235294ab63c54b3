//! # Error Types
//!
//! Structured error types for steel_core. Each variant carries enough
//! context to understand and fix the problem programmatically, whether the
//! caller is a human, a UI, or an LLM.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_in2: f64) -> CalcResult<()> {
//!     if area_in2 <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "area_in2".to_string(),
//!             value: area_in2.to_string(),
//!             reason: "Area must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for steel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// All failures are deterministic functions of the input; nothing is
/// transient, so nothing is retried internally. Warnings and notes are not
/// errors - they ride along on a still-valid result.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Width-to-thickness table case selector is outside 1-9, or a required
    /// auxiliary coefficient (kc) was omitted or invalid
    #[error("Invalid table case {case}: {reason}")]
    InvalidTableCase { case: u8, reason: String },

    /// Section not found in the shape database
    #[error("Section not found: {label}")]
    SectionNotFound { label: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidTableCase error
    pub fn invalid_table_case(case: u8, reason: impl Into<String>) -> Self {
        CalcError::InvalidTableCase {
            case,
            reason: reason.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(label: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            label: label.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidTableCase { .. } => "INVALID_TABLE_CASE",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
        }
    }
}
