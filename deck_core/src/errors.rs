//! # Error Types
//!
//! Structured error types for deck_core. A failed limit-state check is *not*
//! an error - it is a normal result carried in a [`DesignCheckResult`].
//! Errors here cover the conditions that prevent a check from being computed
//! at all: malformed geometry, invalid inputs, and missing dependencies
//! between checks.
//!
//! [`DesignCheckResult`]: crate::checks::DesignCheckResult
//!
//! ## Example
//!
//! ```rust
//! use deck_core::errors::{DeckError, DeckResult};
//!
//! fn validate_span(span_mm: f64) -> DeckResult<()> {
//!     if span_mm <= 0.0 {
//!         return Err(DeckError::invalid_input(
//!             "span_mm",
//!             span_mm.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for deck_core operations
pub type DeckResult<T> = Result<T, DeckError>;

/// Structured error type for the deck design engine.
///
/// Each variant provides specific context about what went wrong so that
/// callers (report generators, optimizers, UIs) can handle failures
/// programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DeckError {
    /// An input value is invalid (out of range, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing for a requested check
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A digitized cross-section could not be interpreted as a deck profile
    #[error("Not a valid deck profile: {reason}")]
    InvalidProfile { reason: String },

    /// A dependent check was invoked without its prerequisite results
    #[error("Check '{check}' requires prior result(s): {requires}")]
    MissingDependency { check: String, requires: String },

    /// Calculation failed (degenerate section, zero capacity, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DeckError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DeckError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        DeckError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidProfile error
    pub fn invalid_profile(reason: impl Into<String>) -> Self {
        DeckError::InvalidProfile {
            reason: reason.into(),
        }
    }

    /// Create a MissingDependency error
    pub fn missing_dependency(check: impl Into<String>, requires: impl Into<String>) -> Self {
        DeckError::MissingDependency {
            check: check.into(),
            requires: requires.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DeckError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DeckError::InvalidInput { .. } => "INVALID_INPUT",
            DeckError::MissingField { .. } => "MISSING_FIELD",
            DeckError::InvalidProfile { .. } => "INVALID_PROFILE",
            DeckError::MissingDependency { .. } => "MISSING_DEPENDENCY",
            DeckError::CalculationFailed { .. } => "CALCULATION_FAILED",
            DeckError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
