//! Custom error types for budgetlens
//!
//! The computation layer (classification, aggregation, totals, budget
//! evaluation) never fails. Errors only come from the edges: reading input
//! files, loading settings, validating envelopes and exporting reports.

use thiserror::Error;

/// The main error type for budgetlens operations
#[derive(Error, Debug)]
pub enum BudgetLensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-entered data (envelopes, filters, periods)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Input payload has an unexpected shape
    #[error("Input error: {0}")]
    Input(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetLensError {
    /// Create a "not found" error for input files
    pub fn file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget envelopes
    pub fn envelope_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Envelope",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetLensError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetLensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BudgetLensError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for budgetlens operations
pub type BudgetLensResult<T> = Result<T, BudgetLensError>;
