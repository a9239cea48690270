//! Budget envelope model
//!
//! An envelope caps spending for one category in one month. Envelopes are
//! created and edited elsewhere; here they are only read and evaluated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::MonthKey;

/// A budget allocation for one category and one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Category the cap applies to
    pub category: String,

    /// Month the cap applies to
    pub month: MonthKey,

    /// Maximum amount that may be spent
    pub max_amount: Money,

    /// Spent amount as reported by the backend (`montant_depense`)
    #[serde(default)]
    pub reported_spent: Money,
}

impl BudgetEnvelope {
    /// Create a new envelope
    pub fn new(category: impl Into<String>, month: MonthKey, max_amount: Money) -> Self {
        Self {
            id: None,
            category: category.into(),
            month,
            max_amount,
            reported_spent: Money::zero(),
        }
    }

    pub fn with_reported_spent(mut self, spent: Money) -> Self {
        self.reported_spent = spent;
        self
    }

    /// Check if a record category belongs to this envelope
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.trim().to_lowercase() == category.trim().to_lowercase()
    }

    /// Validate the envelope the way the edit form does
    pub fn validate(&self) -> Result<(), EnvelopeValidationError> {
        if self.category.trim().is_empty() {
            return Err(EnvelopeValidationError::MissingCategory);
        }

        if !self.max_amount.is_positive() {
            return Err(EnvelopeValidationError::NonPositiveAmount);
        }

        Ok(())
    }

    /// Build and validate an envelope from raw form input
    pub fn from_form(
        category: &str,
        period: &str,
        max_amount: &str,
    ) -> Result<Self, EnvelopeValidationError> {
        if period.trim().is_empty() {
            return Err(EnvelopeValidationError::MissingPeriod);
        }
        let month = MonthKey::parse(period)
            .map_err(|_| EnvelopeValidationError::InvalidPeriod(period.trim().to_string()))?;
        let max_amount = Money::parse(max_amount)
            .map_err(|_| EnvelopeValidationError::InvalidAmount(max_amount.trim().to_string()))?;

        let envelope = Self::new(category.trim(), month, max_amount);
        envelope.validate()?;
        Ok(envelope)
    }
}

impl fmt::Display for BudgetEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} max: {}", self.category, self.month, self.max_amount)
    }
}

/// Validation errors for budget envelopes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeValidationError {
    MissingCategory,
    MissingPeriod,
    InvalidPeriod(String),
    InvalidAmount(String),
    NonPositiveAmount,
}

impl fmt::Display for EnvelopeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Category is required"),
            Self::MissingPeriod => write!(f, "Period is required"),
            Self::InvalidPeriod(p) => write!(f, "Invalid period '{}': expected YYYY-MM", p),
            Self::InvalidAmount(a) => write!(f, "Invalid amount '{}'", a),
            Self::NonPositiveAmount => write!(f, "Budget amount must be greater than zero"),
        }
    }
}

impl std::error::Error for EnvelopeValidationError {}

impl From<EnvelopeValidationError> for crate::error::BudgetLensError {
    fn from(err: EnvelopeValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
