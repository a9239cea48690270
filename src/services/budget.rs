//! Budget utilization evaluator
//!
//! Derives remaining amount, utilization percentage and a four-level status
//! from an envelope's cap and the amount spent against it.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::classifier::classify;
use crate::models::{BudgetEnvelope, Kind, Money, TransactionRecord};

/// Utilization status, ordered from least to most used
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Healthy,
    Moderate,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    /// Status for a utilization percentage; lower bounds are inclusive
    pub fn from_percent(percent: Decimal) -> Self {
        if percent >= Decimal::ONE_HUNDRED {
            Self::Exceeded
        } else if percent >= Decimal::from(80) {
            Self::Warning
        } else if percent >= Decimal::from(60) {
            Self::Moderate
        } else {
            Self::Healthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Moderate => "moderate",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetEvaluation {
    pub spent_amount: Money,
    /// `max - spent`; negative once the cap is passed
    pub remaining_amount: Money,
    pub utilization_percent: Decimal,
    pub status: BudgetStatus,
}

impl BudgetEvaluation {
    /// Utilization as a float for bars and charts
    pub fn utilization_f64(&self) -> f64 {
        self.utilization_percent.to_f64().unwrap_or(0.0)
    }
}

/// `spent / max * 100`, or 0 when the cap is not positive
///
/// Saturates instead of overflowing for extreme ratios.
pub fn utilization_percent(max_amount: Money, spent: Money) -> Decimal {
    let max = max_amount.amount();
    if max <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let saturated = if spent.is_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    };

    spent
        .amount()
        .checked_div(max)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(saturated)
}

/// Evaluate an envelope against the amount spent in it
pub fn evaluate_budget(envelope: &BudgetEnvelope, spent: Money) -> BudgetEvaluation {
    let utilization_percent = utilization_percent(envelope.max_amount, spent);

    BudgetEvaluation {
        spent_amount: spent,
        remaining_amount: envelope.max_amount - spent,
        utilization_percent,
        status: BudgetStatus::from_percent(utilization_percent),
    }
}

/// Sum of expense records in the envelope's category and month
///
/// Undated and uncategorized records never match.
pub fn matching_expense_sum(envelope: &BudgetEnvelope, records: &[TransactionRecord]) -> Money {
    records
        .iter()
        .filter(|r| r.date.is_some_and(|d| envelope.month.contains(d)))
        .filter(|r| {
            r.category
                .as_deref()
                .is_some_and(|c| envelope.matches_category(c))
        })
        .filter(|r| classify(r) == Kind::Expense)
        .map(|r| r.amount.abs())
        .sum()
}

/// An envelope paired with its evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeEvaluation {
    pub envelope: BudgetEnvelope,
    pub evaluation: BudgetEvaluation,
}

/// Where the spent amount of each envelope comes from
#[derive(Debug, Clone, Copy)]
pub enum SpentSource<'a> {
    /// Recompute from transaction records
    Records(&'a [TransactionRecord]),
    /// Use the backend's `montant_depense`
    Reported,
}

/// Evaluate every envelope, keeping input order
pub fn evaluate_envelopes(
    envelopes: &[BudgetEnvelope],
    source: SpentSource<'_>,
) -> Vec<EnvelopeEvaluation> {
    envelopes
        .iter()
        .map(|envelope| {
            let spent = match source {
                SpentSource::Records(records) => matching_expense_sum(envelope, records),
                SpentSource::Reported => envelope.reported_spent,
            };
            EnvelopeEvaluation {
                envelope: envelope.clone(),
                evaluation: evaluate_budget(envelope, spent),
            }
        })
        .collect()
}
