//! Totals calculator
//!
//! Sums absolute amounts per kind over an already-filtered record set.

use serde::Serialize;

use super::classifier::classify;
use crate::models::{Kind, Money, TransactionRecord};

/// Per-kind totals with the resulting balance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub contribution: Money,
    /// `income - expense`; contributions and transfers do not count
    pub balance: Money,
}

/// Compute totals over the given records, dated or not
pub fn compute_totals(records: &[TransactionRecord]) -> Totals {
    let mut totals = Totals::default();

    for record in records {
        let amount = record.amount.abs();
        match classify(record) {
            Kind::Income => totals.income += amount,
            Kind::Expense => totals.expense += amount,
            Kind::Contribution => totals.contribution += amount,
            Kind::Transfer => {}
        }
    }

    totals.balance = totals.income - totals.expense;
    totals
}
