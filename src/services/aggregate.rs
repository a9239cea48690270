//! Monthly aggregation for charts
//!
//! Groups dated records into calendar-month buckets holding absolute-value
//! sums per kind. Transfers are not charted. Only the most recent months are
//! kept; the window affects this view only, never the totals.

use std::collections::BTreeMap;

use serde::Serialize;

use super::classifier::classify;
use crate::models::{Kind, Money, MonthKey, TransactionRecord};

/// Number of months the dashboard chart shows
pub const DEFAULT_MONTH_WINDOW: usize = 6;

/// Per-kind sums for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub key: MonthKey,
    pub label: String,
    pub income: Money,
    pub expense: Money,
    pub contribution: Money,
}

impl MonthlyBucket {
    fn empty(key: MonthKey) -> Self {
        Self {
            key,
            label: key.label(),
            income: Money::zero(),
            expense: Money::zero(),
            contribution: Money::zero(),
        }
    }

    fn add(&mut self, kind: Kind, amount: Money) {
        match kind {
            Kind::Income => self.income += amount,
            Kind::Expense => self.expense += amount,
            Kind::Contribution => self.contribution += amount,
            Kind::Transfer => {}
        }
    }

    /// Sum over every charted kind
    pub fn total(&self) -> Money {
        self.income + self.expense + self.contribution
    }

    /// Income minus expense for this month
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Aggregate records into the last [`DEFAULT_MONTH_WINDOW`] month buckets
pub fn aggregate_by_month(records: &[TransactionRecord]) -> Vec<MonthlyBucket> {
    aggregate_by_month_window(records, DEFAULT_MONTH_WINDOW)
}

/// Aggregate records into the last `window` month buckets, oldest first
///
/// Undated records and transfers are skipped; a month holding only
/// transfers gets no bucket.
pub fn aggregate_by_month_window(
    records: &[TransactionRecord],
    window: usize,
) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthlyBucket> = BTreeMap::new();

    for record in records {
        let Some(date) = record.date else {
            continue;
        };

        let kind = classify(record);
        if !kind.is_charted() {
            continue;
        }

        let key = MonthKey::from_date(date);
        buckets
            .entry(key)
            .or_insert_with(|| MonthlyBucket::empty(key))
            .add(kind, record.amount.abs());
    }

    let skip = buckets.len().saturating_sub(window);
    if skip > 0 {
        tracing::debug!(
            months = buckets.len(),
            window,
            "dropping oldest months from monthly view"
        );
    }

    buckets.into_values().skip(skip).collect()
}

/// Cumulative income minus expense, one point per bucket in bucket order
pub fn running_balance(buckets: &[MonthlyBucket]) -> Vec<(MonthKey, Money)> {
    buckets
        .iter()
        .scan(Money::zero(), |balance, bucket| {
            *balance += bucket.net();
            Some((bucket.key, *balance))
        })
        .collect()
}
