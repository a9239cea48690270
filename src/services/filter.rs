//! Record filtering
//!
//! Every active criterion must hold (logical AND). An empty filter keeps all
//! records in input order.

use chrono::NaiveDate;

use super::classifier::classify;
use crate::models::{Kind, TransactionRecord};

/// Filter criteria for transaction lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Case-insensitive text matched against description, type hint and category
    pub search: Option<String>,
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to: Option<NaiveDate>,
    pub user_id: Option<String>,
    pub account_id: Option<String>,
    pub kind: Option<Kind>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn has_date_range(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Check a single record against every active criterion
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        self.matches_search(record)
            && self.matches_range(record)
            && matches_exact(self.user_id.as_deref(), record.user_id.as_deref())
            && matches_exact(self.account_id.as_deref(), record.account_id.as_deref())
            && self.kind.map_or(true, |kind| classify(record) == kind)
    }

    fn matches_search(&self, record: &TransactionRecord) -> bool {
        let Some(needle) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = needle.to_lowercase();

        [&record.description, &record.raw_type, &record.category]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_range(&self, record: &TransactionRecord) -> bool {
        if !self.has_date_range() {
            return true;
        }
        let Some(date) = record.date else {
            return false;
        };

        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    /// Apply the filter, cloning matching records in input order
    pub fn apply(&self, records: &[TransactionRecord]) -> Vec<TransactionRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

fn matches_exact(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}
