//! Normalized transaction record
//!
//! Every raw API object, whatever its field names, is turned into a
//! [`TransactionRecord`] before classification and aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A financial record with normalized amount, type hint and date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Backend identifier, if the payload carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount as sent by the backend; its sign alone is not trustworthy
    pub amount: Money,

    /// Free-text type hint ("depense", "virement", "income", ...)
    #[serde(default)]
    pub raw_type: Option<String>,

    /// Normalized date; `None` when no candidate field held a valid date
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub account_id: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Category name, used to match expense records to budget envelopes
    #[serde(default)]
    pub category: Option<String>,
}

impl TransactionRecord {
    /// Create a record with only an amount and an optional type hint
    pub fn new(amount: Money, raw_type: Option<&str>) -> Self {
        Self {
            id: None,
            amount,
            raw_type: raw_type.map(str::to_string),
            date: None,
            user_id: None,
            account_id: None,
            description: None,
            category: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

    /// Whether the record can be placed in a month bucket or date range
    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }

    /// The best available text for display: description, then type hint
    pub fn display_label(&self) -> &str {
        self.description
            .as_deref()
            .or(self.raw_type.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let record = TransactionRecord::new(Money::from_units(-40), Some("depense"))
            .with_date(date)
            .with_category("Courses")
            .with_user("7");

        assert_eq!(record.raw_type.as_deref(), Some("depense"));
        assert_eq!(record.date, Some(date));
        assert_eq!(record.category.as_deref(), Some("Courses"));
        assert!(record.is_dated());
    }

    #[test]
    fn test_display_label_fallbacks() {
        let record = TransactionRecord::new(Money::zero(), Some("revenu"));
        assert_eq!(record.display_label(), "revenu");
        let record = record.with_description("Salaire");
        assert_eq!(record.display_label(), "Salaire");
        assert_eq!(TransactionRecord::new(Money::zero(), None).display_label(), "");
    }
}
