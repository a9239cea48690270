//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod guard;
pub mod transactions;

pub use budget::{handle_budgets_command, handle_envelope_command, BudgetsArgs, EnvelopeArgs};
pub use guard::{handle_classify_command, handle_guard_command, ClassifyArgs, GuardArgs};
pub use transactions::{
    handle_dashboard_command, handle_list_command, handle_monthly_command,
    handle_totals_command, DashboardArgs, ListArgs, MonthlyArgs, TotalsArgs,
};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;
use clap::Args;

use crate::error::{BudgetLensError, BudgetLensResult};
use crate::models::Kind;
use crate::services::RecordFilter;

/// Record filter flags shared by the transaction commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Text to look for in description, type and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Only records of this user
    #[arg(long)]
    pub user: Option<String>,

    /// Only records of this account
    #[arg(long)]
    pub account: Option<String>,

    /// Only records of this kind (income, expense, contribution, transfer)
    #[arg(short, long)]
    pub kind: Option<Kind>,
}

impl FilterArgs {
    /// Build the record filter, rejecting an inverted date range
    pub fn to_filter(&self) -> BudgetLensResult<RecordFilter> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(BudgetLensError::Validation(format!(
                    "--from {} is after --to {}",
                    from, to
                )));
            }
        }

        let mut filter = RecordFilter::new().with_range(self.from, self.to);
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            filter = filter.with_search(search);
        }
        if let Some(user) = &self.user {
            filter = filter.with_user(user.clone());
        }
        if let Some(account) = &self.account {
            filter = filter.with_account(account.clone());
        }
        if let Some(kind) = self.kind {
            filter = filter.with_kind(kind);
        }
        Ok(filter)
    }
}

/// Open a CSV export target
pub(crate) fn create_export(path: &Path) -> BudgetLensResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        BudgetLensError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_args() {
        let filter = FilterArgs::default().to_filter().unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_filter_args_to_filter() {
        let args = FilterArgs {
            search: Some("loyer".into()),
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: NaiveDate::from_ymd_opt(2024, 3, 31),
            user: Some("7".into()),
            account: None,
            kind: Some(Kind::Expense),
        };

        let filter = args.to_filter().unwrap();
        assert_eq!(filter.search.as_deref(), Some("loyer"));
        assert_eq!(filter.user_id.as_deref(), Some("7"));
        assert_eq!(filter.kind, Some(Kind::Expense));
        assert!(filter.account_id.is_none());
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let args = FilterArgs {
            search: Some("   ".into()),
            ..FilterArgs::default()
        };
        assert!(args.to_filter().unwrap().is_empty());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let args = FilterArgs {
            from: NaiveDate::from_ymd_opt(2024, 5, 1),
            to: NaiveDate::from_ymd_opt(2024, 4, 1),
            ..FilterArgs::default()
        };
        assert!(args.to_filter().unwrap_err().is_validation());
    }
}
