//! Monthly Report
//!
//! The chart view of the dashboard: one row per month with per-kind sums,
//! the month's net and the running balance.

use std::io::Write;

use crate::config::DisplayContext;
use crate::display::format_money;
use crate::display::report::{format_bar, separator};
use crate::error::BudgetLensResult;
use crate::models::{Money, MonthKey, TransactionRecord};
use crate::services::{aggregate_by_month_window, running_balance, MonthlyBucket};

const BAR_WIDTH: usize = 16;

/// Monthly breakdown over the most recent months
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Number of months requested
    pub window: usize,
    /// Buckets, oldest first
    pub buckets: Vec<MonthlyBucket>,
    /// Cumulative net after each bucket
    pub balance: Vec<(MonthKey, Money)>,
}

impl MonthlyReport {
    /// Aggregate records into at most `window` months
    pub fn generate(records: &[TransactionRecord], window: usize) -> Self {
        let buckets = aggregate_by_month_window(records, window);
        let balance = running_balance(&buckets);

        Self {
            window,
            buckets,
            balance,
        }
    }

    /// Largest per-kind sum across buckets, used to scale bars
    fn peak(&self) -> Money {
        self.buckets
            .iter()
            .flat_map(|b| [b.income, b.expense, b.contribution])
            .max()
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, ctx: &DisplayContext) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Overview (last {} months)\n", self.window));
        output.push_str(&separator(78));
        output.push('\n');

        if self.buckets.is_empty() {
            output.push_str("No dated transactions.\n");
            return output;
        }

        let peak = self.peak().to_f64();

        for (bucket, (_, running)) in self.buckets.iter().zip(&self.balance) {
            output.push_str(&format!(
                "{:<8} net {:>12}   balance {:>12}\n",
                bucket.label,
                format_money(bucket.net(), ctx),
                format_money(*running, ctx)
            ));
            for (name, amount) in [
                ("income", bucket.income),
                ("expense", bucket.expense),
                ("contrib", bucket.contribution),
            ] {
                output.push_str(&format!(
                    "  {:<8} {} {:>12}\n",
                    name,
                    format_bar(amount.to_f64(), peak, BAR_WIDTH),
                    format_money(amount, ctx)
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetLensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        self.write_csv_rows(&mut csv)?;
        csv.flush()?;
        Ok(())
    }

    /// Write the header and one row per month, leaving the writer open
    pub(crate) fn write_csv_rows<W: Write>(
        &self,
        csv: &mut csv::Writer<W>,
    ) -> BudgetLensResult<()> {
        csv.write_record([
            "Month",
            "Label",
            "Income",
            "Expense",
            "Contribution",
            "Net",
            "Running Balance",
        ])?;

        for (bucket, (_, running)) in self.buckets.iter().zip(&self.balance) {
            csv.write_record([
                bucket.key.to_string(),
                bucket.label.clone(),
                bucket.income.amount().to_string(),
                bucket.expense.amount().to_string(),
                bucket.contribution.amount().to_string(),
                bucket.net().amount().to_string(),
                running.amount().to_string(),
            ])?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(amount: i64, kind: Option<&str>, month: u32) -> TransactionRecord {
        TransactionRecord::new(Money::from_units(amount), kind)
            .with_date(NaiveDate::from_ymd_opt(2024, month, 10).unwrap())
    }

    fn sample() -> Vec<TransactionRecord> {
        vec![
            record(100, Some("revenu"), 1),
            record(-40, Some("depense"), 1),
            record(200, Some("revenu"), 2),
            record(-250, None, 2),
            record(-10, Some("virement"), 2),
        ]
    }

    #[test]
    fn test_generate() {
        let report = MonthlyReport::generate(&sample(), 6);
        assert_eq!(report.buckets.len(), 2);
        assert_eq!(report.balance[0].1, Money::from_units(60));
        assert_eq!(report.balance[1].1, Money::from_units(10));
        assert_eq!(report.peak(), Money::from_units(250));
    }

    #[test]
    fn test_format_terminal() {
        let out = MonthlyReport::generate(&sample(), 6).format_terminal(&DisplayContext::default());
        assert!(out.contains("last 6 months"));
        assert!(out.contains("Jan 24"));
        assert!(out.contains("Feb 24"));
        assert!(out.contains("-€50.00"));
    }

    #[test]
    fn test_format_terminal_empty() {
        let out = MonthlyReport::generate(&[], 6).format_terminal(&DisplayContext::default());
        assert!(out.contains("No dated transactions."));
    }

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        MonthlyReport::generate(&sample(), 6)
            .export_csv(&mut buffer)
            .unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-01,Jan 24,100,40,0,60,60");
        assert_eq!(lines[2], "2024-02,Feb 24,200,250,0,-50,10");
    }
}
