//! Dashboard Report
//!
//! Everything the dashboard home page shows at once: the totals cards, the
//! monthly chart and the budget envelopes.

use std::io::Write;

use crate::config::DisplayContext;
use crate::display::format_money;
use crate::display::report::double_separator;
use crate::error::BudgetLensResult;
use crate::models::{BudgetEnvelope, TransactionRecord};
use crate::services::{compute_totals, Totals};

use super::budget_status::BudgetStatusReport;
use super::monthly::MonthlyReport;

/// Combined dashboard view
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub totals: Totals,
    pub monthly: MonthlyReport,
    /// Present when envelopes were supplied
    pub budgets: Option<BudgetStatusReport>,
    /// Records the totals were computed over
    pub record_count: usize,
    /// Records left out of the monthly view for lack of a date
    pub undated_count: usize,
}

impl DashboardReport {
    /// Build the dashboard from an already-filtered record set
    ///
    /// Envelope spending is recomputed from the same records.
    pub fn generate(
        records: &[TransactionRecord],
        envelopes: Option<&[BudgetEnvelope]>,
        window: usize,
    ) -> Self {
        Self {
            totals: compute_totals(records),
            monthly: MonthlyReport::generate(records, window),
            budgets: envelopes.map(|e| BudgetStatusReport::generate(e, Some(records))),
            record_count: records.len(),
            undated_count: records.iter().filter(|r| !r.is_dated()).count(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, ctx: &DisplayContext) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&double_separator(78));
        output.push('\n');
        output.push_str(&format_totals(&self.totals, ctx));
        output.push_str(&format!("Transactions: {}", self.record_count));
        if self.undated_count > 0 {
            output.push_str(&format!(" ({} undated)", self.undated_count));
        }
        output.push_str("\n\n");

        output.push_str(&self.monthly.format_terminal(ctx));

        if let Some(budgets) = &self.budgets {
            output.push('\n');
            output.push_str(&budgets.format_terminal(ctx));
        }

        output
    }

    /// Export the monthly breakdown followed by a totals row to CSV
    ///
    /// The totals row uses the monthly columns; its net and running balance
    /// are both the overall balance.
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetLensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        self.monthly.write_csv_rows(&mut csv)?;

        let balance = self.totals.balance.amount().to_string();
        csv.write_record([
            "Total".to_string(),
            "All".to_string(),
            self.totals.income.amount().to_string(),
            self.totals.expense.amount().to_string(),
            self.totals.contribution.amount().to_string(),
            balance.clone(),
            balance,
        ])?;
        csv.flush()?;
        Ok(())
    }
}

/// The four totals cards as aligned lines
pub fn format_totals(totals: &Totals, ctx: &DisplayContext) -> String {
    let mut output = String::new();
    for (label, amount) in [
        ("Income", totals.income),
        ("Expenses", totals.expense),
        ("Contributions", totals.contribution),
        ("Balance", totals.balance),
    ] {
        output.push_str(&format!("{:<16}{:>16}\n", label, format_money(amount, ctx)));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthKey};
    use chrono::NaiveDate;

    fn records() -> Vec<TransactionRecord> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        vec![
            TransactionRecord::new(Money::from_units(100), Some("revenu")).with_date(date),
            TransactionRecord::new(Money::from_units(-40), Some("depense"))
                .with_date(date)
                .with_category("Courses"),
            TransactionRecord::new(Money::from_units(-10), Some("virement")).with_date(date),
            TransactionRecord::new(Money::from_units(-5), None),
        ]
    }

    #[test]
    fn test_generate() {
        let report = DashboardReport::generate(&records(), None, 6);
        assert_eq!(report.totals.income, Money::from_units(100));
        assert_eq!(report.totals.expense, Money::from_units(45));
        assert_eq!(report.totals.balance, Money::from_units(55));
        assert_eq!(report.record_count, 4);
        assert_eq!(report.undated_count, 1);
        assert_eq!(report.monthly.buckets.len(), 1);
        assert!(report.budgets.is_none());
    }

    #[test]
    fn test_budgets_use_records() {
        let envelopes = vec![BudgetEnvelope::new(
            "Courses",
            MonthKey::new(2024, 3).unwrap(),
            Money::from_units(50),
        )];
        let report = DashboardReport::generate(&records(), Some(&envelopes), 6);
        let budgets = report.budgets.unwrap();
        assert_eq!(budgets.rows[0].evaluation.spent_amount, Money::from_units(40));
    }

    #[test]
    fn test_format_terminal() {
        let ctx = DisplayContext::default();
        let out = DashboardReport::generate(&records(), None, 6).format_terminal(&ctx);
        assert!(out.contains("Income"));
        assert!(out.contains("€100.00"));
        assert!(out.contains("€55.00"));
        assert!(out.contains("Transactions: 4 (1 undated)"));
        assert!(out.contains("Mar 24"));
        assert!(!out.contains("Budget Status"));
    }

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        DashboardReport::generate(&records(), None, 6)
            .export_csv(&mut buffer)
            .unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("2024-03,Mar 24,100,40,0,60,60"));
        assert!(csv.ends_with("Total,All,100,45,0,55,55\n"));
    }

    #[test]
    fn test_export_csv_has_one_table() {
        let mut buffer = Vec::new();
        DashboardReport::generate(&records(), None, 6)
            .export_csv(&mut buffer)
            .unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        assert_eq!(reader.headers().unwrap().len(), 7);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 7));
        assert_eq!(&rows[1][0], "Total");
        assert_eq!(&rows[1][6], "55");
    }
}
