//! Budget Status Report
//!
//! One row per envelope with its cap, spending, remaining amount,
//! utilization and status.

use std::io::Write;

use crate::config::DisplayContext;
use crate::display::report::{format_bar, format_status, separator};
use crate::display::{format_money, format_percentage};
use crate::error::BudgetLensResult;
use crate::models::{BudgetEnvelope, TransactionRecord};
use crate::services::{evaluate_envelopes, BudgetStatus, EnvelopeEvaluation, SpentSource};

/// Budget status report across envelopes
#[derive(Debug, Clone)]
pub struct BudgetStatusReport {
    pub rows: Vec<EnvelopeEvaluation>,
    /// Whether spending came from transaction records or the backend
    pub computed_from_records: bool,
}

impl BudgetStatusReport {
    /// Evaluate envelopes, recomputing spending from records when given
    pub fn generate(envelopes: &[BudgetEnvelope], records: Option<&[TransactionRecord]>) -> Self {
        let source = match records {
            Some(records) => SpentSource::Records(records),
            None => SpentSource::Reported,
        };

        let mut rows = evaluate_envelopes(envelopes, source);
        rows.sort_by(|a, b| {
            a.envelope
                .month
                .cmp(&b.envelope.month)
                .then_with(|| a.envelope.category.cmp(&b.envelope.category))
        });

        Self {
            rows,
            computed_from_records: records.is_some(),
        }
    }

    /// Number of envelopes at or above a status
    pub fn count_at_least(&self, status: BudgetStatus) -> usize {
        self.rows
            .iter()
            .filter(|r| r.evaluation.status >= status)
            .count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, ctx: &DisplayContext) -> String {
        let mut output = String::new();

        output.push_str("Budget Status\n");
        output.push_str(&separator(96));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets found.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:<8} {:>12} {:>12} {:>12} {:>7}  {:<10} {}\n",
            "Category", "Month", "Max", "Spent", "Remaining", "Used", "Bar", "Status"
        ));

        for row in &self.rows {
            let eval = &row.evaluation;
            output.push_str(&format!(
                "{:<20} {:<8} {:>12} {:>12} {:>12} {:>7}  {} {}\n",
                crate::display::report::truncate(&row.envelope.category, 20),
                row.envelope.month.to_string(),
                format_money(row.envelope.max_amount, ctx),
                format_money(eval.spent_amount, ctx),
                format_money(eval.remaining_amount, ctx),
                format_percentage(eval.utilization_f64()),
                format_bar(eval.utilization_f64(), 100.0, 10),
                format_status(eval.status, ctx.use_color)
            ));
        }

        output.push_str(&separator(96));
        output.push('\n');
        output.push_str(&format!(
            "{} envelope(s), {} at warning or above, {} exceeded\n",
            self.rows.len(),
            self.count_at_least(BudgetStatus::Warning),
            self.count_at_least(BudgetStatus::Exceeded)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetLensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record([
            "Category",
            "Month",
            "Max Amount",
            "Spent Amount",
            "Remaining Amount",
            "Utilization Percent",
            "Status",
        ])?;

        for row in &self.rows {
            let eval = &row.evaluation;
            csv.write_record([
                row.envelope.category.clone(),
                row.envelope.month.to_string(),
                row.envelope.max_amount.amount().to_string(),
                eval.spent_amount.amount().to_string(),
                eval.remaining_amount.amount().to_string(),
                eval.utilization_percent.round_dp(2).normalize().to_string(),
                eval.status.to_string(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthKey};
    use chrono::NaiveDate;

    fn envelopes() -> Vec<BudgetEnvelope> {
        let march = MonthKey::new(2024, 3).unwrap();
        vec![
            BudgetEnvelope::new("Loisirs", march, Money::from_units(100))
                .with_reported_spent(Money::from_units(100)),
            BudgetEnvelope::new("Courses", march, Money::from_units(300))
                .with_reported_spent(Money::from_units(120)),
        ]
    }

    #[test]
    fn test_generate_from_reported() {
        let report = BudgetStatusReport::generate(&envelopes(), None);
        assert!(!report.computed_from_records);
        assert_eq!(report.rows[0].envelope.category, "Courses");
        assert_eq!(report.rows[0].evaluation.status, BudgetStatus::Healthy);
        assert_eq!(report.rows[1].evaluation.status, BudgetStatus::Exceeded);
        assert_eq!(report.count_at_least(BudgetStatus::Warning), 1);
    }

    #[test]
    fn test_generate_from_records() {
        let records = vec![TransactionRecord::new(Money::from_units(-250), Some("depense"))
            .with_category("Courses")
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())];

        let report = BudgetStatusReport::generate(&envelopes(), Some(&records));
        assert!(report.computed_from_records);
        assert_eq!(report.rows[0].evaluation.spent_amount, Money::from_units(250));
        assert_eq!(report.rows[0].evaluation.status, BudgetStatus::Warning);
        assert_eq!(report.rows[1].evaluation.spent_amount, Money::zero());
    }

    #[test]
    fn test_format_terminal() {
        let ctx = DisplayContext {
            use_color: false,
            ..DisplayContext::default()
        };
        let out = BudgetStatusReport::generate(&envelopes(), None).format_terminal(&ctx);
        assert!(out.contains("Courses"));
        assert!(out.contains("€300.00"));
        assert!(out.contains("exceeded"));
        assert!(out.contains("2 envelope(s), 1 at warning or above, 1 exceeded"));
    }

    #[test]
    fn test_format_terminal_empty() {
        let out = BudgetStatusReport::generate(&[], None).format_terminal(&DisplayContext::default());
        assert!(out.contains("No budgets found."));
    }

    #[test]
    fn test_export_csv() {
        let report = BudgetStatusReport::generate(&envelopes(), None);
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Category,Month"));
        assert_eq!(lines[1], "Courses,2024-03,300,120,180,40,healthy");
        assert_eq!(lines[2], "Loisirs,2024-03,100,100,0,100,exceeded");
    }
}
