//! CLI commands for budget envelopes

use std::path::PathBuf;

use clap::Args;

use super::create_export;
use crate::config::Settings;
use crate::display::{format_money, format_percentage, format_status};
use crate::error::{BudgetLensError, BudgetLensResult};
use crate::models::{BudgetEnvelope, MonthKey};
use crate::reports::BudgetStatusReport;
use crate::services::{evaluate_budget, matching_expense_sum};
use crate::storage::{load_envelopes, load_transactions};

/// Arguments for `budgets`
#[derive(Args, Debug)]
pub struct BudgetsArgs {
    /// Budgets JSON export
    #[arg(short, long)]
    pub budgets: PathBuf,

    /// Transactions JSON export; spending is recomputed from it when given
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Only envelopes of this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `envelope`
#[derive(Args, Debug)]
pub struct EnvelopeArgs {
    /// Category name
    pub category: String,

    /// Budget month (YYYY-MM)
    pub period: String,

    /// Maximum amount
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Transactions JSON export to evaluate the envelope against
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Handle `budgets`
pub fn handle_budgets_command(settings: &Settings, args: BudgetsArgs) -> BudgetLensResult<()> {
    let mut envelopes = load_envelopes(&args.budgets)?;

    if let Some(month) = &args.month {
        let month =
            MonthKey::parse(month).map_err(|e| BudgetLensError::Validation(e.to_string()))?;
        envelopes.retain(|e| e.month == month);
        if envelopes.is_empty() {
            return Err(BudgetLensError::envelope_not_found(month.to_string()));
        }
    }

    let records = args.file.as_deref().map(load_transactions).transpose()?;
    let report = BudgetStatusReport::generate(&envelopes, records.as_deref());

    if let Some(path) = args.output {
        let mut writer = create_export(&path)?;
        report.export_csv(&mut writer)?;
        println!("Budget report exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.display_context()));
    }

    Ok(())
}

/// Handle `envelope`: validate form input and optionally evaluate it
pub fn handle_envelope_command(settings: &Settings, args: EnvelopeArgs) -> BudgetLensResult<()> {
    let envelope = BudgetEnvelope::from_form(&args.category, &args.period, &args.amount)?;
    let ctx = settings.display_context();

    println!(
        "Envelope '{}' for {}: {}",
        envelope.category,
        envelope.month,
        format_money(envelope.max_amount, &ctx)
    );

    if let Some(file) = args.file {
        let records = load_transactions(file)?;
        let spent = matching_expense_sum(&envelope, &records);
        let eval = evaluate_budget(&envelope, spent);

        println!("  Spent:     {}", format_money(eval.spent_amount, &ctx));
        println!("  Remaining: {}", format_money(eval.remaining_amount, &ctx));
        println!(
            "  Used:      {} ({})",
            format_percentage(eval.utilization_f64()),
            format_status(eval.status, ctx.use_color)
        );
    }

    Ok(())
}
