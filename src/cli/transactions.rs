//! CLI commands over transaction exports
//!
//! Listing, totals, the monthly chart and the dashboard. Every command reads
//! a JSON export, applies the shared filter flags, then hands the remaining
//! records to the computation layer.

use std::path::{Path, PathBuf};

use clap::Args;

use super::{create_export, FilterArgs};
use crate::config::Settings;
use crate::display::format_record_table;
use crate::error::BudgetLensResult;
use crate::models::TransactionRecord;
use crate::reports::{format_totals, DashboardReport, MonthlyReport};
use crate::services::compute_totals;
use crate::storage::{load_envelopes, load_transactions};

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Transactions JSON export
    #[arg(short, long)]
    pub file: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Number of transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for `totals`
#[derive(Args, Debug)]
pub struct TotalsArgs {
    /// Transactions JSON export
    #[arg(short, long)]
    pub file: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for `monthly`
#[derive(Args, Debug)]
pub struct MonthlyArgs {
    /// Transactions JSON export
    #[arg(short, long)]
    pub file: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Number of months to keep (defaults to the chart_months setting)
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `dashboard`
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Transactions JSON export
    #[arg(short, long)]
    pub file: PathBuf,

    /// Budgets JSON export
    #[arg(short, long)]
    pub budgets: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Load an export and keep the records matching the filter flags
fn load_filtered(file: &Path, filter: &FilterArgs) -> BudgetLensResult<Vec<TransactionRecord>> {
    let filter = filter.to_filter()?;
    let records = load_transactions(file)?;

    if filter.is_empty() {
        return Ok(records);
    }

    let kept = filter.apply(&records);
    tracing::debug!(total = records.len(), kept = kept.len(), "applied record filter");
    Ok(kept)
}

/// Handle `list`
pub fn handle_list_command(settings: &Settings, args: ListArgs) -> BudgetLensResult<()> {
    let mut records = load_filtered(&args.file, &args.filter)?;
    let total = records.len();
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    print!("{}", format_record_table(&records, &settings.display_context()));
    if records.len() < total {
        println!("Showing {} of {} transactions", records.len(), total);
    }

    Ok(())
}

/// Handle `totals`
pub fn handle_totals_command(settings: &Settings, args: TotalsArgs) -> BudgetLensResult<()> {
    let records = load_filtered(&args.file, &args.filter)?;
    let totals = compute_totals(&records);

    print!("{}", format_totals(&totals, &settings.display_context()));

    Ok(())
}

/// Handle `monthly`
pub fn handle_monthly_command(settings: &Settings, args: MonthlyArgs) -> BudgetLensResult<()> {
    let records = load_filtered(&args.file, &args.filter)?;
    let window = args.window.unwrap_or(settings.chart_months);
    let report = MonthlyReport::generate(&records, window);

    if let Some(path) = args.output {
        let mut writer = create_export(&path)?;
        report.export_csv(&mut writer)?;
        println!("Monthly report exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.display_context()));
    }

    Ok(())
}

/// Handle `dashboard`
pub fn handle_dashboard_command(settings: &Settings, args: DashboardArgs) -> BudgetLensResult<()> {
    let records = load_filtered(&args.file, &args.filter)?;
    let envelopes = args.budgets.as_deref().map(load_envelopes).transpose()?;

    let report = DashboardReport::generate(&records, envelopes.as_deref(), settings.chart_months);

    if let Some(path) = args.output {
        let mut writer = create_export(&path)?;
        report.export_csv(&mut writer)?;
        println!("Dashboard exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.display_context()));
    }

    Ok(())
}
