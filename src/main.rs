use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budgetlens::cli::{
    handle_budgets_command, handle_classify_command, handle_dashboard_command,
    handle_envelope_command, handle_guard_command, handle_list_command, handle_monthly_command,
    handle_totals_command, BudgetsArgs, ClassifyArgs, DashboardArgs, EnvelopeArgs, GuardArgs,
    ListArgs, MonthlyArgs, TotalsArgs,
};
use budgetlens::config::{BudgetLensPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budgetlens",
    version,
    about = "Transaction classification and budget analytics",
    long_about = "budgetlens reads JSON exports of transactions and budget envelopes, \
                  classifies each transaction, and reports totals, monthly trends \
                  and budget utilization."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List classified transactions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Income, expense and contribution totals with the balance
    Totals(TotalsArgs),

    /// Per-month sums for the most recent months
    Monthly(MonthlyArgs),

    /// Budget envelope utilization
    Budgets(BudgetsArgs),

    /// Validate a new budget envelope
    Envelope(EnvelopeArgs),

    /// Totals, monthly chart and budgets together
    Dashboard(DashboardArgs),

    /// Classify a single type hint and amount
    Classify(ClassifyArgs),

    /// Ask the route guard what to do with a request
    Guard(GuardArgs),

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .init();

    let paths = BudgetLensPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::List(args)) => handle_list_command(&settings, args)?,
        Some(Commands::Totals(args)) => handle_totals_command(&settings, args)?,
        Some(Commands::Monthly(args)) => handle_monthly_command(&settings, args)?,
        Some(Commands::Budgets(args)) => handle_budgets_command(&settings, args)?,
        Some(Commands::Envelope(args)) => handle_envelope_command(&settings, args)?,
        Some(Commands::Dashboard(args)) => handle_dashboard_command(&settings, args)?,
        Some(Commands::Classify(args)) => handle_classify_command(args)?,
        Some(Commands::Guard(args)) => handle_guard_command(&settings, args)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("budgetlens Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Locale:            {}", settings.locale);
            println!("  Supported locales: {}", settings.supported_locales.join(", "));
            println!("  Currency:          {}", settings.currency_code);
            println!("  Date format:       {}", settings.date_format);
            println!("  Chart months:      {}", settings.chart_months);
            println!("  Dark mode:         {}", settings.dark_mode);
            println!("  Colour:            {}", settings.color);
            println!(
                "  Current user:      {}",
                settings.current_user.as_deref().unwrap_or("-")
            );
        }
        None => {
            println!("budgetlens - transaction classification and budget analytics");
            println!();
            println!("Run 'budgetlens --help' for usage information.");
        }
    }

    Ok(())
}
