//! CLI commands for one-off checks: classifying a type hint and asking
//! the route guard for a decision.

use clap::Args;

use crate::config::Settings;
use crate::error::{BudgetLensError, BudgetLensResult};
use crate::models::Money;
use crate::routing::{AuthState, Locales, RouteGuard};
use crate::services::classify_parts;

/// Arguments for `classify`
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Backend type string (may be empty)
    pub raw_type: String,

    /// Signed amount
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

/// Arguments for `guard`
#[derive(Args, Debug)]
pub struct GuardArgs {
    /// Requested path, e.g. /fr/transactions
    #[arg(short, long)]
    pub path: String,

    /// Session token; absent or blank means signed out
    #[arg(short, long)]
    pub token: Option<String>,

    /// Session lookup still in progress
    #[arg(long)]
    pub checking: bool,

    /// Print the decision as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle `classify`
pub fn handle_classify_command(args: ClassifyArgs) -> BudgetLensResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| BudgetLensError::Validation(e.to_string()))?;

    let raw_type = Some(args.raw_type.as_str()).filter(|t| !t.is_empty());
    println!("{}", classify_parts(amount, raw_type));

    Ok(())
}

/// Handle `guard`
pub fn handle_guard_command(settings: &Settings, args: GuardArgs) -> BudgetLensResult<()> {
    let guard = RouteGuard::new(Locales::from_settings(settings)?);

    let state = if args.checking {
        AuthState::Checking
    } else {
        AuthState::Checking.resolve(args.token.as_deref())
    };

    let decision = guard.decide(state, &args.path);
    if args.json {
        println!("{}", serde_json::to_string(&decision)?);
    } else {
        println!("{}", decision);
    }

    Ok(())
}
