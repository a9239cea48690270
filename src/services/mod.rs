//! Computation layer for budgetlens
//!
//! Pure functions over normalized records: classification, date
//! normalization, filtering, monthly aggregation, totals and budget
//! evaluation. None of them fail or keep state between calls.

pub mod aggregate;
pub mod budget;
pub mod classifier;
pub mod dates;
pub mod filter;
pub mod normalize;
pub mod totals;

pub use aggregate::{
    aggregate_by_month, aggregate_by_month_window, running_balance, MonthlyBucket,
    DEFAULT_MONTH_WINDOW,
};
pub use budget::{
    evaluate_budget, evaluate_envelopes, matching_expense_sum, utilization_percent,
    BudgetEvaluation, BudgetStatus, EnvelopeEvaluation, SpentSource,
};
pub use classifier::{classify, classify_parts};
pub use dates::{parse_date_str, parse_record_date};
pub use filter::RecordFilter;
pub use normalize::{normalize_envelope, normalize_record, normalize_records};
pub use totals::{compute_totals, Totals};
