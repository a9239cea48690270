//! Reports module for budgetlens
//!
//! Terminal and CSV renderings of the dashboard, the monthly chart and
//! budget envelope status.

pub mod budget_status;
pub mod dashboard;
pub mod monthly;

pub use budget_status::BudgetStatusReport;
pub use dashboard::{format_totals, DashboardReport};
pub use monthly::MonthlyReport;
