//! Display formatting for terminal output
//!
//! Currency symbols, money and percentage formatting, utilization bars and
//! record tables. Everything here takes an explicit [`DisplayContext`]
//! rather than reading settings itself.
//!
//! [`DisplayContext`]: crate::config::DisplayContext

pub mod currency;
pub mod record;
pub mod report;

pub use currency::{currency_symbol, format_money};
pub use record::format_record_table;
pub use report::{format_bar, format_percentage, format_status};
