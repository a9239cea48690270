//! Transaction list display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::currency::format_money;
use super::report::truncate;
use crate::config::DisplayContext;
use crate::models::TransactionRecord;
use crate::services::classify;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl RecordRow {
    fn new(record: &TransactionRecord, ctx: &DisplayContext) -> Self {
        Self {
            date: record
                .date
                .map(|d| d.format(&ctx.date_format).to_string())
                .unwrap_or_else(|| "-".to_string()),
            kind: classify(record).to_string(),
            amount: format_money(record.amount, ctx),
            category: record.category.clone().unwrap_or_default(),
            description: truncate(record.display_label(), 32),
        }
    }
}

/// Render records as a table, one row per record in input order
pub fn format_record_table(records: &[TransactionRecord], ctx: &DisplayContext) -> String {
    if records.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<RecordRow> = records.iter().map(|r| RecordRow::new(r, ctx)).collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!("{}\n", table)
}
