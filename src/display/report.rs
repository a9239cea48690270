//! Report formatting utilities for terminal output

use crate::services::BudgetStatus;

/// Format a percentage with precision that shrinks as the value grows
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Utilization bar; values past the maximum fill the whole bar
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 || !value.is_finite() {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Status label, coloured by severity when `use_color` is set
pub fn format_status(status: BudgetStatus, use_color: bool) -> String {
    if !use_color {
        return status.to_string();
    }

    let code = match status {
        BudgetStatus::Healthy => "32",
        BudgetStatus::Moderate => "36",
        BudgetStatus::Warning => "33",
        BudgetStatus::Exceeded => "31",
    };
    format!("\x1b[{}m{}\x1b[0m", code, status)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
