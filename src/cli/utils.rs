//! Shared formatting for CLI tables

use std::fmt::Display;

use chrono::{DateTime, NaiveDate};
use tabled::{Table, settings::Style};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format an optional highlight list for display
pub fn format_highlights(highlights: Option<&Vec<String>>) -> String {
    match highlights {
        Some(h) if !h.is_empty() => h.join(", "),
        _ => "-".to_string(),
    }
}

/// Render a nullable value, `-` when absent
pub fn format_optional<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// `2025-04-01` or an RFC 3339 timestamp as `01 Apr 2025`; anything else as-is
pub fn format_event_date(date: &str) -> String {
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.format("%d %b %Y").to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(date) {
        return ts.format("%d %b %Y").to_string();
    }
    date.to_string()
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
