//! Shared utilities for CLI commands

use tabled::{Table, settings::Style};

use crate::view::{FieldName, Page};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Format an optional value for display
pub fn format_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Comma-separated names of every field of a record type
pub fn field_names<F: FieldName>() -> String {
    F::ALL
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "Page 2 of 3 | Showing 11 - 20 of 23"
pub fn page_footer<T>(page: &Page<T>) -> String {
    format!(
        "Page {} of {} | {}",
        page.page,
        page.total_pages,
        page.summary()
    )
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
