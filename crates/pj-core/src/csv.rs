//! CSV serialization of entry collections.

use chrono::{NaiveDate, Utc};

use crate::entry::JournalEntry;

/// Header labels, in column order.
pub const CSV_HEADERS: [&str; 7] = [
    "No",
    "Category",
    "Activity Details",
    "Activity Start",
    "Activity End",
    "Hours Spent",
    "Activity Owner",
];

/// Serializes `entries` as comma-separated text.
///
/// The header row is always present. Rows are joined with `\n` and there is
/// no trailing newline.
pub fn to_csv(entries: &[JournalEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for entry in entries {
        let cells = [
            entry.no.to_string(),
            entry.category.to_string(),
            entry.activity_details.clone(),
            format_date(entry.activity_start),
            format_date(entry.activity_end),
            entry.hours_spent.to_string(),
            entry.activity_owner.clone(),
        ];
        let row: Vec<String> = cells.iter().map(|cell| escape_field(cell)).collect();
        lines.push(row.join(","));
    }

    tracing::debug!(rows = entries.len(), "serialized entries to csv");
    lines.join("\n")
}

/// Quotes a field only when it contains a comma, a double quote, or a newline.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Name of the exported file for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("performance-journal-{}.csv", format_date(date))
}

/// Name of the exported file for an export made now, using the UTC calendar date.
pub fn export_file_name_now() -> String {
    export_file_name(Utc::now().date_naive())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
