//! List command for showing entries with search and filters.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use clap::Args;

use pj_core::{JournalEntry, filter_entries};

use super::util::{FilterArgs, open_store, short_id, truncate};
use crate::Config;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Formats entries as a table for human-readable output.
pub fn format_entries(entries: &[JournalEntry], filtered: bool) -> String {
    let mut output = String::new();

    if entries.is_empty() {
        if filtered {
            writeln!(output, "No entries match the current filters.").unwrap();
        } else {
            writeln!(output, "No entries recorded.").unwrap();
            writeln!(output).unwrap();
            writeln!(output, "Hint: Run 'pj add --help' to record an activity.").unwrap();
        }
        return output;
    }

    // Header
    writeln!(
        output,
        "{:>3}  {:<8}  {:<20}  {:<10}  {:<10}  {:>5}  {:<14}  Details",
        "No", "ID", "Category", "Start", "End", "Hours", "Owner"
    )
    .unwrap();
    writeln!(
        output,
        "───  ────────  ────────────────────  ──────────  ──────────  ─────  ──────────────  ──────────────────"
    )
    .unwrap();

    // Rows
    for entry in entries {
        let details = entry.activity_details.replace('\n', " ");
        writeln!(
            output,
            "{:>3}  {:<8}  {:<20}  {}  {}  {:>5.1}  {:<14}  {}",
            entry.no,
            short_id(entry.id.as_str()),
            entry.category.label(),
            entry.activity_start.format("%Y-%m-%d"),
            entry.activity_end.format("%Y-%m-%d"),
            entry.hours_spent,
            truncate(&entry.activity_owner, 14),
            truncate(&details, 40),
        )
        .unwrap();
    }

    let total_hours: f64 = entries.iter().map(|e| e.hours_spent).sum();
    let noun = if entries.len() == 1 { "entry" } else { "entries" };
    writeln!(output).unwrap();
    writeln!(output, "{} {noun}, {total_hours:.1}h", entries.len()).unwrap();

    output
}

/// Runs the list command.
pub fn run<W: Write>(writer: &mut W, args: &ListArgs, config: &Config) -> Result<()> {
    let filter = args.filter.to_filter()?;
    let store = open_store(config)?;
    let entries = filter_entries(&store.load(), &filter);

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        write!(writer, "{}", format_entries(&entries, filter.is_active()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, Utc};
    use insta::assert_snapshot;
    use pj_core::{Category, EntryId, NewEntry};

    use super::*;

    fn entry(
        no: usize,
        id: &str,
        category: Category,
        details: &str,
        hours: f64,
        owner: &str,
    ) -> JournalEntry {
        JournalEntry {
            id: EntryId::new(id).unwrap(),
            no,
            category,
            activity_details: details.to_string(),
            activity_start: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            activity_end: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
            hours_spent: hours,
            activity_owner: owner.to_string(),
            created_at: DateTime::parse_from_rfc3339("2025-01-07T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn format_entries_table() {
        let entries = vec![
            entry(
                1,
                "0a1b2c3d-0000-4000-8000-000000000001",
                Category::FirmBuilding,
                "Budget review",
                2.5,
                "Amy",
            ),
            entry(
                2,
                "9f8e7d6c-0000-4000-8000-000000000002",
                Category::PersonalDevelopment,
                "Training on negotiation\nand facilitation skills for leads",
                1.0,
                "Benedict Cumberbatch",
            ),
        ];

        let output = format_entries(&entries, false);
        assert_snapshot!(output, @r"
         No  ID        Category              Start       End         Hours  Owner           Details
        ───  ────────  ────────────────────  ──────────  ──────────  ─────  ──────────────  ──────────────────
          1  0a1b2c3d  Firm Building         2025-01-06  2025-01-07    2.5  Amy             Budget review
          2  9f8e7d6c  Personal Development  2025-01-06  2025-01-07    1.0  Benedict Cu...  Training on negotiation and facilitat...

        2 entries, 3.5h
        ");
    }

    #[test]
    fn format_entries_empty_journal() {
        let output = format_entries(&[], false);
        assert_snapshot!(output, @r"
        No entries recorded.

        Hint: Run 'pj add --help' to record an activity.
        ");
    }

    #[test]
    fn format_entries_empty_filtered_view() {
        let output = format_entries(&[], true);
        assert_eq!(output, "No entries match the current filters.\n");
    }

    #[test]
    fn run_applies_filters_and_emits_json() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            database_path: temp.path().join("journal.db"),
            export_dir: temp.path().to_path_buf(),
        };
        let mut store = open_store(&config).unwrap();
        for (details, category, owner) in [
            ("Budget review", Category::FirmBuilding, "Amy"),
            ("Training", Category::PersonalDevelopment, "Ben"),
            ("Quarterly review", Category::PersonalDevelopment, "Ben"),
        ] {
            store.add(NewEntry {
                category,
                activity_details: details.to_string(),
                activity_start: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
                activity_end: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
                hours_spent: 1.0,
                activity_owner: owner.to_string(),
            });
        }

        let args = ListArgs {
            filter: FilterArgs {
                search: Some("REVIEW".to_string()),
                category: Some("personal-development".to_string()),
                owner: Some("all".to_string()),
            },
            json: true,
        };
        let mut output = Vec::new();
        run(&mut output, &args, &config).unwrap();

        let parsed: Vec<JournalEntry> = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].activity_details, "Quarterly review");
        assert_eq!(parsed[0].no, 3);
    }
}
