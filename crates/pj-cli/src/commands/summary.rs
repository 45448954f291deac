//! Summary command for per-category rollups.
//!
//! Always summarizes the full journal; filters only narrow `list` and `export`.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use clap::Args;

use pj_core::{Summary, summarize};

use super::util::open_store;
use crate::Config;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Generates a 10-character bar for a share in \[0.0, 1.0\].
/// Non-zero shares below 5% get a single block for visibility.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_bar(share: f64) -> String {
    let filled = if share <= 0.0 || share.is_nan() {
        0
    } else if share < 0.05 {
        1
    } else {
        (share * 10.0).round().min(10.0) as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Formats a summary for human-readable output.
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();

    writeln!(output, "SUMMARY").unwrap();
    writeln!(output, "───────").unwrap();
    writeln!(output, "Total activities: {}", summary.total_count).unwrap();
    writeln!(output, "Total hours:      {:.1}", summary.total_hours).unwrap();

    writeln!(output).unwrap();
    writeln!(output, "BY CATEGORY").unwrap();
    writeln!(output, "───────────").unwrap();
    for row in &summary.per_category {
        let noun = if row.count == 1 { "activity" } else { "activities" };
        let activities = format!("{} {noun}", row.count);
        let hours = format!("{:.1}h", row.hours);
        let bar = progress_bar(row.share_of(summary.total_hours));
        writeln!(
            output,
            "{:<22}{activities:<15}{hours:>7}  {bar}",
            row.category.label()
        )
        .unwrap();
    }

    output
}

/// Runs the summary command.
pub fn run<W: Write>(writer: &mut W, args: &SummaryArgs, config: &Config) -> Result<()> {
    let store = open_store(config)?;
    let summary = summarize(&store.load());

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(writer, "{}", format_summary(&summary))?;
    }

    Ok(())
}
