//! Export command for writing entries to a CSV file.
//!
//! The file is named `performance-journal-YYYY-MM-DD.csv` after the UTC date of
//! the export and contains the entries matching the given filters.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use pj_core::csv::{export_file_name_now, to_csv};
use pj_core::{JournalEntry, filter_entries};

use super::util::{FilterArgs, open_store};
use crate::Config;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Directory to write the file to (defaults to the configured export dir).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Writes `entries` as CSV to `dir/file_name`, creating `dir` if needed.
pub fn write_export(dir: &Path, file_name: &str, entries: &[JournalEntry]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(file_name);
    std::fs::write(&path, to_csv(entries))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

pub fn run<W: Write>(writer: &mut W, args: &ExportArgs, config: &Config) -> Result<()> {
    let filter = args.filter.to_filter()?;
    let store = open_store(config)?;
    let entries = filter_entries(&store.load(), &filter);

    let dir = args.output_dir.as_deref().unwrap_or(&config.export_dir);
    let path = write_export(dir, &export_file_name_now(), &entries)?;
    tracing::debug!(path = %path.display(), rows = entries.len(), "wrote csv export");

    let noun = if entries.len() == 1 { "entry" } else { "entries" };
    writeln!(
        writer,
        "Exported {} {noun} to {}",
        entries.len(),
        path.display()
    )?;
    Ok(())
}
