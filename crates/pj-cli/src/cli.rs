//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{add, delete, export, list, summary, update};

/// Performance journal.
///
/// Records categorized, time-tracked activities and summarizes where the
/// hours went.
#[derive(Debug, Parser)]
#[command(name = "pj", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a new activity.
    Add(add::AddArgs),

    /// List entries, optionally filtered.
    List(list::ListArgs),

    /// Change fields of an existing entry.
    Update(update::UpdateArgs),

    /// Remove an entry and renumber the rest.
    Delete(delete::DeleteArgs),

    /// Show activity counts and hours per category.
    Summary(summary::SummaryArgs),

    /// List the distinct activity owners.
    Owners,

    /// Write entries to a CSV file.
    Export(export::ExportArgs),
}
