//! Add command for recording a new activity.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use pj_core::validate::validate_new_entry;
use pj_core::{Category, NewEntry};

use super::util::open_store;
use crate::Config;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Category, by label ("Firm Building") or slug (firm-building).
    #[arg(long)]
    pub category: Category,

    /// What was done (1 to 500 characters).
    #[arg(long)]
    pub details: String,

    /// First day of the activity (YYYY-MM-DD).
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the activity (YYYY-MM-DD).
    #[arg(long)]
    pub end: NaiveDate,

    /// Hours spent (at least 0.1).
    #[arg(long)]
    pub hours: f64,

    /// Who did the activity.
    #[arg(long)]
    pub owner: String,
}

impl AddArgs {
    fn to_new_entry(&self) -> NewEntry {
        NewEntry {
            category: self.category,
            activity_details: self.details.clone(),
            activity_start: self.start,
            activity_end: self.end,
            hours_spent: self.hours,
            activity_owner: self.owner.clone(),
        }
    }
}

pub fn run<W: Write>(writer: &mut W, args: &AddArgs, config: &Config) -> Result<()> {
    let fields = args.to_new_entry();
    validate_new_entry(&fields)?;

    let mut store = open_store(config)?;
    let entry = store.add(fields);
    writeln!(writer, "Added entry #{} ({})", entry.no, entry.id)?;
    Ok(())
}
