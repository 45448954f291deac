//! Update command for editing an existing entry.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::Args;

use pj_core::validate::validate_entry;
use pj_core::{Category, EntryUpdate};

use super::util::{open_store, resolve_entry};
use crate::Config;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Entry ID or a unique prefix of it.
    pub id: String,

    /// New category.
    #[arg(long)]
    pub category: Option<Category>,

    /// New description.
    #[arg(long)]
    pub details: Option<String>,

    /// New first day (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// New last day (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// New hours spent.
    #[arg(long)]
    pub hours: Option<f64>,

    /// New owner.
    #[arg(long)]
    pub owner: Option<String>,
}

impl UpdateArgs {
    fn changes(&self) -> EntryUpdate {
        EntryUpdate {
            category: self.category,
            activity_details: self.details.clone(),
            activity_start: self.start,
            activity_end: self.end,
            hours_spent: self.hours,
            activity_owner: self.owner.clone(),
        }
    }
}

pub fn run<W: Write>(writer: &mut W, args: &UpdateArgs, config: &Config) -> Result<()> {
    let changes = args.changes();
    if changes.is_empty() {
        bail!("nothing to update; pass at least one field to change");
    }

    let mut store = open_store(config)?;
    let entries = store.load();
    let mut merged = resolve_entry(&entries, &args.id)?.clone();
    changes.apply_to(&mut merged);
    validate_entry(&merged)?;

    store.update(&merged.id, &changes);
    writeln!(writer, "Updated entry #{} ({})", merged.no, merged.id)?;
    Ok(())
}
