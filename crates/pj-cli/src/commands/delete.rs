//! Delete command for removing an entry.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use super::util::{open_store, resolve_entry};
use crate::Config;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Entry ID or a unique prefix of it.
    pub id: String,
}

pub fn run<W: Write>(writer: &mut W, args: &DeleteArgs, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;
    let entries = store.load();
    let entry = resolve_entry(&entries, &args.id)?;

    store.delete(&entry.id);
    let remaining = store.load().len();
    let noun = if remaining == 1 { "entry" } else { "entries" };
    writeln!(
        writer,
        "Deleted entry #{} ({}). {remaining} {noun} remaining.",
        entry.no, entry.id
    )?;
    Ok(())
}
