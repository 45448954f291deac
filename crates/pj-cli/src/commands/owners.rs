//! Owners command listing everyone who has recorded an activity.

use std::io::Write;

use anyhow::Result;

use pj_core::distinct_owners;

use super::util::open_store;
use crate::Config;

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    let store = open_store(config)?;
    for owner in distinct_owners(&store.load()) {
        writeln!(writer, "{owner}")?;
    }
    Ok(())
}
