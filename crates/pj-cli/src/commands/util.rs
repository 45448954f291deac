//! Shared utilities for CLI commands.

use anyhow::{Context, Result, bail};
use clap::Args;

use pj_core::{Category, EntryFilter, JournalEntry};
use pj_db::{EntryStore, SqliteStore};

use crate::Config;

/// Number of ID characters shown in listings.
pub const SHORT_ID_LEN: usize = 8;

/// Opens the entry store, ensuring the database directory exists.
pub fn open_store(config: &Config) -> Result<EntryStore<SqliteStore>> {
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }
    let storage = SqliteStore::open(&config.database_path)
        .with_context(|| format!("failed to open {}", config.database_path.display()))?;
    Ok(EntryStore::new(storage))
}

/// Search, category and owner options shared by `list` and `export`.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Only entries whose details contain this text (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only entries in this category ("all" for every category).
    #[arg(long)]
    pub category: Option<String>,

    /// Only entries owned by this person ("all" for everyone).
    #[arg(long)]
    pub owner: Option<String>,
}

impl FilterArgs {
    /// Converts the options into a filter, treating "all" as no restriction.
    pub fn to_filter(&self) -> Result<EntryFilter> {
        let category = match self.category.as_deref() {
            None | Some("all") => None,
            Some(value) => Some(value.parse::<Category>()?),
        };
        let owner = match self.owner.as_deref() {
            None | Some("all") => None,
            Some(value) => Some(value.to_string()),
        };

        Ok(EntryFilter {
            search: self.search.clone().unwrap_or_default(),
            category,
            owner,
        })
    }
}

/// Finds an entry by full ID or unique ID prefix.
pub fn resolve_entry<'a>(entries: &'a [JournalEntry], input: &str) -> Result<&'a JournalEntry> {
    if let Some(entry) = entries.iter().find(|entry| entry.id.as_str() == input) {
        return Ok(entry);
    }
    if input.is_empty() {
        bail!("entry not found: {input}");
    }

    let mut matches = entries
        .iter()
        .filter(|entry| entry.id.as_str().starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry),
        (Some(_), Some(_)) => bail!("ambiguous entry ID prefix: {input}"),
        (None, _) => bail!("entry not found: {input}"),
    }
}

/// Returns the leading characters of an ID for display.
pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

/// Truncates by characters, not bytes, appending "..." when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let keep = max_chars.saturating_sub(3);
        format!("{}...", text.chars().take(keep).collect::<String>())
    } else {
        text.to_string()
    }
}
