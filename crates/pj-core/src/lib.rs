//! Core domain logic for the performance journal.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: the persisted record type and its partial updates
//! - Querying: search/category/owner filtering and the owner facet
//! - Summaries: per-category counts and hours
//! - Export: CSV serialization with minimal quoting

pub mod category;
pub mod csv;
mod entry;
pub mod query;
pub mod summary;
pub mod types;
pub mod validate;

pub use category::{Category, UnknownCategory};
pub use entry::{EntryUpdate, JournalEntry, NewEntry};
pub use query::{EntryFilter, distinct_owners, filter_entries};
pub use summary::{CategorySummary, Summary, summarize};
pub use types::{EntryId, ValidationError};
