//! Filtered views and owner facets over an entry collection.

use std::collections::BTreeSet;

use crate::category::Category;
use crate::entry::JournalEntry;

/// Predicates narrowing the entry list. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-insensitive substring matched against activity details.
    pub search: String,
    pub category: Option<Category>,
    /// Exact match against the activity owner.
    pub owner: Option<String>,
}

impl EntryFilter {
    /// Returns true when any predicate narrows the view.
    pub const fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || self.owner.is_some()
    }

    /// Returns true when the entry satisfies every predicate.
    pub fn matches(&self, entry: &JournalEntry) -> bool {
        self.matches_search(entry) && self.matches_category(entry) && self.matches_owner(entry)
    }

    fn matches_search(&self, entry: &JournalEntry) -> bool {
        self.search.is_empty()
            || entry
                .activity_details
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    fn matches_category(&self, entry: &JournalEntry) -> bool {
        self.category.is_none_or(|category| entry.category == category)
    }

    fn matches_owner(&self, entry: &JournalEntry) -> bool {
        self.owner
            .as_deref()
            .is_none_or(|owner| entry.activity_owner == owner)
    }
}

/// Returns the entries matching `filter`, preserving input order.
pub fn filter_entries(entries: &[JournalEntry], filter: &EntryFilter) -> Vec<JournalEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .cloned()
        .collect()
}

/// Returns the distinct owners present in `entries`.
///
/// Sorted by ordinal byte comparison, so uppercase names sort before
/// lowercase ones (`"Ben"` < `"amy"`).
pub fn distinct_owners(entries: &[JournalEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.activity_owner.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
