//! Per-category rollups and grand totals.

use serde::Serialize;

use crate::category::Category;
use crate::entry::JournalEntry;

/// Count and hours for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    pub hours: f64,
}

impl CategorySummary {
    /// Fraction of `total_hours` spent in this category. Zero when the total is zero.
    pub fn share_of(&self, total_hours: f64) -> f64 {
        if total_hours > 0.0 {
            self.hours / total_hours
        } else {
            0.0
        }
    }
}

/// Aggregates across the full entry collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// One row per category in canonical order, including empty categories.
    pub per_category: Vec<CategorySummary>,
    pub total_hours: f64,
    pub total_count: usize,
}

/// Computes per-category counts and hours plus totals.
///
/// Hours are summed without rounding; rounding is left to presentation.
pub fn summarize(entries: &[JournalEntry]) -> Summary {
    let per_category: Vec<CategorySummary> = Category::ALL
        .into_iter()
        .map(|category| {
            let (count, hours) = entries
                .iter()
                .filter(|entry| entry.category == category)
                .fold((0, 0.0), |(count, hours), entry| {
                    (count + 1, hours + entry.hours_spent)
                });
            CategorySummary {
                category,
                count,
                hours,
            }
        })
        .collect();

    let total_hours = per_category.iter().map(|s| s.hours).sum();
    let total_count = per_category.iter().map(|s| s.count).sum();

    Summary {
        per_category,
        total_hours,
        total_count,
    }
}
