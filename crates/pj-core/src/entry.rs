//! Journal entries: the sole persisted entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::types::EntryId;

/// One recorded activity.
///
/// Field names serialize in camelCase so the persisted blob keeps the layout
/// `id, no, category, activityDetails, activityStart, activityEnd,
/// hoursSpent, activityOwner, createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Unique identifier, assigned at creation.
    pub id: EntryId,

    /// 1-based position in the stored collection. Reassigned on deletion.
    pub no: usize,

    pub category: Category,

    /// Free-text description.
    pub activity_details: String,

    pub activity_start: NaiveDate,

    pub activity_end: NaiveDate,

    pub hours_spent: f64,

    pub activity_owner: String,

    /// Audit timestamp. Never used for ordering.
    #[serde(with = "millis_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Builds a stored entry from caller-supplied fields and store-assigned identity.
    pub fn from_new(id: EntryId, no: usize, fields: NewEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            no,
            category: fields.category,
            activity_details: fields.activity_details,
            activity_start: fields.activity_start,
            activity_end: fields.activity_end,
            hours_spent: fields.hours_spent,
            activity_owner: fields.activity_owner,
            created_at,
        }
    }
}

/// The fields a caller supplies when creating an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub category: Category,
    pub activity_details: String,
    pub activity_start: NaiveDate,
    pub activity_end: NaiveDate,
    pub hours_spent: f64,
    pub activity_owner: String,
}

/// A partial set of mutable fields. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryUpdate {
    pub category: Option<Category>,
    pub activity_details: Option<String>,
    pub activity_start: Option<NaiveDate>,
    pub activity_end: Option<NaiveDate>,
    pub hours_spent: Option<f64>,
    pub activity_owner: Option<String>,
}

impl EntryUpdate {
    /// Returns true when no field is set.
    pub const fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.activity_details.is_none()
            && self.activity_start.is_none()
            && self.activity_end.is_none()
            && self.hours_spent.is_none()
            && self.activity_owner.is_none()
    }

    /// Merges the provided fields into `entry`. Identity fields are untouched.
    pub fn apply_to(&self, entry: &mut JournalEntry) {
        if let Some(category) = self.category {
            entry.category = category;
        }
        if let Some(details) = &self.activity_details {
            entry.activity_details.clone_from(details);
        }
        if let Some(start) = self.activity_start {
            entry.activity_start = start;
        }
        if let Some(end) = self.activity_end {
            entry.activity_end = end;
        }
        if let Some(hours) = self.hours_spent {
            entry.hours_spent = hours;
        }
        if let Some(owner) = &self.activity_owner {
            entry.activity_owner.clone_from(owner);
        }
    }
}

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix.
mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
