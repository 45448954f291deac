//! Field-level rules applied by callers before writing to the store.
//!
//! The store itself accepts whatever it is given; these checks belong to the
//! entry form (the CLI), which runs them before `add` or `update`.

use chrono::NaiveDate;

use crate::entry::{JournalEntry, NewEntry};
use crate::types::{MAX_DETAILS_CHARS, MIN_HOURS, ValidationError};

/// Validates the fields of a new entry.
pub fn validate_new_entry(fields: &NewEntry) -> Result<(), ValidationError> {
    check_details(&fields.activity_details)?;
    check_hours(fields.hours_spent)?;
    check_owner(&fields.activity_owner)?;
    check_dates(fields.activity_start, fields.activity_end)
}

/// Validates an entry as it would look after an update is merged.
pub fn validate_entry(entry: &JournalEntry) -> Result<(), ValidationError> {
    check_details(&entry.activity_details)?;
    check_hours(entry.hours_spent)?;
    check_owner(&entry.activity_owner)?;
    check_dates(entry.activity_start, entry.activity_end)
}

/// Details length is counted in Unicode scalar values, so an emoji counts as
/// one character even where a UTF-16 based form would count it as two.
fn check_details(details: &str) -> Result<(), ValidationError> {
    if details.is_empty() {
        return Err(ValidationError::Empty {
            field: "activity details",
        });
    }
    let len = details.chars().count();
    if len > MAX_DETAILS_CHARS {
        return Err(ValidationError::TooLong {
            field: "activity details",
            max: MAX_DETAILS_CHARS,
            len,
        });
    }
    Ok(())
}

fn check_hours(hours: f64) -> Result<(), ValidationError> {
    // Rejects NaN and infinities as well
    if hours.is_finite() && hours >= MIN_HOURS {
        Ok(())
    } else {
        Err(ValidationError::HoursTooSmall { value: hours })
    }
}

fn check_owner(owner: &str) -> Result<(), ValidationError> {
    if owner.is_empty() {
        return Err(ValidationError::Empty {
            field: "activity owner",
        });
    }
    Ok(())
}

fn check_dates(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::EndBeforeStart { start, end });
    }
    Ok(())
}
