//! Working-hour rules -- a staff member's declared availability windows.
//!
//! A rule is either weekly-recurring (`day_of_week`, 0 = Sunday) or tied to
//! one calendar date (`date`). Rules are created by staff profile management
//! and read-only here; ingestion validates the invariants the rest of the
//! pipeline relies on.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// One declared working-hour window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRule {
    pub id: String,
    pub staff_id: String,
    /// Weekday index, 0 = Sunday through 6 = Saturday. Mutually exclusive
    /// with `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
    /// Calendar date this rule applies to, either `YYYY-MM-DD` or a full
    /// RFC 3339 instant (profile editors store both spellings). Kept raw;
    /// parsed when a day is resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl AvailabilityRule {
    /// Check the ingestion invariants: exactly one recurrence field, a
    /// weekday index within 0..=6, and a non-empty time window.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidRule` on any violation. A malformed `date`
    /// string is deliberately NOT an error here -- see [`Self::parsed_date`].
    pub fn validate(&self) -> Result<()> {
        match (self.day_of_week, self.date.as_deref()) {
            (Some(_), Some(_)) => {
                return Err(SlotError::InvalidRule(format!(
                    "rule {} sets both dayOfWeek and date",
                    self.id
                )));
            }
            (None, None) => {
                return Err(SlotError::InvalidRule(format!(
                    "rule {} sets neither dayOfWeek nor date",
                    self.id
                )));
            }
            _ => {}
        }
        if let Some(dow) = self.day_of_week {
            if dow > 6 {
                return Err(SlotError::InvalidRule(format!(
                    "rule {} has dayOfWeek {} outside 0..=6",
                    self.id, dow
                )));
            }
        }
        if self.start_time >= self.end_time {
            return Err(SlotError::InvalidRule(format!(
                "rule {} has empty window {}..{}",
                self.id, self.start_time, self.end_time
            )));
        }
        Ok(())
    }

    /// The calendar date a date-specific rule applies to.
    ///
    /// Accepts `YYYY-MM-DD` or a full RFC 3339 instant (reduced to its UTC
    /// calendar date). `None` when the rule is weekly, or when the field is
    /// present but unparseable -- the latter is a data-quality defect, logged
    /// and otherwise treated as if the rule were absent.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        if let Ok(date) = raw.parse::<NaiveDate>() {
            return Some(date);
        }
        if let Ok(instant) = raw.parse::<DateTime<chrono::Utc>>() {
            return Some(instant.date_naive());
        }
        tracing::warn!(rule = %self.id, date = raw, "skipping rule with unparseable date");
        None
    }
}

/// Validate a freshly fetched rule snapshot, rejecting the whole batch on
/// the first violation so enumeration never sees an invalid window.
pub fn validate_rules(rules: &[AvailabilityRule]) -> Result<()> {
    rules.iter().try_for_each(AvailabilityRule::validate)
}
