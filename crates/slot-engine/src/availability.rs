//! Rule selection -- pick the working-hour windows that apply to one date.
//!
//! Date-specific rules override weekly rules outright: when any rule names
//! the target date, the weekly set for that weekday is ignored entirely,
//! never merged.

use chrono::{Datelike, NaiveDate};

use crate::rule::AvailabilityRule;

/// Select the rules applying to `staff_id` on `date`.
///
/// Rules are partitioned into date-specific (parsed `date` equals the
/// target) and weekly (`day_of_week` equals the target's days-from-Sunday
/// index, no `date` set). If any date-specific rule matches, only those are
/// returned. A rule whose `date` fails to parse is skipped as a non-fatal
/// data-quality defect.
///
/// An empty result means "no working hours that day".
pub fn rules_for_date<'a>(
    rules: &'a [AvailabilityRule],
    staff_id: &str,
    date: NaiveDate,
) -> Vec<&'a AvailabilityRule> {
    let staff_rules = rules.iter().filter(|rule| rule.staff_id == staff_id);

    let mut date_specific: Vec<&AvailabilityRule> = Vec::new();
    let mut weekly: Vec<&AvailabilityRule> = Vec::new();

    let weekday = date.weekday().num_days_from_sunday() as u8;

    for rule in staff_rules {
        if rule.date.is_some() {
            if rule.parsed_date() == Some(date) {
                date_specific.push(rule);
            }
        } else if rule.day_of_week == Some(weekday) {
            weekly.push(rule);
        }
    }

    let selected = if date_specific.is_empty() {
        weekly
    } else {
        date_specific
    };

    tracing::debug!(
        staff = staff_id,
        %date,
        windows = selected.len(),
        "resolved working-hour windows"
    );
    selected
}
