//! Rolling week window -- the calendar dates a booking screen offers.

use chrono::{DateTime, Days, Utc};
use chrono_tz::Tz;

/// Length of the rolling date window. Fixed, not configurable.
pub const WEEK_WINDOW_DAYS: u64 = 7;

/// The 7 consecutive calendar dates starting at `now`'s date in `tz`,
/// today first. Pure function of its inputs.
pub fn week_dates(now: DateTime<Utc>, tz: Tz) -> Vec<chrono::NaiveDate> {
    let today = now.with_timezone(&tz).date_naive();
    (0..WEEK_WINDOW_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .collect()
}
