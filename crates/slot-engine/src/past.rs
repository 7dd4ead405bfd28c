//! Past-time annotation -- elapsed slots on the current date are not
//! bookable.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::slot::Slot;

/// Mark slots strictly before `now` as unavailable.
///
/// Applies only when `date` is `now`'s calendar date in `tz`; future dates
/// are never touched. Only `available` changes -- a past slot keeps its
/// `booked` flag, so an elapsed booked slot still reads as booked rather
/// than merely past.
pub fn annotate_past(slots: &mut [Slot], date: NaiveDate, now: DateTime<Utc>, tz: Tz) {
    if now.with_timezone(&tz).date_naive() != date {
        return;
    }

    for slot in slots.iter_mut() {
        let Some(instant) = slot.time.on(date, tz) else {
            continue;
        };
        if instant < now {
            slot.available = false;
        }
    }
}
