//! Conflict annotation -- mark candidate slots that collide with bookings.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::booking::Booking;
use crate::slot::Slot;

/// Mark every slot whose instant falls inside an occupying booking as
/// `booked = true, available = false`.
///
/// A slot conflicts when its absolute instant (date + time of day in `tz`)
/// lies in `[start_time, end_time)` of any non-cancelled booking. Slots
/// whose local time has no instant (DST gap) are left untouched.
pub fn annotate_booked(slots: &mut [Slot], date: NaiveDate, tz: Tz, bookings: &[Booking]) {
    let occupied: Vec<&Booking> = bookings.iter().filter(|b| b.occupies()).collect();
    if occupied.is_empty() {
        return;
    }

    for slot in slots.iter_mut() {
        let Some(instant) = slot.time.on(date, tz) else {
            continue;
        };
        if occupied.iter().any(|booking| booking.contains(instant)) {
            slot.booked = true;
            slot.available = false;
        }
    }
}
