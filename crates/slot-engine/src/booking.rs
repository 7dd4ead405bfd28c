//! Booking snapshot types -- read-only input to conflict annotation.
//!
//! Bookings are owned by the booking subsystem; the engine only sees an
//! immutable per-computation snapshot and never transitions status itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking lifecycle status, wire spelling uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Rescheduled,
}

/// An existing booking against a staff member's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub staff_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    /// Whether this booking occupies its interval. Cancelled bookings free
    /// their time; every other status blocks `[start_time, end_time)`.
    pub fn occupies(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }

    /// Whether `instant` falls inside the half-open booked interval.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start_time && instant < self.end_time
    }
}
