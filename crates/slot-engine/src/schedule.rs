//! Slot resolution orchestration -- the public day/week operations.
//!
//! The pipeline is a pure function of (rules, bookings, now): fetch the two
//! snapshots concurrently, select the applicable windows, enumerate
//! candidates, annotate conflicts and elapsed times. No state is shared
//! between invocations.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::availability::rules_for_date;
use crate::booking::Booking;
use crate::clock::{Clock, SystemClock};
use crate::conflict::annotate_booked;
use crate::error::{Result, SlotError};
use crate::past::annotate_past;
use crate::repository::{AvailabilityRepository, BookingRepository};
use crate::rule::{validate_rules, AvailabilityRule};
use crate::slot::{enumerate_slots, Slot};
use crate::window::week_dates;

/// One resolved day of the rolling week window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

/// Computes bookable slots for a staff member from injected repositories
/// and clock.
///
/// An empty slot list means the staff member has no working hours
/// configured for that day; "fully booked" is a non-empty list with every
/// slot unavailable. Callers rely on the distinction for user messaging.
pub struct SlotResolver {
    availability: Arc<dyn AvailabilityRepository>,
    bookings: Arc<dyn BookingRepository>,
    clock: Arc<dyn Clock>,
    tz: Tz,
}

impl SlotResolver {
    /// Resolver over the given repositories, with the system clock and UTC.
    pub fn new(
        availability: Arc<dyn AvailabilityRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            availability,
            bookings,
            clock: Arc::new(SystemClock),
            tz: chrono_tz::UTC,
        }
    }

    /// Replace the clock (deterministic tests, pinned CLI runs).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Set the timezone "today" and slot instants are interpreted in.
    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.tz = tz;
        self
    }

    /// The 7 consecutive dates the booking surface offers, today first.
    pub fn week_dates(&self) -> Vec<NaiveDate> {
        week_dates(self.clock.now(), self.tz)
    }

    /// Compute the ordered slot list for one staff member and date.
    ///
    /// Rules and bookings are fetched concurrently and awaited jointly;
    /// either fetch failing aborts the whole request -- no partial lists.
    ///
    /// # Errors
    /// `SlotError::Repository` on fetch failure, `SlotError::InvalidRule`
    /// when the fetched snapshot violates the rule invariants.
    pub async fn slots_for_day(&self, staff_id: &str, date: NaiveDate) -> Result<Vec<Slot>> {
        let (rules, bookings) = tokio::try_join!(
            self.availability.rules_for_staff(staff_id),
            self.bookings.active_bookings_for_staff(staff_id),
        )?;
        self.compute_day(staff_id, date, &rules, &bookings)
    }

    /// Like [`Self::slots_for_day`], but guarded against stale selections:
    /// if `guard` has moved to a newer selection by the time the fetches
    /// complete, the result is discarded and `SlotError::Superseded` is
    /// returned instead of a slot list.
    pub async fn slots_for_selection(
        &self,
        guard: &SelectionGuard,
        token: &SelectionToken,
    ) -> Result<Vec<Slot>> {
        let (rules, bookings) = tokio::try_join!(
            self.availability.rules_for_staff(&token.staff_id),
            self.bookings.active_bookings_for_staff(&token.staff_id),
        )?;
        if !guard.is_current(token) {
            return Err(SlotError::Superseded);
        }
        self.compute_day(&token.staff_id, token.date, &rules, &bookings)
    }

    /// Resolve every day of the rolling week window from one joint fetch.
    pub async fn week_schedule(&self, staff_id: &str) -> Result<Vec<DaySchedule>> {
        let (rules, bookings) = tokio::try_join!(
            self.availability.rules_for_staff(staff_id),
            self.bookings.active_bookings_for_staff(staff_id),
        )?;
        self.week_dates()
            .into_iter()
            .map(|date| {
                self.compute_day(staff_id, date, &rules, &bookings)
                    .map(|slots| DaySchedule { date, slots })
            })
            .collect()
    }

    /// The synchronous pipeline over an already-fetched snapshot.
    fn compute_day(
        &self,
        staff_id: &str,
        date: NaiveDate,
        rules: &[AvailabilityRule],
        bookings: &[Booking],
    ) -> Result<Vec<Slot>> {
        validate_rules(rules)?;

        let windows = rules_for_date(rules, staff_id, date);
        let mut slots = enumerate_slots(&windows);

        annotate_booked(&mut slots, date, self.tz, bookings);
        annotate_past(&mut slots, date, self.clock.now(), self.tz);

        Ok(slots)
    }
}

/// Tracks the caller's current (staff, date) selection so an in-flight
/// request can be recognized as stale once a newer selection is made.
///
/// A guard models one selection surface -- one date/staff picker. Starting a
/// new selection supersedes every outstanding token, whether the key changed
/// or the same key was re-requested; the last request wins. Independent
/// callers resolving different keys in parallel use independent guards (or
/// the unguarded [`SlotResolver::slots_for_day`]).
#[derive(Debug, Default)]
pub struct SelectionGuard {
    seq: Mutex<u64>,
}

/// Proof of one started selection, checked after the fetches complete.
#[derive(Debug, Clone)]
pub struct SelectionToken {
    pub staff_id: String,
    pub date: NaiveDate,
    seq: u64,
}

impl SelectionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new selection, superseding any outstanding one.
    pub fn select(&self, staff_id: &str, date: NaiveDate) -> SelectionToken {
        let mut seq = self.seq.lock().unwrap_or_else(PoisonError::into_inner);
        *seq += 1;
        SelectionToken {
            staff_id: staff_id.to_string(),
            date,
            seq: *seq,
        }
    }

    /// Whether `token` still names the latest selection.
    pub fn is_current(&self, token: &SelectionToken) -> bool {
        *self.seq.lock().unwrap_or_else(PoisonError::into_inner) == token.seq
    }
}
