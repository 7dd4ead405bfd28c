//! # slot-engine
//!
//! Bookable-slot computation for staff appointment scheduling: given a staff
//! member's recurring and date-specific working-hour rules plus their
//! existing bookings, compute the ordered list of 30-minute slots for a day,
//! excluding elapsed times and already-booked times.
//!
//! The engine owns no persistence and no UI. It reads rules and bookings
//! through two injected repository ports, takes "now" from an injected
//! clock, and returns freshly computed slots on every call.
//!
//! ## Modules
//!
//! - [`availability`] — select the working-hour rules applying to one date
//! - [`slot`] — expand rule windows into fixed-cadence candidate slots
//! - [`conflict`] — mark slots colliding with existing bookings
//! - [`past`] — mark elapsed slots on the current date
//! - [`window`] — the rolling 7-day date window
//! - [`schedule`] — the orchestrating [`SlotResolver`] and selection guard
//! - [`repository`] — repository ports + in-memory implementations
//! - [`rule`], [`booking`], [`time`] — data model
//! - [`clock`] — injectable time source
//! - [`error`] — error types

pub mod availability;
pub mod booking;
pub mod clock;
pub mod conflict;
pub mod error;
pub mod past;
pub mod repository;
pub mod rule;
pub mod schedule;
pub mod slot;
pub mod time;
pub mod window;

pub use availability::rules_for_date;
pub use booking::{Booking, BookingStatus};
pub use clock::{Clock, FixedClock, SystemClock};
pub use conflict::annotate_booked;
pub use error::SlotError;
pub use past::annotate_past;
pub use repository::{
    AvailabilityRepository, BookingRepository, InMemoryAvailability, InMemoryBookings,
};
pub use rule::AvailabilityRule;
pub use schedule::{DaySchedule, SelectionGuard, SelectionToken, SlotResolver};
pub use slot::{enumerate_slots, Slot, SLOT_INTERVAL_MINUTES};
pub use time::TimeOfDay;
pub use window::week_dates;
