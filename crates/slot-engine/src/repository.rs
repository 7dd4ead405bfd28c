//! Read-only repository ports for the two external collaborators.
//!
//! The engine never owns persistence; it consumes availability rules and
//! booking snapshots through these traits so callers can back them with a
//! database, an HTTP client, or the in-memory stores below.

use async_trait::async_trait;

use crate::booking::Booking;
use crate::error::Result;
use crate::rule::AvailabilityRule;

/// Source of working-hour rules, maintained by staff profile management.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// All rules declared for one staff member.
    async fn rules_for_staff(&self, staff_id: &str) -> Result<Vec<AvailabilityRule>>;
}

/// Source of existing bookings, maintained by the booking subsystem.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Bookings for one staff member. The contract asks collaborators to
    /// pre-exclude cancelled bookings, but the engine filters again before
    /// conflict annotation.
    async fn active_bookings_for_staff(&self, staff_id: &str) -> Result<Vec<Booking>>;
}

/// `Vec`-backed availability store for tests, demos, and the CLI.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAvailability {
    rules: Vec<AvailabilityRule>,
}

impl InMemoryAvailability {
    pub fn new(rules: Vec<AvailabilityRule>) -> Self {
        Self { rules }
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailability {
    async fn rules_for_staff(&self, staff_id: &str) -> Result<Vec<AvailabilityRule>> {
        Ok(self
            .rules
            .iter()
            .filter(|rule| rule.staff_id == staff_id)
            .cloned()
            .collect())
    }
}

/// `Vec`-backed booking store for tests, demos, and the CLI.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookings {
    bookings: Vec<Booking>,
}

impl InMemoryBookings {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn active_bookings_for_staff(&self, staff_id: &str) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .iter()
            .filter(|booking| booking.staff_id == staff_id && booking.occupies())
            .cloned()
            .collect())
    }
}
