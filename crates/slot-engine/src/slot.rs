//! Candidate slot enumeration -- expand working-hour windows into a
//! fixed-cadence slot list.
//!
//! Slots are derived and ephemeral: computed fresh on every call, never
//! persisted.

use serde::{Deserialize, Serialize};

use crate::rule::AvailabilityRule;
use crate::time::TimeOfDay;

/// Minutes between consecutive candidate slots. Fixed cadence.
pub const SLOT_INTERVAL_MINUTES: u16 = 30;

/// A discrete candidate appointment start time within a resolved window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub time: TimeOfDay,
    pub available: bool,
    pub booked: bool,
}

impl Slot {
    fn open(time: TimeOfDay) -> Self {
        Self {
            time,
            available: true,
            booked: false,
        }
    }
}

/// Expand the selected windows into candidate slots at a 30-minute cadence.
///
/// Each window emits slots from `start_time`, stepping by
/// [`SLOT_INTERVAL_MINUTES`], while the slot's start is strictly before
/// `end_time`. The window end bounds slot *starts*, not ends: a window that
/// closes mid-interval still yields its final partial slot (09:00-09:45
/// yields 09:00 and 09:30).
///
/// Overlapping windows can emit the same time twice; the result is
/// deduplicated and sorted ascending.
pub fn enumerate_slots(windows: &[&AvailabilityRule]) -> Vec<Slot> {
    let mut slots: Vec<Slot> = Vec::new();

    for window in windows {
        let mut current = window.start_time;
        while current < window.end_time {
            slots.push(Slot::open(current));
            current = current.advance(SLOT_INTERVAL_MINUTES);
        }
    }

    slots.sort_by_key(|slot| slot.time);
    slots.dedup_by_key(|slot| slot.time);
    slots
}
