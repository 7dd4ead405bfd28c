//! Property-based tests for the slot pipeline using proptest.
//!
//! These verify invariants that should hold for *any* rule/booking snapshot,
//! not just the worked examples in `schedule_tests.rs`.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use slot_engine::{
    annotate_booked, annotate_past, enumerate_slots, rules_for_date, AvailabilityRule, Booking,
    BookingStatus, Slot, TimeOfDay,
};

const STAFF: &str = "staff-1";
const TZ: chrono_tz::Tz = chrono_tz::UTC;

/// Monday, weekday index 1.
fn target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
}

// ---------------------------------------------------------------------------
// Strategies — generate valid rule and booking snapshots
// ---------------------------------------------------------------------------

fn arb_time() -> impl Strategy<Value = TimeOfDay> {
    (0u8..24, prop::sample::select(vec![0u8, 15, 30, 45]))
        .prop_map(|(h, m)| TimeOfDay::from_hm(h, m).expect("in range"))
}

/// A non-empty working window (start < end).
fn arb_window() -> impl Strategy<Value = (TimeOfDay, TimeOfDay)> {
    (arb_time(), arb_time()).prop_filter_map("window must be non-empty", |(a, b)| {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some((a, b)),
            std::cmp::Ordering::Greater => Some((b, a)),
            std::cmp::Ordering::Equal => None,
        }
    })
}

/// Weekly Monday rules for the target staff member.
fn arb_weekly_rules() -> impl Strategy<Value = Vec<AvailabilityRule>> {
    prop::collection::vec(arb_window(), 0..4).prop_map(|windows| {
        windows
            .into_iter()
            .enumerate()
            .map(|(i, (start, end))| AvailabilityRule {
                id: format!("wk-{i}"),
                staff_id: STAFF.to_string(),
                day_of_week: Some(1),
                date: None,
                start_time: start,
                end_time: end,
            })
            .collect()
    })
}

/// Date-specific rules pinned to the target date.
fn arb_dated_rules() -> impl Strategy<Value = Vec<AvailabilityRule>> {
    prop::collection::vec(arb_window(), 1..3).prop_map(|windows| {
        windows
            .into_iter()
            .enumerate()
            .map(|(i, (start, end))| AvailabilityRule {
                id: format!("dated-{i}"),
                staff_id: STAFF.to_string(),
                day_of_week: None,
                date: Some("2026-08-03".to_string()),
                start_time: start,
                end_time: end,
            })
            .collect()
    })
}

fn arb_status() -> impl Strategy<Value = BookingStatus> {
    prop_oneof![
        Just(BookingStatus::Pending),
        Just(BookingStatus::Confirmed),
        Just(BookingStatus::Cancelled),
        Just(BookingStatus::Completed),
        Just(BookingStatus::Rescheduled),
    ]
}

/// Bookings on the target date, 15-120 minutes long.
fn arb_bookings() -> impl Strategy<Value = Vec<Booking>> {
    prop::collection::vec(
        (0u32..23, prop::sample::select(vec![0u32, 15, 30, 45]), 15i64..=120, arb_status()),
        0..5,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(hour, minute, duration, status)| {
                let start = Utc
                    .with_ymd_and_hms(2026, 8, 3, hour, minute, 0)
                    .unwrap();
                Booking {
                    staff_id: STAFF.to_string(),
                    start_time: start,
                    end_time: start + chrono::Duration::minutes(duration),
                    status,
                }
            })
            .collect()
    })
}

/// A clock instant somewhere on the target date.
fn arb_now() -> impl Strategy<Value = DateTime<Utc>> {
    (0u32..24, 0u32..60)
        .prop_map(|(h, m)| Utc.with_ymd_and_hms(2026, 8, 3, h, m, 0).unwrap())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The full synchronous pipeline over one snapshot.
fn resolve(rules: &[AvailabilityRule], bookings: &[Booking], now: DateTime<Utc>) -> Vec<Slot> {
    let windows = rules_for_date(rules, STAFF, target_date());
    let mut slots = enumerate_slots(&windows);
    annotate_booked(&mut slots, target_date(), TZ, bookings);
    annotate_past(&mut slots, target_date(), now, TZ);
    slots
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Output is strictly ascending (sorted and deduplicated)
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn output_is_strictly_ascending(
        rules in arb_weekly_rules(),
        bookings in arb_bookings(),
        now in arb_now(),
    ) {
        let slots = resolve(&rules, &bookings, now);
        for pair in slots.windows(2) {
            prop_assert!(pair[0].time < pair[1].time);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Idempotence — same snapshot, same result
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn resolution_is_idempotent(
        rules in arb_weekly_rules(),
        bookings in arb_bookings(),
        now in arb_now(),
    ) {
        let first = resolve(&rules, &bookings, now);
        let second = resolve(&rules, &bookings, now);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 3: No double-booking leak — every booked slot lies inside an
// occupying booking interval
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn booked_slots_are_backed_by_a_booking(
        rules in arb_weekly_rules(),
        bookings in arb_bookings(),
        now in arb_now(),
    ) {
        let slots = resolve(&rules, &bookings, now);
        for slot in slots.iter().filter(|s| s.booked) {
            let instant = slot.time.on(target_date(), TZ).expect("valid slot time");
            let backed = bookings.iter().any(|b| {
                b.status != BookingStatus::Cancelled
                    && instant >= b.start_time
                    && instant < b.end_time
            });
            prop_assert!(backed, "slot {} booked without a backing booking", slot.time);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Past exclusion — on the current date, every elapsed slot is
// unavailable
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn elapsed_slots_are_unavailable(
        rules in arb_weekly_rules(),
        bookings in arb_bookings(),
        now in arb_now(),
    ) {
        let slots = resolve(&rules, &bookings, now);
        for slot in &slots {
            let instant = slot.time.on(target_date(), TZ).expect("valid slot time");
            if instant < now {
                prop_assert!(!slot.available, "elapsed slot {} still available", slot.time);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Override, not merge — date-specific rules suppress weekly ones
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn date_specific_rules_suppress_weekly_slots(
        weekly in arb_weekly_rules(),
        dated in arb_dated_rules(),
    ) {
        let mut rules = weekly;
        rules.extend(dated.clone());

        let slots = resolve(&rules, &[], Utc.with_ymd_and_hms(2026, 8, 3, 0, 0, 0).unwrap());

        // Exactly the slots of the date-specific windows alone.
        let dated_refs: Vec<&AvailabilityRule> = dated.iter().collect();
        let expected = enumerate_slots(&dated_refs);
        prop_assert_eq!(slots, expected);
    }
}
