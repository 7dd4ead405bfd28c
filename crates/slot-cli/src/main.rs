//! `slots` CLI — inspect a staff member's bookable slots from a schedule
//! data file.
//!
//! ## Usage
//!
//! ```sh
//! # Day sheet for one staff member
//! slots day --staff staff-1 --date 2026-08-03 -i salon.json
//!
//! # Pin the clock for reproducible output
//! slots day --staff staff-1 --date 2026-08-03 -i salon.json \
//!     --now 2026-08-03T10:15:00Z
//!
//! # 7-day overview, rolling window from today
//! slots week --staff staff-1 -i salon.json
//!
//! # Interpret the schedule in a specific timezone
//! slots week --staff staff-1 -i salon.json --timezone America/New_York
//! ```
//!
//! The data file is JSON with two arrays,
//! `{"availability": [...], "bookings": [...]}`, in the same shapes the
//! engine's repositories serve.

use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use serde::Deserialize;

use slot_engine::{
    AvailabilityRule, Booking, FixedClock, InMemoryAvailability, InMemoryBookings, Slot,
    SlotResolver,
};

#[derive(Parser)]
#[command(name = "slots", version, about = "Staff bookable-slot inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slot sheet for one staff member and date
    Day {
        /// Staff member id
        #[arg(short, long)]
        staff: String,
        /// Calendar date, YYYY-MM-DD
        #[arg(short, long)]
        date: NaiveDate,
        /// Schedule data file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Pin the clock to an RFC 3339 instant instead of wall time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
        /// IANA timezone the schedule is interpreted in
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
    /// Print a 7-day overview, today first
    Week {
        /// Staff member id
        #[arg(short, long)]
        staff: String,
        /// Schedule data file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Pin the clock to an RFC 3339 instant instead of wall time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
        /// IANA timezone the schedule is interpreted in
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
}

/// The on-disk schedule snapshot: rules plus bookings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleData {
    #[serde(default)]
    availability: Vec<AvailabilityRule>,
    #[serde(default)]
    bookings: Vec<Booking>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slot_engine=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Day {
            staff,
            date,
            input,
            now,
            timezone,
        } => {
            let resolver = build_resolver(input.as_deref(), now, &timezone)?;
            let slots = resolver.slots_for_day(&staff, date).await?;
            print_day(&staff, date, &slots);
        }
        Commands::Week {
            staff,
            input,
            now,
            timezone,
        } => {
            let resolver = build_resolver(input.as_deref(), now, &timezone)?;
            let week = resolver.week_schedule(&staff).await?;
            println!("Week for {staff}:");
            for day in &week {
                let summary = match (day.slots.len(), open_count(&day.slots)) {
                    (0, _) => "no working hours".to_string(),
                    (total, open) => format!("{open} open / {total} slots"),
                };
                println!("  {} {}  {summary}", day.date.format("%a"), day.date);
            }
        }
    }

    Ok(())
}

/// Load the schedule snapshot and assemble a resolver over it.
fn build_resolver(
    input: Option<&str>,
    now: Option<DateTime<Utc>>,
    timezone: &str,
) -> Result<SlotResolver> {
    let raw = read_input(input)?;
    let data: ScheduleData =
        serde_json::from_str(&raw).context("Failed to parse schedule data file")?;

    let tz: Tz = timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: {timezone}"))?;

    let mut resolver = SlotResolver::new(
        Arc::new(InMemoryAvailability::new(data.availability)),
        Arc::new(InMemoryBookings::new(data.bookings)),
    )
    .with_timezone(tz);

    if let Some(instant) = now {
        resolver = resolver.with_clock(Arc::new(FixedClock(instant)));
    }

    Ok(resolver)
}

fn print_day(staff: &str, date: NaiveDate, slots: &[Slot]) {
    // An empty sheet means no configured hours, distinct from a day whose
    // slots are all taken.
    if slots.is_empty() {
        println!("{staff} has no working hours on {date}.");
        return;
    }

    println!("Slots for {staff} on {} {date}:", date.format("%a"));
    for slot in slots {
        let state = if slot.booked {
            "booked"
        } else if slot.available {
            "open"
        } else {
            "past"
        };
        println!("  {}  {state}", slot.time);
    }

    if open_count(slots) == 0 {
        println!("No open slots remain for this day.");
    }
}

fn open_count(slots: &[Slot]) -> usize {
    slots.iter().filter(|s| s.available).count()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
