//! Grouping fetched events by calendar day.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::event::Event;
use crate::grid::DayCell;

/// Group `events` by the grid day their `start` falls on.
///
/// Events whose start date is not part of the grid are dropped. An event
/// spanning midnight is attributed only to its start day; multi-day
/// splitting is intentionally not performed.
///
/// Membership is tested against a prebuilt date set, so this is a single
/// linear pass over the events rather than a scan of events x cells.
/// Each bucket is ordered by start time, ties broken by id, so the result
/// is deterministic regardless of input order.
pub fn day_buckets(events: &[Event], grid: &[DayCell]) -> HashMap<NaiveDate, Vec<Event>> {
    let days: HashSet<NaiveDate> = grid.iter().map(|c| c.date).collect();

    let mut buckets: HashMap<NaiveDate, Vec<Event>> = HashMap::new();
    for event in events {
        let day = event.start.date_naive();
        if days.contains(&day) {
            buckets.entry(day).or_default().push(event.clone());
        }
    }

    for bucket in buckets.values_mut() {
        bucket.sort_by_key(|e| (e.start, e.id));
    }
    buckets
}
