//! Event distribution over calendar days.
//! Linear scans over the host's event list; no index is kept between calls.

pub mod import;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::models::event::Event;
use crate::utils::date::{end_of_day, start_of_day};

/// Whether `event` covers the calendar day `date`.
///
/// The day matches when its midnight falls inside
/// `[start_of_day(start), end_of_day(end or start)]`. A point event therefore
/// shows only on its start day, and a ranged event shows on every day it
/// touches, partial first and last days included.
pub fn overlaps_date<T>(event: &Event<T>, date: NaiveDate) -> bool {
    let check = date.and_time(NaiveTime::MIN);
    let range_start = start_of_day(event.start);
    let range_end = end_of_day(event.effective_end());
    check >= range_start && check <= range_end
}

/// Events overlapping `date`, in input order.
pub fn events_on<T>(date: NaiveDate, events: &[Event<T>]) -> Vec<&Event<T>> {
    events
        .iter()
        .filter(|&event| overlaps_date(event, date))
        .collect()
}

/// Number of events whose start lies in the given month. The end is ignored.
pub fn events_in_month<T>(year: i32, month: u32, events: &[Event<T>]) -> usize {
    events
        .iter()
        .filter(|event| event.start.year() == year && event.start.month() == month)
        .count()
}
