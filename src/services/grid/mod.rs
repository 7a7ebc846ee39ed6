//! Grid builders for the month, week, day and year views.
//!
//! Every function here is a pure function of its arguments: cells borrow the
//! host's events and are rebuilt on each call.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use crate::models::day::{DayCell, MonthSummary, TimeSlot, WeekRow};
use crate::models::event::Event;
use crate::models::settings::ResolvedConfig;
use crate::services::event::{events_in_month, events_on};
use crate::services::i18n::{LabelResolver, ListKey};
use crate::utils::date::{
    first_of_month, get_week_start, is_same_day, is_weekend, week_offset, weekday_index,
};

/// Rows in a month grid, whatever the month's length.
pub const MONTH_ROWS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;

fn make_cell<'a, T>(
    date: NaiveDate,
    events: &'a [Event<T>],
    today: NaiveDate,
    in_current_period: bool,
    selected: bool,
) -> DayCell<'a, T> {
    DayCell {
        date,
        events: events_on(date, events),
        is_today: is_same_day(date, today),
        is_in_current_period: in_current_period,
        is_weekend: is_weekend(date),
        is_selected: selected,
    }
}

/// Six rows of seven days covering the reference month.
///
/// The first cell falls on `week_starts_on` (0 = Sunday) on or before the
/// first of the month; trailing cells spill into the next month so the grid
/// always holds 42 consecutive days. At either end of the representable date
/// range the grid is cut short instead of failing.
pub fn build_month_grid<'a, T>(
    reference: NaiveDate,
    week_starts_on: u8,
    today: NaiveDate,
    selected: NaiveDate,
    events: &'a [Event<T>],
    show_week_numbers: bool,
) -> Vec<WeekRow<'a, T>> {
    let first = first_of_month(reference);
    let offset = week_offset(weekday_index(first), week_starts_on % 7);
    let grid_start = first
        .checked_sub_signed(Duration::days(offset))
        .unwrap_or_else(|| {
            log::warn!("Month grid for {} starts before the first representable date", first);
            first
        });

    (0..MONTH_ROWS)
        .map(|row| {
            let days: Vec<DayCell<'a, T>> = (0..DAYS_PER_WEEK)
                .filter_map(|col| {
                    let index = (row * DAYS_PER_WEEK + col) as i64;
                    grid_start.checked_add_signed(Duration::days(index))
                })
                .map(|date| {
                    let in_month = date.year() == first.year() && date.month() == first.month();
                    make_cell(date, events, today, in_month, is_same_day(date, selected))
                })
                .collect();
            let week_number = if show_week_numbers {
                iso_week_of_row(&days)
            } else {
                None
            };
            WeekRow { days, week_number }
        })
        .collect()
}

/// ISO 8601 week number of the row's Thursday.
fn iso_week_of_row<T>(days: &[DayCell<'_, T>]) -> Option<u32> {
    days.iter()
        .find(|cell| cell.date.weekday() == Weekday::Thu)
        .map(|cell| cell.date.iso_week().week())
}

/// The seven days of the week containing `reference`.
pub fn build_week_grid<'a, T>(
    reference: NaiveDate,
    week_starts_on: u8,
    today: NaiveDate,
    selected: NaiveDate,
    events: &'a [Event<T>],
) -> Vec<DayCell<'a, T>> {
    let start = get_week_start(reference, week_starts_on % 7);
    (0..DAYS_PER_WEEK as i64)
        .filter_map(|i| start.checked_add_signed(Duration::days(i)))
        .map(|date| make_cell(date, events, today, true, is_same_day(date, selected)))
        .collect()
}

/// The single cell of the day view. Always selected.
pub fn build_day_cell<'a, T>(
    reference: NaiveDate,
    today: NaiveDate,
    events: &'a [Event<T>],
) -> DayCell<'a, T> {
    make_cell(reference, events, today, true, true)
}

/// Twelve month cards for the reference year with per-month event counts.
pub fn build_year_summary<T>(
    reference: NaiveDate,
    events: &[Event<T>],
    labels: &LabelResolver<'_>,
) -> Vec<MonthSummary> {
    let year = reference.year();
    let names = labels.list(ListKey::Months);
    let short_names = labels.list(ListKey::MonthsShort);

    (1..=12u32)
        .filter_map(|month| {
            let date = NaiveDate::from_ymd_opt(year, month, 1)?;
            let index = (month - 1) as usize;
            Some(MonthSummary {
                date,
                name: names.get(index).cloned().unwrap_or_default(),
                short_name: short_names.get(index).cloned().unwrap_or_default(),
                event_count: events_in_month(year, month, events),
            })
        })
        .collect()
}

/// Time slots from `day_start_hour` up to (not including) `day_end_hour`.
pub fn build_time_slots(config: &ResolvedConfig) -> Vec<TimeSlot> {
    let step = config.slot_duration.max(1);
    let end_minutes = config.day_end_hour.min(24) * 60;
    let mut minutes = config.day_start_hour.min(24) * 60;
    let mut slots = Vec::new();

    while minutes < end_minutes {
        let (hour, minute) = (minutes / 60, minutes % 60);
        if let Some(start) = NaiveTime::from_hms_opt(hour, minute, 0) {
            slots.push(TimeSlot { start, hour, minute });
        }
        minutes += step;
    }

    slots
}
