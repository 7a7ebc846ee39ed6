// Day module
// Derived grid structures: day cells, week rows, month summaries, time slots

use chrono::{NaiveDate, NaiveTime};

use crate::models::event::Event;

/// One day's slot in a grid.
///
/// Borrows the host's events; recomputed on every render and never stored.
#[derive(Debug)]
pub struct DayCell<'a, T = ()> {
    pub date: NaiveDate,
    /// Events overlapping `date`, in input order.
    pub events: Vec<&'a Event<T>>,
    pub is_today: bool,
    /// In month view: the cell belongs to the reference month. Always true in
    /// week and day views.
    pub is_in_current_period: bool,
    pub is_weekend: bool,
    pub is_selected: bool,
}

impl<'a, T> DayCell<'a, T> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

impl<T> Clone for DayCell<'_, T> {
    fn clone(&self) -> Self {
        Self {
            date: self.date,
            events: self.events.clone(),
            is_today: self.is_today,
            is_in_current_period: self.is_in_current_period,
            is_weekend: self.is_weekend,
            is_selected: self.is_selected,
        }
    }
}

/// Seven consecutive days starting on the configured week-start day.
#[derive(Debug, Clone)]
pub struct WeekRow<'a, T = ()> {
    pub days: Vec<DayCell<'a, T>>,
    /// ISO week number, only set when week numbers are enabled.
    pub week_number: Option<u32>,
}

/// One month card of the year overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    /// First day of the month.
    pub date: NaiveDate,
    pub name: String,
    pub short_name: String,
    /// Events whose start falls inside the month.
    pub event_count: usize,
}

/// A row of the day/week time grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub hour: u32,
    pub minute: u32,
}
