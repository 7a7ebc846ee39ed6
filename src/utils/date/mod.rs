// Date utility functions
// Day boundaries, weekday arithmetic and month lengths shared by the grid engine

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub fn is_same_day(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 == date2
}

/// Midnight (00:00:00.000) of the given instant's calendar day.
pub fn start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// Last representable millisecond (23:59:59.999) of the given instant's calendar day.
///
/// Built from the calendar day alone, so it holds on the last representable date.
pub fn end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_hms_milli_opt(23, 59, 59, 999).unwrap_or(date)
}

/// Day of week as 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Saturday and Sunday. Not configurable.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(weekday_index(date), 0 | 6)
}

/// Days to step back from a date with weekday `weekday` to reach `week_starts_on`.
pub fn week_offset(weekday: u8, week_starts_on: u8) -> i64 {
    (weekday as i64 - week_starts_on as i64 + 7).rem_euclid(7)
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `week_starts_on` - 0 = Sunday, 1 = Monday, etc.
///
/// Returns `date` itself when the week start would fall before the first
/// representable date.
pub fn get_week_start(date: NaiveDate, week_starts_on: u8) -> NaiveDate {
    let offset = week_offset(weekday_index(date), week_starts_on);
    date.checked_sub_signed(Duration::days(offset))
        .unwrap_or_else(|| {
            log::warn!("Week start for {} is out of range, using the date itself", date);
            date
        })
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt()) {
        Some(last) => last.day(),
        None => 31,
    }
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first + Duration::days(days_in_month(date.year(), date.month()) as i64 - 1)
}
