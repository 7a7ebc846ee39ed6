//! Previous/next stepping of the reference date per view mode.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::ui::{NavDirection, ViewType};

/// Move `reference` one period in `direction`.
///
/// Month and year steps work on the month field and let the day-of-month
/// overflow into the following month when the target month is shorter, so
/// 2026-01-31 plus one month is 2026-03-03. Stepping back from there lands on
/// 2026-02-03, not on the starting date.
pub fn step(reference: NaiveDate, view: ViewType, direction: NavDirection) -> NaiveDate {
    let sign = direction.sign();
    match view {
        ViewType::Month => shift_months(reference, sign),
        ViewType::Week => shift_days(reference, 7 * sign as i64),
        ViewType::Day => shift_days(reference, sign as i64),
        ViewType::Year => shift_months(reference, 12 * sign),
    }
}

/// Shift by whole days, staying put at the edge of the representable range.
fn shift_days(current: NaiveDate, delta_days: i64) -> NaiveDate {
    current
        .checked_add_signed(Duration::days(delta_days))
        .unwrap_or_else(|| {
            log::warn!("Cannot shift {} by {} days: out of range", current, delta_days);
            current
        })
}

pub fn previous(reference: NaiveDate, view: ViewType) -> NaiveDate {
    step(reference, view, NavDirection::Previous)
}

pub fn next(reference: NaiveDate, view: ViewType) -> NaiveDate {
    step(reference, view, NavDirection::Next)
}

/// Today's local date, regardless of view.
pub fn go_to_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Shift by whole months, overflowing the day-of-month into the next month
/// when it does not exist in the target month.
pub fn shift_months(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;

    match NaiveDate::from_ymd_opt(new_year, new_month, 1) {
        Some(first) => first + Duration::days(current.day0() as i64),
        None => {
            log::warn!(
                "Cannot shift {} by {} months: target year {} out of range",
                current,
                delta_months,
                new_year
            );
            current
        }
    }
}
