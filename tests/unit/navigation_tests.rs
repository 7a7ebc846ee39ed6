// Unit tests for view stepping and label fallback
// Table-driven checks of previous/next per view mode

use chrono::NaiveDate;
use test_case::test_case;

use calendar_grid::models::ui::{NavDirection, ViewType};
use calendar_grid::services::i18n::LabelResolver;
use calendar_grid::services::navigation::{next, previous, shift_months, step};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test_case(ViewType::Month, date(2026, 3, 15), date(2026, 4, 15) ; "month keeps day")]
#[test_case(ViewType::Month, date(2026, 1, 31), date(2026, 3, 3) ; "month overflows short february")]
#[test_case(ViewType::Month, date(2024, 1, 31), date(2024, 3, 2) ; "month overflows leap february")]
#[test_case(ViewType::Month, date(2025, 12, 10), date(2026, 1, 10) ; "month crosses year")]
#[test_case(ViewType::Week, date(2026, 12, 28), date(2027, 1, 4) ; "week crosses year")]
#[test_case(ViewType::Day, date(2026, 2, 28), date(2026, 3, 1) ; "day crosses month")]
#[test_case(ViewType::Year, date(2024, 2, 29), date(2025, 3, 1) ; "year from leap day")]
fn test_next(view: ViewType, from: NaiveDate, expected: NaiveDate) {
    assert_eq!(next(from, view), expected);
}

#[test_case(ViewType::Month, date(2026, 3, 31), date(2026, 3, 3) ; "month back overflows february")]
#[test_case(ViewType::Month, date(2026, 1, 15), date(2025, 12, 15) ; "month crosses year")]
#[test_case(ViewType::Week, date(2026, 1, 3), date(2025, 12, 27) ; "week crosses year")]
#[test_case(ViewType::Day, date(2026, 3, 1), date(2026, 2, 28) ; "day crosses month")]
#[test_case(ViewType::Year, date(2028, 2, 29), date(2027, 3, 1) ; "year to non leap")]
fn test_previous(view: ViewType, from: NaiveDate, expected: NaiveDate) {
    assert_eq!(previous(from, view), expected);
}

#[test]
fn test_month_steps_are_not_inverse() {
    let start = date(2026, 1, 31);
    let there = step(start, ViewType::Month, NavDirection::Next);
    let back = step(there, ViewType::Month, NavDirection::Previous);
    assert_eq!(there, date(2026, 3, 3));
    assert_eq!(back, date(2026, 2, 3));
    assert_ne!(back, start);
}

#[test_case(ViewType::Week ; "week")]
#[test_case(ViewType::Day ; "day")]
fn test_fixed_length_steps_round_trip(view: ViewType) {
    let start = date(2026, 1, 31);
    assert_eq!(previous(next(start, view), view), start);
}

#[test]
fn test_shift_months_by_many() {
    assert_eq!(shift_months(date(2026, 5, 10), -17), date(2024, 12, 10));
    assert_eq!(shift_months(date(2026, 5, 10), 0), date(2026, 5, 10));
}

#[test_case("en", 1, "January" ; "english")]
#[test_case("es", 1, "Enero" ; "spanish")]
#[test_case("fr", 1, "January" ; "unknown locale falls back to english")]
#[test_case("", 12, "December" ; "empty locale")]
fn test_month_name_by_locale(locale: &str, month: u32, expected: &str) {
    assert_eq!(LabelResolver::builtin(locale).month_name(month), expected);
}

#[test_case(0, "Sun" ; "sunday start")]
#[test_case(1, "Mon" ; "monday start")]
#[test_case(6, "Sat" ; "saturday start")]
fn test_first_weekday_label(week_starts_on: u8, expected: &str) {
    assert_eq!(LabelResolver::builtin("en").weekday_labels(week_starts_on)[0], expected);
}
