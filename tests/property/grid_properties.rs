// Property-based tests for the grid builders and event distribution
// Random reference dates, week starts and event lists

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use calendar_grid::models::event::Event;
use calendar_grid::services::event::events_on;
use calendar_grid::services::grid::{build_month_grid, build_week_grid, DAYS_PER_WEEK, MONTH_ROWS};
use calendar_grid::utils::date::weekday_index;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    let base = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    (0..(110 * 365i64)).prop_map(move |offset| base + Duration::days(offset))
}

fn arb_event() -> impl Strategy<Value = Event> {
    (arb_date(), 0..24u32, prop::option::of(0..(72 * 60i64))).prop_map(|(day, hour, length)| {
        let start = day.and_hms_opt(hour, 0, 0).unwrap();
        let mut event: Event = Event::new(format!("Event {}", start), start);
        event.end = length.map(|minutes| start + Duration::minutes(minutes));
        event
    })
}

proptest! {
    /// Property: a month grid always holds 42 consecutive days
    #[test]
    fn prop_month_grid_is_42_contiguous_days(reference in arb_date(), week_start in 0..7u8) {
        let rows = build_month_grid::<()>(reference, week_start, reference, reference, &[], false);
        prop_assert_eq!(rows.len(), MONTH_ROWS);

        let dates: Vec<NaiveDate> = rows.iter().flat_map(|r| r.days.iter().map(|c| c.date)).collect();
        prop_assert_eq!(dates.len(), MONTH_ROWS * DAYS_PER_WEEK);
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    /// Property: the grid opens on the configured week start and contains the whole month
    #[test]
    fn prop_month_grid_starts_on_week_start(reference in arb_date(), week_start in 0..7u8) {
        let rows = build_month_grid::<()>(reference, week_start, reference, reference, &[], false);
        let first = rows[0].days[0].date;
        prop_assert_eq!(weekday_index(first), week_start);
        prop_assert!(first <= reference.with_day(1).unwrap());
        prop_assert!(reference.with_day(1).unwrap() - first < Duration::days(7));

        let in_month = rows
            .iter()
            .flat_map(|r| r.days.iter())
            .filter(|c| c.is_in_current_period)
            .count() as i64;
        let next_month = if reference.month() == 12 {
            NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(reference.year(), reference.month() + 1, 1).unwrap()
        };
        prop_assert_eq!(in_month, (next_month - reference.with_day(1).unwrap()).num_days());
    }

    /// Property: the week grid is seven days starting on the week start and contains the reference
    #[test]
    fn prop_week_grid_contains_reference(reference in arb_date(), week_start in 0..7u8) {
        let week = build_week_grid::<()>(reference, week_start, reference, reference, &[]);
        prop_assert_eq!(week.len(), DAYS_PER_WEEK);
        prop_assert_eq!(weekday_index(week[0].date), week_start);
        prop_assert_eq!(week.iter().filter(|c| c.date == reference).count(), 1);
        prop_assert_eq!(week.iter().filter(|c| c.is_selected).count(), 1);
    }

    /// Property: filtering is idempotent and keeps input order
    #[test]
    fn prop_events_on_idempotent_and_ordered(
        events in prop::collection::vec(arb_event(), 0..20),
        day in arb_date(),
    ) {
        let once: Vec<Event> = events_on(day, &events).into_iter().cloned().collect();
        let twice: Vec<Event> = events_on(day, &once).into_iter().cloned().collect();
        prop_assert_eq!(&once, &twice);

        let positions: Vec<usize> = events_on(day, &events)
            .iter()
            .map(|hit| events.iter().position(|e| std::ptr::eq(e, *hit)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: a point event appears on exactly one day, its start day
    #[test]
    fn prop_point_event_on_one_day(day in arb_date(), hour in 0..24u32, minute in 0..60u32) {
        let events: Vec<Event> = vec![Event::new("Point", day.and_hms_opt(hour, minute, 0).unwrap())];
        for offset in -3..=3i64 {
            let probe = day + Duration::days(offset);
            prop_assert_eq!(events_on(probe, &events).len(), usize::from(offset == 0));
        }
    }

    /// Property: a ranged event appears on every day from its start day to its end day
    #[test]
    fn prop_ranged_event_covers_each_touched_day(event in arb_event()) {
        let events = vec![event];
        let start = events[0].start.date();
        let end = events[0].effective_end().date();

        let mut day = start - Duration::days(1);
        while day <= end + Duration::days(1) {
            let expected = day >= start && day <= end;
            prop_assert_eq!(!events_on(day, &events).is_empty(), expected);
            day += Duration::days(1);
        }
    }
}
