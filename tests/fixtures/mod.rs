// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use calendar_grid::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Jan 31, 2026: the month-overflow case
    pub fn jan_31_2026() -> NaiveDate {
        date(2026, 1, 31)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        date(2024, 2, 29)
    }
}

/// Sample events for testing
pub mod events {
    use super::dates::at;
    use super::*;

    /// Point event on Jan 15, 2026 at 10:00
    pub fn standup() -> Event {
        Event::builder()
            .id(1_i64)
            .title("Standup")
            .start(at(2026, 1, 15, 10, 0))
            .build()
            .unwrap()
    }

    /// Jan 30 23:00 to Feb 1 01:00, 2026
    pub fn trip() -> Event {
        Event::builder()
            .id("trip")
            .title("Trip")
            .start(at(2026, 1, 30, 23, 0))
            .end(at(2026, 2, 1, 1, 0))
            .css_class("event-travel")
            .build()
            .unwrap()
    }

    /// All-day workshop on Jan 20, 2026
    pub fn workshop() -> Event {
        Event::builder()
            .id(3_i64)
            .title("Workshop")
            .start(at(2026, 1, 20, 0, 0))
            .end(at(2026, 1, 20, 23, 59))
            .all_day(true)
            .build()
            .unwrap()
    }

    /// End before start, on different days
    pub fn inverted() -> Event {
        Event::builder()
            .title("Inverted")
            .start(at(2026, 1, 12, 10, 0))
            .end(at(2026, 1, 10, 10, 0))
            .build()
            .unwrap()
    }

    pub fn january() -> Vec<Event> {
        vec![standup(), trip(), workshop()]
    }
}

pub const EVENTS_JSON: &str = r#"[
    { "id": 1, "title": "Standup", "start": "2026-01-15T10:00:00" },
    {
        "id": "trip",
        "title": "Trip",
        "start": "2026-01-30T23:00:00",
        "end": "2026-02-01T01:00:00",
        "cssClass": "event-travel"
    }
]"#;
