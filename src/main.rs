// Calendar grid preview
// Prints the month, week, day or year grid for a date as plain text

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use clap::Parser;
use serde_json::Value;

use calendar_grid::models::day::{DayCell, WeekRow};
use calendar_grid::models::event::Event;
use calendar_grid::models::settings::CalendarConfig;
use calendar_grid::models::ui::ViewType;
use calendar_grid::services::calendar::CalendarController;
use calendar_grid::services::event::import::load_events;
use calendar_grid::services::i18n::TextKey;
use calendar_grid::services::settings::SettingsService;

/// Preview calendar grids in the terminal
#[derive(Debug, Parser)]
#[command(name = "calendar-grid", version, about)]
struct Cli {
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// View to render: month, week, day or year
    #[arg(short, long)]
    view: Option<ViewType>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a JSON event list
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Locale for labels
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// First day of the week (0 = Sunday .. 6 = Saturday), overrides the config
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=6))]
    week_start: Option<u8>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Some(SettingsService::new(path)),
        None => SettingsService::from_default_location(),
    };
    let mut config = match &settings {
        Some(service) => service.load()?,
        None => CalendarConfig::default(),
    };
    if let Some(week_start) = cli.week_start {
        config = config.merged_with(&CalendarConfig {
            week_starts_on: Some(week_start),
            ..Default::default()
        });
    }
    config
        .resolve()
        .validate()
        .context("calendar config is invalid")?;

    let events: Vec<Event<Value>> = match &cli.events {
        Some(path) => load_events(path)?,
        None => Vec::new(),
    };

    let mut calendar: CalendarController<Value> =
        CalendarController::new(&config).with_locale(cli.locale.clone());
    if let Some(date) = cli.date {
        calendar = calendar.with_reference(date);
    }
    if let Some(view) = cli.view {
        if calendar.set_view(view).is_none() {
            log::warn!("View {} is not enabled in the config", view);
        }
    }

    log::info!(
        "Rendering {} view for {} with {} events",
        calendar.view(),
        calendar.reference(),
        events.len()
    );

    let output = match calendar.view() {
        ViewType::Month => render_month(&calendar, &calendar.month_grid(&events)),
        ViewType::Week => render_days(&calendar, &calendar.week_grid(&events)),
        ViewType::Day => render_day(&calendar, &calendar.day_cell(&events)),
        ViewType::Year => render_year(&calendar, &events),
    };
    print!("{}", output);
    Ok(())
}

fn render_month(calendar: &CalendarController<Value>, rows: &[WeekRow<'_, Value>]) -> String {
    let mut out = format!("{} {}\n", calendar.current_month_name(), calendar.current_year());
    if calendar.config().show_week_numbers {
        out.push_str("    ");
    }
    for label in calendar.weekday_labels() {
        out.push_str(&format!("{:>5}", label));
    }
    out.push('\n');

    for row in rows {
        if let Some(week) = row.week_number {
            out.push_str(&format!("{:>3} ", week));
        }
        for cell in &row.days {
            out.push_str(&format_cell(cell));
        }
        out.push('\n');
    }
    out
}

fn format_cell(cell: &DayCell<'_, Value>) -> String {
    let marker = match (cell.is_today, cell.has_events()) {
        (true, _) => '#',
        (false, true) => '*',
        (false, false) => ' ',
    };
    if cell.is_in_current_period {
        format!("{:>4}{}", cell.date.format("%-d"), marker)
    } else {
        format!("{:>4}{}", format!("({})", cell.date.format("%-d")), marker)
    }
}

fn render_days(calendar: &CalendarController<Value>, days: &[DayCell<'_, Value>]) -> String {
    let labels = calendar.weekday_labels();
    let mut out = String::new();
    for (label, cell) in labels.iter().zip(days) {
        out.push_str(&format!("{} {}\n", label, cell.date));
        for event in &cell.events {
            out.push_str(&format!("    {}\n", describe(calendar, event)));
        }
    }
    out
}

fn render_day(calendar: &CalendarController<Value>, cell: &DayCell<'_, Value>) -> String {
    let labels = calendar.labels();
    let slots = calendar.time_slots();
    let slot_length = Duration::minutes(i64::from(calendar.config().slot_duration));
    let slot_of = |event: &Event<Value>| -> Option<usize> {
        if event.all_day || event.start_date() != cell.date {
            return None;
        }
        let starts = event.start.time();
        slots.iter().position(|slot| {
            let slot_end = slot.start + slot_length;
            // slot_end wraps past midnight for the last slot of the day
            starts >= slot.start && (starts < slot_end || slot_end <= slot.start)
        })
    };

    // Events that fit no slot (all-day, carried over, or outside the day
    // hours) are listed above the slots
    let mut out = format!("{}\n", cell.date);
    for event in cell.events.iter().filter(|e| slot_of(**e).is_none()) {
        let label = if event.all_day || event.start_date() != cell.date {
            labels.text(TextKey::AllDay)
        } else {
            event.start.format("%H:%M").to_string()
        };
        out.push_str(&format!("{:>8}  {}\n", label, describe(calendar, event)));
    }

    for (index, slot) in slots.iter().enumerate() {
        out.push_str(&format!("{:>8}\n", slot.start.format("%H:%M")));
        for event in cell.events.iter().filter(|e| slot_of(**e) == Some(index)) {
            out.push_str(&format!("          {}\n", describe(calendar, event)));
        }
    }
    out
}

fn render_year(calendar: &CalendarController<Value>, events: &[Event<Value>]) -> String {
    let mut out = format!("{}\n", calendar.current_year());
    for month in calendar.year_summary(events) {
        out.push_str(&format!("{:<12}{:>4}\n", month.name, month.event_count));
    }
    out
}

fn describe(calendar: &CalendarController<Value>, event: &Event<Value>) -> String {
    let class = calendar.event_class(event);
    if class.is_empty() {
        event.title.clone()
    } else {
        format!("{} [{}]", event.title, class)
    }
}
