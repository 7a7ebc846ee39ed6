//! Host-facing calendar state.
//!
//! Holds the reference date, view and resolved config, wires the grid
//! builders, navigation and label resolution together, and reports what the
//! host should be told after each interaction. Events stay owned by the host
//! and are passed in on every render call.

pub mod drag;

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::models::day::{DayCell, MonthSummary, TimeSlot, WeekRow};
use crate::models::event::{Event, StyleSource};
use crate::models::settings::{CalendarConfig, ResolvedConfig};
use crate::models::ui::{NavDirection, ViewType};
use crate::services::grid;
use crate::services::i18n::{builtin::DEFAULT_LOCALE, LabelResolver, Translator};
use crate::services::navigation;
use crate::services::style::resolve_event_class;
use crate::utils::date::first_of_month;

pub use drag::{DragContext, DragSession, MoveRequest};

/// Notifications raised toward the host.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarNotification<T = ()> {
    DaySelected(NaiveDate),
    EventActivated(Event<T>),
    ViewChanged(ViewType),
    /// Raised after every navigation step or reset to today.
    DateChanged(NaiveDate),
    MoveRequested(MoveRequest<T>),
}

pub struct CalendarController<T = ()> {
    reference: NaiveDate,
    today: NaiveDate,
    view: ViewType,
    config: ResolvedConfig,
    locale: String,
    event_class: Option<StyleSource<T>>,
    translator: Option<Arc<dyn Translator>>,
    drag: DragSession<T>,
}

impl<T> fmt::Debug for CalendarController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarController")
            .field("reference", &self.reference)
            .field("today", &self.today)
            .field("view", &self.view)
            .field("config", &self.config)
            .field("locale", &self.locale)
            .field("dragging", &self.drag.is_active())
            .finish()
    }
}

impl<T> CalendarController<T> {
    /// Create a controller positioned on today, in the configured initial view.
    pub fn new(config: &CalendarConfig) -> Self {
        let config = config.resolve();
        let today = navigation::go_to_today();
        Self {
            reference: today,
            today,
            view: config.initial_view,
            config,
            locale: DEFAULT_LOCALE.to_string(),
            event_class: None,
            translator: None,
            drag: DragSession::default(),
        }
    }

    pub fn with_reference(mut self, reference: NaiveDate) -> Self {
        self.reference = reference;
        self
    }

    /// Pin "today", e.g. for deterministic rendering.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Class applied to every event before its own class.
    pub fn with_event_class(mut self, class: impl Into<StyleSource<T>>) -> Self {
        self.event_class = Some(class.into());
        self
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Replace the config; the current view and reference date are kept.
    pub fn set_config(&mut self, config: &CalendarConfig) {
        self.config = config.resolve();
        if !self.config.is_view_available(self.view) {
            log::debug!(
                "View {} no longer available, keeping it until the host switches",
                self.view
            );
        }
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn previous(&mut self) -> CalendarNotification<T> {
        self.navigate(NavDirection::Previous)
    }

    pub fn next(&mut self) -> CalendarNotification<T> {
        self.navigate(NavDirection::Next)
    }

    fn navigate(&mut self, direction: NavDirection) -> CalendarNotification<T> {
        self.reference = navigation::step(self.reference, self.view, direction);
        log::debug!("Navigated {:?} in {} view to {}", direction, self.view, self.reference);
        CalendarNotification::DateChanged(self.reference)
    }

    /// Jump to today; the view is left as is.
    pub fn go_to_today(&mut self) -> CalendarNotification<T> {
        self.today = navigation::go_to_today();
        self.reference = self.today;
        CalendarNotification::DateChanged(self.reference)
    }

    /// Switch view. Views missing from `available_views` are ignored.
    pub fn set_view(&mut self, view: ViewType) -> Option<CalendarNotification<T>> {
        if !self.config.is_view_available(view) {
            log::warn!("Ignoring switch to unavailable view {}", view);
            return None;
        }
        self.view = view;
        Some(CalendarNotification::ViewChanged(view))
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    /// A day cell was chosen; it becomes the reference date.
    pub fn select_day(&mut self, date: NaiveDate) -> CalendarNotification<T> {
        self.reference = date;
        CalendarNotification::DaySelected(date)
    }

    /// A month card in the year view was chosen: show that month.
    pub fn open_month(&mut self, month: NaiveDate) -> Option<CalendarNotification<T>> {
        self.reference = first_of_month(month);
        self.set_view(ViewType::Month)
    }

    pub fn event_class(&self, event: &Event<T>) -> String {
        resolve_event_class(event, self.event_class.as_ref())
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn drag_hover(&mut self, date: NaiveDate) {
        self.drag.update_hover(date);
    }

    /// Drop the dragged event on `date`.
    pub fn drop_on(&mut self, date: NaiveDate) -> Option<CalendarNotification<T>> {
        let request = self.drag.finish(date)?;
        log::debug!(
            "Move requested for '{}': {} -> {}",
            request.event.title,
            request.from,
            request.to
        );
        Some(CalendarNotification::MoveRequested(request))
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    // ------------------------------------------------------------------
    // Render data
    // ------------------------------------------------------------------

    pub fn labels(&self) -> LabelResolver<'_> {
        LabelResolver::new(&self.locale, self.translator.as_deref())
    }

    /// Short weekday names rotated to the configured week start.
    pub fn weekday_labels(&self) -> Vec<String> {
        self.labels().weekday_labels(self.config.week_start())
    }

    pub fn current_month_name(&self) -> String {
        self.labels().month_name(self.reference.month())
    }

    pub fn current_year(&self) -> String {
        self.labels().year_label(self.reference.year())
    }

    pub fn month_grid<'a>(&self, events: &'a [Event<T>]) -> Vec<WeekRow<'a, T>> {
        grid::build_month_grid(
            self.reference,
            self.config.week_start(),
            self.today,
            self.reference,
            events,
            self.config.show_week_numbers,
        )
    }

    pub fn week_grid<'a>(&self, events: &'a [Event<T>]) -> Vec<DayCell<'a, T>> {
        grid::build_week_grid(
            self.reference,
            self.config.week_start(),
            self.today,
            self.reference,
            events,
        )
    }

    pub fn day_cell<'a>(&self, events: &'a [Event<T>]) -> DayCell<'a, T> {
        grid::build_day_cell(self.reference, self.today, events)
    }

    pub fn year_summary(&self, events: &[Event<T>]) -> Vec<MonthSummary> {
        grid::build_year_summary(self.reference, events, &self.labels())
    }

    pub fn time_slots(&self) -> Vec<TimeSlot> {
        grid::build_time_slots(&self.config)
    }
}

impl<T: Clone> CalendarController<T> {
    pub fn activate_event(&self, event: &Event<T>) -> CalendarNotification<T> {
        CalendarNotification::EventActivated(event.clone())
    }

    /// Start dragging `event`. Returns false when drag-and-drop is disabled.
    pub fn begin_drag(&mut self, event: &Event<T>) -> bool {
        if !self.config.drag_and_drop_enabled {
            log::debug!("Drag-and-drop disabled, not dragging '{}'", event.title);
            return false;
        }
        self.drag.begin(event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn controller(config: CalendarConfig) -> CalendarController {
        CalendarController::new(&config)
            .with_reference(date(2026, 1, 31))
            .with_today(date(2026, 1, 20))
    }

    #[test]
    fn test_new_uses_initial_view() {
        let ctrl: CalendarController = CalendarController::new(&CalendarConfig {
            initial_view: Some(ViewType::Week),
            ..Default::default()
        });
        assert_eq!(ctrl.view(), ViewType::Week);
        assert_eq!(ctrl.reference(), ctrl.today());
        assert_eq!(ctrl.locale(), "en");
    }

    #[test]
    fn test_navigation_emits_date_changed() {
        let mut ctrl = controller(CalendarConfig::default());
        assert_eq!(ctrl.next(), CalendarNotification::DateChanged(date(2026, 3, 3)));
        assert_eq!(ctrl.previous(), CalendarNotification::DateChanged(date(2026, 2, 3)));

        ctrl.set_view(ViewType::Day);
        assert_eq!(ctrl.next(), CalendarNotification::DateChanged(date(2026, 2, 4)));
    }

    #[test]
    fn test_go_to_today_keeps_view() {
        let mut ctrl = controller(CalendarConfig::default());
        ctrl.set_view(ViewType::Year);
        let notification = ctrl.go_to_today();
        assert_eq!(notification, CalendarNotification::DateChanged(ctrl.today()));
        assert_eq!(ctrl.reference(), ctrl.today());
        assert_eq!(ctrl.view(), ViewType::Year);
    }

    #[test]
    fn test_set_view_respects_available_views() {
        let mut ctrl = controller(CalendarConfig {
            available_views: Some(vec![ViewType::Month, ViewType::Week]),
            ..Default::default()
        });
        assert_eq!(
            ctrl.set_view(ViewType::Week),
            Some(CalendarNotification::ViewChanged(ViewType::Week))
        );
        assert_eq!(ctrl.set_view(ViewType::Year), None);
        assert_eq!(ctrl.view(), ViewType::Week);
    }

    #[test]
    fn test_select_day_moves_reference() {
        let mut ctrl = controller(CalendarConfig::default());
        assert_eq!(
            ctrl.select_day(date(2026, 1, 2)),
            CalendarNotification::DaySelected(date(2026, 1, 2))
        );
        let rows = ctrl.month_grid(&[]);
        let selected: Vec<NaiveDate> = rows
            .iter()
            .flat_map(|r| r.days.iter())
            .filter(|c| c.is_selected)
            .map(|c| c.date)
            .collect();
        assert_eq!(selected, vec![date(2026, 1, 2)]);
    }

    #[test]
    fn test_open_month_switches_to_month_view() {
        let mut ctrl = controller(CalendarConfig::default());
        ctrl.set_view(ViewType::Year);
        let notification = ctrl.open_month(date(2026, 7, 1));
        assert_eq!(notification, Some(CalendarNotification::ViewChanged(ViewType::Month)));
        assert_eq!(ctrl.reference(), date(2026, 7, 1));
    }

    #[test]
    fn test_activate_event_clones_event() {
        let ctrl = controller(CalendarConfig::default());
        let event: Event = Event::new("Demo", at(2026, 1, 31, 10));
        assert_eq!(
            ctrl.activate_event(&event),
            CalendarNotification::EventActivated(event.clone())
        );
    }

    #[test]
    fn test_drag_and_drop_flow() {
        let mut ctrl = controller(CalendarConfig::default());
        let event: Event = Event::new("Demo", at(2026, 1, 31, 10));

        assert!(ctrl.begin_drag(&event));
        assert!(ctrl.is_dragging());
        ctrl.drag_hover(date(2026, 2, 1));

        match ctrl.drop_on(date(2026, 2, 3)) {
            Some(CalendarNotification::MoveRequested(request)) => {
                assert_eq!(request.event.title, "Demo");
                assert_eq!(request.from, at(2026, 1, 31, 10));
                assert_eq!(request.to, date(2026, 2, 3));
            }
            other => panic!("expected move request, got {:?}", other),
        }
        assert!(!ctrl.is_dragging());
    }

    #[test]
    fn test_drag_disabled() {
        let mut ctrl = controller(CalendarConfig {
            drag_and_drop_enabled: Some(false),
            ..Default::default()
        });
        let event: Event = Event::new("Demo", at(2026, 1, 31, 10));
        assert!(!ctrl.begin_drag(&event));
        assert_eq!(ctrl.drop_on(date(2026, 2, 3)), None);
    }

    #[test]
    fn test_cancel_drag() {
        let mut ctrl = controller(CalendarConfig::default());
        let event: Event = Event::new("Demo", at(2026, 1, 31, 10));
        ctrl.begin_drag(&event);
        ctrl.cancel_drag();
        assert_eq!(ctrl.drop_on(date(2026, 2, 3)), None);
    }

    #[test]
    fn test_labels_follow_locale_and_week_start() {
        let ctrl = controller(CalendarConfig {
            week_starts_on: Some(1),
            ..Default::default()
        })
        .with_locale("es");
        assert_eq!(ctrl.weekday_labels()[0], "Lun");
        assert_eq!(ctrl.current_month_name(), "Enero");
        assert_eq!(ctrl.current_year(), "2026");
        assert_eq!(ctrl.labels().view_label(ViewType::Year), "Año");
    }

    #[test]
    fn test_host_translator_is_consulted() {
        let translator = |_: &str, key: &str| {
            (key == "calendar.months").then(|| {
                crate::services::i18n::TranslationValue::List(
                    (1..=12).map(|m| format!("M{}", m)).collect(),
                )
            })
        };
        let ctrl: CalendarController =
            controller(CalendarConfig::default()).with_translator(Arc::new(translator));
        assert_eq!(ctrl.current_month_name(), "M1");
    }

    #[test]
    fn test_set_config_and_locale_keep_position() {
        let mut ctrl = controller(CalendarConfig::default());
        ctrl.set_view(ViewType::Week);
        assert_eq!(ctrl.weekday_labels()[0], "Sun");
        assert_eq!(ctrl.week_grid(&[])[0].date, date(2026, 1, 25));

        ctrl.set_config(&CalendarConfig {
            week_starts_on: Some(1),
            available_views: Some(vec![ViewType::Month]),
            ..Default::default()
        });
        ctrl.set_locale("es");

        // Position survives, even though week view is no longer offered
        assert_eq!(ctrl.view(), ViewType::Week);
        assert_eq!(ctrl.reference(), date(2026, 1, 31));
        assert_eq!(ctrl.locale(), "es");
        assert_eq!(ctrl.config().week_start(), 1);
        assert_eq!(ctrl.weekday_labels()[0], "Lun");
        assert_eq!(ctrl.current_month_name(), "Enero");
        assert_eq!(ctrl.week_grid(&[])[0].date, date(2026, 1, 26));
        assert_eq!(ctrl.set_view(ViewType::Day), None);
    }

    #[test]
    fn test_event_class_uses_global_first() {
        let ctrl = controller(CalendarConfig::default()).with_event_class("hub-event");
        let mut event: Event = Event::new("Demo", at(2026, 1, 31, 10));
        event.css_class = Some(StyleSource::literal("demo"));
        assert_eq!(ctrl.event_class(&event), "hub-event demo");
    }

    #[test]
    fn test_render_helpers_use_config() {
        let ctrl = controller(CalendarConfig {
            week_starts_on: Some(1),
            show_week_numbers: Some(true),
            day_start_hour: Some(9),
            day_end_hour: Some(17),
            ..Default::default()
        });
        let events: Vec<Event> = vec![Event::new("Demo", at(2026, 1, 31, 10))];

        let rows = ctrl.month_grid(&events);
        assert_eq!(rows[0].days[0].date, date(2025, 12, 29));
        assert!(rows.iter().all(|r| r.week_number.is_some()));

        let week = ctrl.week_grid(&events);
        assert_eq!(week[0].date, date(2026, 1, 26));
        assert_eq!(week[5].events.len(), 1);

        let day = ctrl.day_cell(&events);
        assert!(day.is_selected);
        assert_eq!(day.events.len(), 1);

        let months = ctrl.year_summary(&events);
        assert_eq!(months[0].event_count, 1);

        assert_eq!(ctrl.time_slots().len(), 8);
    }
}
