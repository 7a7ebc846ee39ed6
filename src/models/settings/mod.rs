// Settings module
// User-supplied calendar options and the resolved record the engine reads

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::models::ui::ViewType;

/// Calendar options as supplied by the host. Every field is optional; unset
/// fields fall back to the defaults in [`ResolvedConfig::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(alias = "initialView", skip_serializing_if = "Option::is_none")]
    pub initial_view: Option<ViewType>,
    #[serde(alias = "weekStartsOn", skip_serializing_if = "Option::is_none")]
    pub week_starts_on: Option<u8>,
    #[serde(alias = "showWeekNumbers", skip_serializing_if = "Option::is_none")]
    pub show_week_numbers: Option<bool>,
    #[serde(alias = "dayStartHour", skip_serializing_if = "Option::is_none")]
    pub day_start_hour: Option<u32>,
    #[serde(alias = "dayEndHour", skip_serializing_if = "Option::is_none")]
    pub day_end_hour: Option<u32>,
    /// Minutes per time slot in day and week views.
    #[serde(alias = "slotDuration", skip_serializing_if = "Option::is_none")]
    pub slot_duration: Option<u32>,
    #[serde(alias = "availableViews", skip_serializing_if = "Option::is_none")]
    pub available_views: Option<Vec<ViewType>>,
    #[serde(alias = "dragAndDropEnabled", skip_serializing_if = "Option::is_none")]
    pub drag_and_drop_enabled: Option<bool>,
    #[serde(alias = "eventCreationEnabled", skip_serializing_if = "Option::is_none")]
    pub event_creation_enabled: Option<bool>,
}

impl CalendarConfig {
    /// Merge the defaults under these overrides. Never fails; see
    /// [`ResolvedConfig::validate`] for range checks.
    pub fn resolve(&self) -> ResolvedConfig {
        let defaults = ResolvedConfig::default();
        ResolvedConfig {
            initial_view: self.initial_view.unwrap_or(defaults.initial_view),
            week_starts_on: self.week_starts_on.unwrap_or(defaults.week_starts_on),
            show_week_numbers: self.show_week_numbers.unwrap_or(defaults.show_week_numbers),
            day_start_hour: self.day_start_hour.unwrap_or(defaults.day_start_hour),
            day_end_hour: self.day_end_hour.unwrap_or(defaults.day_end_hour),
            slot_duration: self.slot_duration.unwrap_or(defaults.slot_duration),
            available_views: self
                .available_views
                .clone()
                .unwrap_or(defaults.available_views),
            drag_and_drop_enabled: self
                .drag_and_drop_enabled
                .unwrap_or(defaults.drag_and_drop_enabled),
            event_creation_enabled: self
                .event_creation_enabled
                .unwrap_or(defaults.event_creation_enabled),
        }
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merged_with(&self, other: &CalendarConfig) -> CalendarConfig {
        CalendarConfig {
            initial_view: other.initial_view.or(self.initial_view),
            week_starts_on: other.week_starts_on.or(self.week_starts_on),
            show_week_numbers: other.show_week_numbers.or(self.show_week_numbers),
            day_start_hour: other.day_start_hour.or(self.day_start_hour),
            day_end_hour: other.day_end_hour.or(self.day_end_hour),
            slot_duration: other.slot_duration.or(self.slot_duration),
            available_views: other
                .available_views
                .clone()
                .or_else(|| self.available_views.clone()),
            drag_and_drop_enabled: other.drag_and_drop_enabled.or(self.drag_and_drop_enabled),
            event_creation_enabled: other
                .event_creation_enabled
                .or(self.event_creation_enabled),
        }
    }
}

/// Fully resolved calendar options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub initial_view: ViewType,
    pub week_starts_on: u8,
    pub show_week_numbers: bool,
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    pub slot_duration: u32,
    pub available_views: Vec<ViewType>,
    pub drag_and_drop_enabled: bool,
    pub event_creation_enabled: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            initial_view: ViewType::Month,
            week_starts_on: 0, // Sunday
            show_week_numbers: false,
            day_start_hour: 0,
            day_end_hour: 24,
            slot_duration: 60,
            available_views: ViewType::ALL.to_vec(),
            drag_and_drop_enabled: true,
            event_creation_enabled: true,
        }
    }
}

impl ResolvedConfig {
    /// Check ranges the engine relies on for sensible output.
    pub fn validate(&self) -> Result<()> {
        if self.week_starts_on > 6 {
            return Err(CalendarError::InvalidWeekStart(self.week_starts_on));
        }

        if self.day_start_hour >= self.day_end_hour || self.day_end_hour > 24 {
            return Err(CalendarError::InvalidDayHours {
                start: self.day_start_hour,
                end: self.day_end_hour,
            });
        }

        if self.slot_duration == 0 || self.slot_duration > 24 * 60 {
            return Err(CalendarError::InvalidSlotDuration(self.slot_duration));
        }

        if self.available_views.is_empty() {
            return Err(CalendarError::NoAvailableViews);
        }

        if !self.available_views.contains(&self.initial_view) {
            return Err(CalendarError::InitialViewUnavailable(
                self.initial_view.to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_view_available(&self, view: ViewType) -> bool {
        self.available_views.contains(&view)
    }

    /// Week start reduced into 0..=6 for callers that skipped validation.
    pub fn week_start(&self) -> u8 {
        self.week_starts_on % 7
    }
}
