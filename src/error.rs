//! Error type for configuration and input loading.
//!
//! Grid building, event distribution and navigation never fail; only
//! validating or parsing host-supplied configuration can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("week start day must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidWeekStart(u8),

    #[error("day hours must satisfy 0 <= start < end <= 24, got {start}..{end}")]
    InvalidDayHours { start: u32, end: u32 },

    #[error("slot duration must be between 1 and 1440 minutes, got {0}")]
    InvalidSlotDuration(u32),

    #[error("at least one view must be available")]
    NoAvailableViews,

    #[error("initial view '{0}' is not among the available views")]
    InitialViewUnavailable(String),

    #[error("unknown view '{0}'")]
    UnknownView(String),

    #[error("invalid calendar config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid event list: {0}")]
    EventParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
