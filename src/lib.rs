// Calendar grid library
// Date-grid generation and event distribution for month, week, day and year views

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::CalendarError;
pub use models::day::{DayCell, MonthSummary, TimeSlot, WeekRow};
pub use models::event::{Event, EventBuilder, EventId, StyleSource};
pub use models::settings::{CalendarConfig, ResolvedConfig};
pub use models::ui::{NavDirection, ViewType};
pub use services::calendar::{CalendarController, CalendarNotification, MoveRequest};
pub use services::i18n::{LabelResolver, TranslationValue, Translator};
