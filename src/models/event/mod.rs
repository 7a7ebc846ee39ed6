// Event module
// Host-owned calendar event with optional end, style class and payload

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier supplied by the host, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        EventId::Number(value)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        EventId::Text(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        EventId::Text(value)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

/// Function deriving a class name from an event.
pub type DeriveClassFn<T> = dyn Fn(&Event<T>) -> String + Send + Sync;

/// Source of a style class: a fixed string or one derived from the event.
pub enum StyleSource<T = ()> {
    Literal(String),
    Derived(Arc<DeriveClassFn<T>>),
}

impl<T> StyleSource<T> {
    pub fn literal(class: impl Into<String>) -> Self {
        StyleSource::Literal(class.into())
    }

    pub fn derived<F>(f: F) -> Self
    where
        F: Fn(&Event<T>) -> String + Send + Sync + 'static,
    {
        StyleSource::Derived(Arc::new(f))
    }

    /// Resolve the class for `event`.
    pub fn resolve(&self, event: &Event<T>) -> String {
        match self {
            StyleSource::Literal(class) => class.clone(),
            StyleSource::Derived(f) => f(event),
        }
    }
}

impl<T> Clone for StyleSource<T> {
    fn clone(&self) -> Self {
        match self {
            StyleSource::Literal(class) => StyleSource::Literal(class.clone()),
            StyleSource::Derived(f) => StyleSource::Derived(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for StyleSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSource::Literal(class) => f.debug_tuple("Literal").field(class).finish(),
            StyleSource::Derived(_) => f.write_str("Derived(<fn>)"),
        }
    }
}

impl<T> PartialEq for StyleSource<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleSource::Literal(a), StyleSource::Literal(b)) => a == b,
            (StyleSource::Derived(a), StyleSource::Derived(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> From<&str> for StyleSource<T> {
    fn from(value: &str) -> Self {
        StyleSource::Literal(value.to_string())
    }
}

impl<T> From<String> for StyleSource<T> {
    fn from(value: String) -> Self {
        StyleSource::Literal(value)
    }
}

// Only literal classes survive serialization; derived ones are code.
impl<T> Serialize for StyleSource<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleSource::Literal(class) => serializer.serialize_str(class),
            StyleSource::Derived(_) => Err(serde::ser::Error::custom(
                "derived style classes cannot be serialized",
            )),
        }
    }
}

impl<'de, T> Deserialize<'de> for StyleSource<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(StyleSource::Literal)
    }
}

/// Calendar event as supplied by the host application.
///
/// `end` is optional: an event without one is a point event and only shows
/// on the calendar day of its `start`. The engine never mutates events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Event<T = ()> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<StyleSource<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Event<T> {
    /// Create a point event with the required fields
    ///
    /// # Examples
    /// ```
    /// use calendar_grid::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2026, 1, 15)
    ///     .unwrap()
    ///     .and_hms_opt(10, 0, 0)
    ///     .unwrap();
    /// let event: Event = Event::new("Team Meeting", start);
    /// assert!(event.is_point());
    /// ```
    pub fn new(title: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            start,
            end: None,
            all_day: false,
            css_class: None,
            data: None,
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder<T> {
        EventBuilder::new()
    }

    /// True when the event has no end instant.
    pub fn is_point(&self) -> bool {
        self.end.is_none()
    }

    /// The instant the event is considered to last until.
    pub fn effective_end(&self) -> NaiveDateTime {
        self.end.unwrap_or(self.start)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// True when `end` precedes `start`. Such ranges are kept as given.
    pub fn is_inverted(&self) -> bool {
        matches!(self.end, Some(end) if end < self.start)
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder<T = ()> {
    id: Option<EventId>,
    title: Option<String>,
    description: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    all_day: bool,
    css_class: Option<StyleSource<T>>,
    data: Option<T>,
}

impl<T> EventBuilder<T> {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            description: None,
            start: None,
            end: None,
            all_day: false,
            css_class: None,
            data: None,
        }
    }

    pub fn id(mut self, id: impl Into<EventId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set a static or derived style class
    pub fn css_class(mut self, class: impl Into<StyleSource<T>>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Attach a host payload
    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Build the event. Only the title and start are required.
    pub fn build(self) -> Result<Event<T>, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;

        Ok(Event {
            id: self.id,
            title,
            description: self.description,
            start,
            end: self.end,
            all_day: self.all_day,
            css_class: self.css_class,
            data: self.data,
        })
    }
}

impl<T> Default for EventBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
