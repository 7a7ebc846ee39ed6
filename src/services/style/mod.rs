//! Event class resolution.

use crate::models::event::{Event, StyleSource};

/// Class string for `event`: the global class first, then the event's own
/// class, empty parts dropped, joined with a space.
pub fn resolve_event_class<T>(event: &Event<T>, global: Option<&StyleSource<T>>) -> String {
    [global, event.css_class.as_ref()]
        .into_iter()
        .flatten()
        .map(|source| source.resolve(event))
        .filter(|class| !class.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
