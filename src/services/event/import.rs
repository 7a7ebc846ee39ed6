//! JSON event list loading for hosts that keep events on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::error::CalendarError;
use crate::models::event::Event;

/// Parse a JSON array of events.
pub fn parse_events<T: DeserializeOwned>(content: &str) -> Result<Vec<Event<T>>, CalendarError> {
    let events: Vec<Event<T>> = serde_json::from_str(content)?;
    let inverted = events.iter().filter(|e| e.is_inverted()).count();
    if inverted > 0 {
        log::warn!("{} event(s) end before they start; kept as given", inverted);
    }
    Ok(events)
}

/// Read a JSON event list. A missing file yields no events.
pub fn load_events<T: DeserializeOwned>(path: &Path) -> Result<Vec<Event<T>>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events = parse_events(&data)
        .with_context(|| format!("failed to deserialize events from {}", path.display()))?;
    log::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
