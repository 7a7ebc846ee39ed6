//! Calendar option loading and storage.

mod service;

pub use service::{default_config_path, parse_config, SettingsService};
