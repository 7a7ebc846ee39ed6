use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::error::CalendarError;
use crate::models::settings::{CalendarConfig, ResolvedConfig};

const CONFIG_FILE_NAME: &str = "calendar.toml";

/// Loads and stores calendar options as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointed at the per-user config location, if one exists.
    pub fn from_default_location() -> Option<Self> {
        default_config_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the overrides from disk. A missing file yields empty overrides.
    pub fn load(&self) -> Result<CalendarConfig> {
        if !self.path.exists() {
            log::debug!("No calendar config at {}, using defaults", self.path.display());
            return Ok(CalendarConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read calendar config from {}", self.path.display()))?;
        let config = parse_config(&content)
            .with_context(|| format!("failed to parse calendar config {}", self.path.display()))?;

        log::info!("Loaded calendar config from {}", self.path.display());
        Ok(config)
    }

    /// Load, resolve and validate.
    pub fn load_resolved(&self) -> Result<ResolvedConfig> {
        let resolved = self.load()?.resolve();
        resolved
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;
        Ok(resolved)
    }

    /// Write the overrides, creating parent directories as needed.
    pub fn save(&self, config: &CalendarConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(config).context("failed to serialize calendar config")?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write calendar config to {}", self.path.display()))?;
        Ok(())
    }
}

/// Parse TOML overrides.
pub fn parse_config(content: &str) -> Result<CalendarConfig, CalendarError> {
    Ok(toml::from_str(content)?)
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "calendar-grid", "calendar-grid")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
