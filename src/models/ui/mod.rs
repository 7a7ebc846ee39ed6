// UI models module
// View modes and navigation direction shared by the engine and the host

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Month,
    Week,
    Day,
    Year,
}

impl ViewType {
    pub const ALL: [ViewType; 4] = [ViewType::Month, ViewType::Week, ViewType::Day, ViewType::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Month => "month",
            ViewType::Week => "week",
            ViewType::Day => "day",
            ViewType::Year => "year",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(ViewType::Month),
            "week" => Ok(ViewType::Week),
            "day" => Ok(ViewType::Day),
            "year" => Ok(ViewType::Year),
            _ => Err(CalendarError::UnknownView(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    pub fn sign(&self) -> i32 {
        match self {
            NavDirection::Previous => -1,
            NavDirection::Next => 1,
        }
    }
}
