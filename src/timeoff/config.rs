use crate::error::{Result, TimeoffError};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECENT_LIMIT: usize = 3;
const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Configuration for timeoff, stored in config.json next to the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeoffConfig {
    /// How many applications the dashboard shows under "Recently applied"
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// strftime format for rendered dates (e.g. "%b %-d, %Y", "%Y-%m-%d")
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for TimeoffConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl TimeoffConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TimeoffError::Io)?;
        let config: TimeoffConfig =
            serde_json::from_str(&content).map_err(TimeoffError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TimeoffError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TimeoffError::Serialization)?;
        fs::write(config_path, content).map_err(TimeoffError::Io)?;
        Ok(())
    }

    /// Get a value by its CLI key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "recent-limit" => Some(self.recent_limit.to_string()),
            "date-format" => Some(self.date_format.clone()),
            _ => None,
        }
    }

    /// Set a value by its CLI key, validating it first
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "recent-limit" => {
                let limit = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid recent-limit: {} (expected a number)", value))?;
                self.recent_limit = limit;
                Ok(())
            }
            "date-format" => {
                // An unparsable strftime string would render as garbage
                // every time a date is shown.
                if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
                    return Err(format!("Invalid date format: {}", value));
                }
                self.date_format = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
