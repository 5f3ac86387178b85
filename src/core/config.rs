use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::severity::{Thresholds, ERROR_LIMIT, WARNING_LIMIT};
use super::tray::default_allow_list;
use crate::error::TaskbarError;

pub const DEFAULT_DATE_FORMAT: &str = "%a %-d %b %H:%M";
pub const DEFAULT_WM_PROGRAM: &str = "glazewm";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub warning_limit: f64,
    pub error_limit: f64,
    /// Tray icons whose tooltip contains one of these are shown, in this order
    pub tray_allow_list: Vec<String>,
    /// chrono pattern used when the date provider sends no formatted text
    pub date_format: String,
    pub wm_program: String,
    pub show_audio: bool,
    pub show_media: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warning_limit: WARNING_LIMIT,
            error_limit: ERROR_LIMIT,
            tray_allow_list: default_allow_list(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            wm_program: DEFAULT_WM_PROGRAM.to_string(),
            show_audio: false,
            show_media: false,
        }
    }
}

/// Keys accepted by `config set`.
pub const CONFIG_KEYS: [&str; 7] = [
    "warning_limit",
    "error_limit",
    "tray_allow_list",
    "date_format",
    "wm_program",
    "show_audio",
    "show_media",
];

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        // an unreadable or inconsistent config must not take the bar down
        let config: Config = match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Ignoring corrupt config file {:?}: {}; using defaults",
                    config_path,
                    e
                );
                return Ok(Config::default());
            }
        };

        if let Err(e) = config.validate() {
            log::warn!(
                "Ignoring invalid config file {:?}: {}; using defaults",
                config_path,
                e
            );
            return Ok(Config::default());
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("taskbar").join("config.json"))
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.warning_limit, self.error_limit)
    }

    pub fn validate(&self) -> crate::Result<()> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.warning_limit) || !in_range(self.error_limit) {
            return Err(TaskbarError::config("limits must be between 0 and 100"));
        }
        if self.warning_limit >= self.error_limit {
            return Err(TaskbarError::config(format!(
                "warning_limit ({}) must be below error_limit ({})",
                self.warning_limit, self.error_limit
            )));
        }
        if self.wm_program.trim().is_empty() {
            return Err(TaskbarError::config("wm_program must not be empty"));
        }
        Ok(())
    }

    /// Update one key from its textual form. The result is validated.
    pub fn set_value(&mut self, key: &str, value: &str) -> crate::Result<()> {
        let mut updated = self.clone();
        match key {
            "warning_limit" => updated.warning_limit = parse_number(key, value)?,
            "error_limit" => updated.error_limit = parse_number(key, value)?,
            "tray_allow_list" => {
                updated.tray_allow_list = value
                    .split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            }
            "date_format" => updated.date_format = value.to_string(),
            "wm_program" => updated.wm_program = value.to_string(),
            "show_audio" => updated.show_audio = parse_bool(key, value)?,
            "show_media" => updated.show_media = parse_bool(key, value)?,
            _ => {
                return Err(TaskbarError::unknown_key(format!(
                    "config key '{}' (expected one of: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> crate::Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| TaskbarError::config(format!("{} expects a number, got '{}'", key, value)))
}

fn parse_bool(key: &str, value: &str) -> crate::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(TaskbarError::config(format!(
            "{} expects true or false, got '{}'",
            key, value
        ))),
    }
}
