//! Provider payloads as delivered by the shell runtime.
//!
//! Every struct tolerates missing fields so that partial provider output still
//! decodes. Fields whose absence must not read as zero are `Option`s.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TilingDirection {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Monitor {
    pub id: String,
    pub has_focus: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Workspace {
    pub name: String,
    pub display_name: Option<String>,
    pub has_focus: bool,
    pub is_displayed: bool,
}

impl Workspace {
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BindingMode {
    pub name: String,
    pub display_name: Option<String>,
}

impl BindingMode {
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlazeWmOutput {
    pub tiling_direction: Option<TilingDirection>,
    pub all_monitors: Vec<Monitor>,
    pub current_monitor: Option<Monitor>,
    pub current_workspaces: Vec<Workspace>,
    pub is_paused: bool,
    pub binding_modes: Vec<BindingMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateOutput {
    pub formatted: Option<String>,
    /// Epoch milliseconds.
    pub now: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioDevice {
    pub name: String,
    pub volume: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioOutput {
    pub default_playback_device: Option<AudioDevice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CpuOutput {
    pub usage: f64,
    pub frequency: Option<f64>,
    pub logical_core_count: Option<u32>,
    pub physical_core_count: Option<u32>,
    pub vendor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatteryOutput {
    pub charge_percent: Option<f64>,
    pub health_percent: Option<f64>,
    pub is_charging: bool,
    pub power_consumption: Option<f64>,
    pub voltage: Option<f64>,
    pub time_till_full: Option<f64>,
    pub time_till_empty: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryOutput {
    pub usage: f64,
    pub free_memory: u64,
    pub total_memory: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherOutput {
    pub celsius_temp: f64,
    pub fahrenheit_temp: f64,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaSession {
    pub title: Option<String>,
    pub artist: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaOutput {
    pub current_session: Option<MediaSession>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrayIcon {
    pub id: String,
    pub tooltip: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystrayOutput {
    pub icons: Vec<TrayIcon>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gateway {
    pub ssid: Option<String>,
    pub signal_strength: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkOutput {
    pub default_gateway: Option<Gateway>,
}
