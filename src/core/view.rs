//! Bar view model derived from a snapshot.
//!
//! `compose` is recomputed from scratch for every snapshot. The result is
//! renderer-independent: the terminal renderer and the JSON output both read
//! it, and every interactive element carries the command it triggers.

use chrono::{Local, TimeZone};
use serde::Serialize;
use std::fmt::Write;

use super::config::Config;
use super::details::{battery_details, cpu_details, format_details};
use super::format::{format_memory_title, format_percent, format_rounded};
use super::providers::*;
use super::severity::{Severity, Thresholds};
use super::snapshot::Snapshot;
use super::tray::{has_connection_error, select_tray_icons};
use super::wm_command::{TrayAction, WmCommand};

/// Battery health below this selects the warning icon, independent of the
/// severity limits.
pub const BATTERY_HEALTH_ICON_LIMIT: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRightLeft,
    ArrowUpDown,
    Wifi,
    WifiHigh,
    WifiLow,
    WifiZero,
    WifiOff,
    Microchip,
    Cpu,
    BatteryWarning,
    BatteryCharging,
    BatteryFull,
    BatteryMedium,
    BatteryLow,
    BatteryEmpty,
    Cloud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Network,
    Memory,
    Cpu,
    Battery,
    Weather,
}

/// One stat indicator. `disabled` marks a provider that has not reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub kind: IndicatorKind,
    pub icon: Option<Icon>,
    pub label: Option<String>,
    pub title: Option<String>,
    pub severity: Severity,
    pub disabled: bool,
}

impl Indicator {
    fn unavailable(kind: IndicatorKind, icon: Icon) -> Self {
        Self {
            kind,
            icon: Some(icon),
            label: None,
            title: None,
            severity: Severity::Normal,
            disabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TilingToggle {
    pub direction: TilingDirection,
    pub icon: Icon,
    pub command: WmCommand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorBadge {
    /// Position of the current monitor in the monitor list, if listed.
    pub index: Option<usize>,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceButton {
    pub label: String,
    pub active: bool,
    pub displayed: bool,
    pub command: WmCommand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandButton {
    pub label: String,
    pub command: WmCommand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrayEntry {
    pub id: String,
    pub tooltip: String,
    pub icon_url: Option<String>,
    pub error: bool,
    pub left_click: TrayAction,
    pub right_click: TrayAction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarView {
    pub tiling: Option<TilingToggle>,
    pub monitor: Option<MonitorBadge>,
    pub workspaces: Vec<WorkspaceButton>,
    pub clock: Option<String>,
    pub paused: Option<CommandButton>,
    pub binding_modes: Vec<CommandButton>,
    pub audio: Option<String>,
    pub media: Option<String>,
    pub indicators: Vec<Indicator>,
    /// `None` while the systray provider is unavailable.
    pub tray: Option<Vec<TrayEntry>>,
}

impl BarView {
    pub fn indicator(&self, kind: IndicatorKind) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.kind == kind)
    }

    /// Every command reachable from a control, in left-to-right order.
    pub fn commands(&self) -> Vec<&WmCommand> {
        self.tiling
            .iter()
            .map(|t| &t.command)
            .chain(self.workspaces.iter().map(|w| &w.command))
            .chain(self.paused.iter().map(|p| &p.command))
            .chain(self.binding_modes.iter().map(|b| &b.command))
            .collect()
    }
}

pub fn compose(snapshot: &Snapshot, config: &Config) -> BarView {
    let thresholds = config.thresholds();
    let glazewm = snapshot.glazewm.as_ref();

    BarView {
        tiling: glazewm.and_then(tiling_toggle),
        monitor: glazewm.and_then(monitor_badge),
        workspaces: glazewm.map(workspace_buttons).unwrap_or_default(),
        clock: snapshot
            .date
            .as_ref()
            .and_then(|date| clock_text(date, &config.date_format)),
        paused: glazewm.filter(|wm| wm.is_paused).map(|_| CommandButton {
            label: "PAUSED".to_string(),
            command: WmCommand::TogglePause,
        }),
        binding_modes: glazewm.map(binding_mode_buttons).unwrap_or_default(),
        audio: snapshot
            .audio
            .as_ref()
            .filter(|_| config.show_audio)
            .and_then(audio_label),
        media: snapshot
            .media
            .as_ref()
            .filter(|_| config.show_media)
            .and_then(media_label),
        indicators: vec![
            network_indicator(snapshot.network.as_ref(), &thresholds),
            memory_indicator(snapshot.memory.as_ref(), &thresholds),
            cpu_indicator(snapshot.cpu.as_ref(), &thresholds),
            battery_indicator(snapshot.battery.as_ref(), &thresholds),
            weather_indicator(snapshot.weather.as_ref()),
        ],
        tray: snapshot
            .systray
            .as_ref()
            .map(|systray| tray_entries(systray, &config.tray_allow_list)),
    }
}

fn tiling_toggle(wm: &GlazeWmOutput) -> Option<TilingToggle> {
    let direction = wm.tiling_direction?;
    let icon = match direction {
        TilingDirection::Horizontal => Icon::ArrowRightLeft,
        TilingDirection::Vertical => Icon::ArrowUpDown,
    };
    Some(TilingToggle {
        direction,
        icon,
        command: WmCommand::ToggleTilingDirection,
    })
}

fn monitor_badge(wm: &GlazeWmOutput) -> Option<MonitorBadge> {
    if wm.all_monitors.is_empty() {
        return None;
    }
    let current = wm.current_monitor.as_ref()?;
    Some(MonitorBadge {
        index: wm.all_monitors.iter().position(|m| m.id == current.id),
        focused: current.has_focus,
    })
}

fn workspace_buttons(wm: &GlazeWmOutput) -> Vec<WorkspaceButton> {
    wm.current_workspaces
        .iter()
        .map(|workspace| WorkspaceButton {
            label: workspace.label().to_string(),
            active: workspace.has_focus,
            displayed: workspace.is_displayed,
            command: WmCommand::FocusWorkspace(workspace.name.clone()),
        })
        .collect()
}

fn binding_mode_buttons(wm: &GlazeWmOutput) -> Vec<CommandButton> {
    wm.binding_modes
        .iter()
        .map(|mode| CommandButton {
            label: mode.label().to_string(),
            command: WmCommand::DisableBindingMode(mode.name.clone()),
        })
        .collect()
}

/// Provider text wins; otherwise format the timestamp in local time.
pub fn clock_text(date: &DateOutput, pattern: &str) -> Option<String> {
    if let Some(formatted) = date.formatted.as_ref().filter(|s| !s.is_empty()) {
        return Some(formatted.clone());
    }
    let now = date.now?;
    let Some(time) = Local.timestamp_millis_opt(now).single() else {
        log::warn!("Date provider sent an out-of-range timestamp: {}", now);
        return None;
    };

    // chrono reports a bad pattern as a formatting error
    let mut text = String::new();
    if write!(text, "{}", time.format(pattern)).is_err() {
        log::warn!("Invalid date format '{}'", pattern);
        return None;
    }
    Some(text)
}

fn audio_label(audio: &AudioOutput) -> Option<String> {
    let device = audio.default_playback_device.as_ref()?;
    Some(format!("{}-{}", device.name, format_rounded(device.volume)))
}

fn media_label(media: &MediaOutput) -> Option<String> {
    let session = media.current_session.as_ref()?;
    let title = session.title.as_deref().filter(|t| !t.is_empty())?;
    Some(match session.artist.as_deref().filter(|a| !a.is_empty()) {
        Some(artist) => format!("{}-{}", title, artist),
        None => title.to_string(),
    })
}

/// Wifi glyph for a signal strength; very weak signals get none.
pub fn signal_icon(strength: f64) -> Option<Icon> {
    if strength > 80.0 {
        Some(Icon::Wifi)
    } else if strength > 50.0 {
        Some(Icon::WifiHigh)
    } else if strength > 25.0 {
        Some(Icon::WifiLow)
    } else if strength > 10.0 {
        Some(Icon::WifiZero)
    } else {
        None
    }
}

/// Battery glyph. Health and charging state take precedence over charge.
pub fn battery_icon(battery: &BatteryOutput) -> Option<Icon> {
    let worn = battery
        .health_percent
        .is_some_and(|health| health < BATTERY_HEALTH_ICON_LIMIT);
    if worn {
        return Some(Icon::BatteryWarning);
    }
    if battery.is_charging {
        return Some(Icon::BatteryCharging);
    }

    let charge = battery.charge_percent?;
    if charge > 80.0 {
        Some(Icon::BatteryFull)
    } else if charge > 50.0 {
        Some(Icon::BatteryMedium)
    } else if charge > 25.0 {
        Some(Icon::BatteryLow)
    } else if charge > 10.0 {
        Some(Icon::BatteryEmpty)
    } else if charge != 0.0 && !charge.is_nan() {
        // the bar has always shown a full outline below 10%
        Some(Icon::BatteryFull)
    } else {
        None
    }
}

fn network_indicator(network: Option<&NetworkOutput>, thresholds: &Thresholds) -> Indicator {
    let Some(gateway) = network.and_then(|n| n.default_gateway.as_ref()) else {
        return Indicator::unavailable(IndicatorKind::Network, Icon::WifiOff);
    };
    let Some(strength) = gateway.signal_strength else {
        // wired or unknown strength
        return Indicator {
            kind: IndicatorKind::Network,
            icon: Some(Icon::Wifi),
            label: gateway.ssid.clone(),
            title: None,
            severity: Severity::Normal,
            disabled: false,
        };
    };

    Indicator {
        kind: IndicatorKind::Network,
        icon: signal_icon(strength),
        label: gateway.ssid.clone(),
        title: Some(format!("Strength: {}%", format_rounded(strength))),
        severity: thresholds.classify_inverted(strength),
        disabled: false,
    }
}

fn memory_indicator(memory: Option<&MemoryOutput>, thresholds: &Thresholds) -> Indicator {
    let Some(memory) = memory else {
        return Indicator::unavailable(IndicatorKind::Memory, Icon::Microchip);
    };
    Indicator {
        kind: IndicatorKind::Memory,
        icon: Some(Icon::Microchip),
        label: Some(format_percent(memory.usage)),
        title: Some(format_memory_title(memory.free_memory, memory.total_memory)),
        severity: thresholds.classify(memory.usage),
        disabled: false,
    }
}

fn cpu_indicator(cpu: Option<&CpuOutput>, thresholds: &Thresholds) -> Indicator {
    let Some(cpu) = cpu else {
        return Indicator::unavailable(IndicatorKind::Cpu, Icon::Cpu);
    };
    Indicator {
        kind: IndicatorKind::Cpu,
        icon: Some(Icon::Cpu),
        label: Some(format_percent(cpu.usage)),
        title: Some(format_details(&cpu_details(cpu))).filter(|t| !t.is_empty()),
        severity: thresholds.classify(cpu.usage),
        disabled: false,
    }
}

fn battery_indicator(battery: Option<&BatteryOutput>, thresholds: &Thresholds) -> Indicator {
    let Some(battery) = battery else {
        return Indicator::unavailable(IndicatorKind::Battery, Icon::BatteryWarning);
    };
    // unreported readings do not count against the battery
    let severity = [battery.charge_percent, battery.health_percent]
        .into_iter()
        .flatten()
        .map(|value| thresholds.classify_inverted(value))
        .max()
        .unwrap_or_default();

    Indicator {
        kind: IndicatorKind::Battery,
        icon: battery_icon(battery),
        label: battery.charge_percent.map(format_percent),
        title: Some(format_details(&battery_details(battery))).filter(|t| !t.is_empty()),
        severity,
        disabled: false,
    }
}

/// Weather has no severity tier of its own.
fn weather_indicator(weather: Option<&WeatherOutput>) -> Indicator {
    let Some(weather) = weather else {
        return Indicator::unavailable(IndicatorKind::Weather, Icon::Cloud);
    };
    Indicator {
        kind: IndicatorKind::Weather,
        icon: Some(Icon::Cloud),
        label: Some(format!("{}°C", format_rounded(weather.celsius_temp))),
        title: weather.status.clone(),
        severity: Severity::Normal,
        disabled: false,
    }
}

fn tray_entries(systray: &SystrayOutput, allow_list: &[String]) -> Vec<TrayEntry> {
    select_tray_icons(&systray.icons, allow_list)
        .into_iter()
        .map(|icon| TrayEntry {
            error: has_connection_error(&icon.tooltip),
            left_click: TrayAction::LeftClick(icon.id.clone()),
            right_click: TrayAction::RightClick(icon.id.clone()),
            id: icon.id,
            tooltip: icon.tooltip,
            icon_url: icon.icon_url,
        })
        .collect()
}
