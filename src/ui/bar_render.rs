// Terminal rendering of the bar view

use colored::{ColoredString, Colorize};

use crate::core::severity::Severity;
use crate::core::view::{BarView, Icon, Indicator, TrayEntry, WorkspaceButton};

const SECTION_SEPARATOR: &str = " | ";

/// Plain output carries no escape codes; severity is marked with `!`/`!!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Plain,
    Colored,
}

/// Short text stand-in for each icon
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::ArrowRightLeft => "⇄",
        Icon::ArrowUpDown => "⇅",
        Icon::Wifi => "wifi▂▄▆█",
        Icon::WifiHigh => "wifi▂▄▆_",
        Icon::WifiLow => "wifi▂▄__",
        Icon::WifiZero => "wifi▂___",
        Icon::WifiOff => "wifi✗",
        Icon::Microchip => "mem",
        Icon::Cpu => "cpu",
        Icon::BatteryWarning => "bat!",
        Icon::BatteryCharging => "bat+",
        Icon::BatteryFull => "bat█",
        Icon::BatteryMedium => "bat▆",
        Icon::BatteryLow => "bat▄",
        Icon::BatteryEmpty => "bat▁",
        Icon::Cloud => "☁",
    }
}

/// Render the whole bar as a single line: left, center, right sections.
pub fn render_bar(view: &BarView, style: RenderStyle) -> String {
    let sections: Vec<String> = [left_section(view, style), center_section(view), right_section(view, style)]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();

    sections.join(SECTION_SEPARATOR)
}

fn left_section(view: &BarView, style: RenderStyle) -> String {
    let mut parts = Vec::new();

    if let Some(tiling) = &view.tiling {
        parts.push(glyph(tiling.icon).to_string());
    }
    if let Some(monitor) = &view.monitor {
        // -1 mirrors an unlisted current monitor
        let index = monitor
            .index
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-1".to_string());
        let text = format!("#{}", index);
        parts.push(match style {
            RenderStyle::Colored if monitor.focused => text.on_blue().to_string(),
            _ => text,
        });
    }
    parts.extend(view.workspaces.iter().map(|w| workspace_text(w, style)));

    parts.join(" ")
}

fn workspace_text(workspace: &WorkspaceButton, style: RenderStyle) -> String {
    let text = if workspace.active {
        format!("[{}]", workspace.label)
    } else if workspace.displayed {
        format!("({})", workspace.label)
    } else {
        workspace.label.clone()
    };

    match style {
        RenderStyle::Plain => text,
        RenderStyle::Colored if workspace.active => text.white().on_blue().bold().to_string(),
        RenderStyle::Colored if workspace.displayed => text.white().on_bright_black().to_string(),
        RenderStyle::Colored => text.dimmed().to_string(),
    }
}

fn center_section(view: &BarView) -> String {
    view.clock.clone().unwrap_or_default()
}

fn right_section(view: &BarView, style: RenderStyle) -> String {
    let mut parts = Vec::new();

    if let Some(paused) = &view.paused {
        parts.push(match style {
            RenderStyle::Plain => paused.label.clone(),
            RenderStyle::Colored => paused.label.red().bold().to_string(),
        });
    }
    for mode in &view.binding_modes {
        let text = format!("<{}>", mode.label);
        parts.push(match style {
            RenderStyle::Plain => text,
            RenderStyle::Colored => text.magenta().to_string(),
        });
    }
    if let Some(audio) = &view.audio {
        parts.push(format!("♪ {}", audio));
    }
    if let Some(media) = &view.media {
        parts.push(format!("▶ {}", media));
    }
    parts.extend(view.indicators.iter().map(|i| indicator_text(i, style)));
    if let Some(tray) = &view.tray {
        parts.extend(tray.iter().map(|t| tray_text(t, style)));
    }

    parts.join(" ")
}

pub fn indicator_text(indicator: &Indicator, style: RenderStyle) -> String {
    let icon = indicator.icon.map(glyph).unwrap_or_default();
    let text = if indicator.disabled {
        format!("{} -", icon)
    } else {
        match &indicator.label {
            Some(label) if icon.is_empty() => label.clone(),
            Some(label) => format!("{} {}", icon, label),
            None => icon.to_string(),
        }
    };

    match style {
        RenderStyle::Plain => match indicator.severity {
            Severity::Normal => text,
            Severity::Warning => format!("{}!", text),
            Severity::Error => format!("{}!!", text),
        },
        RenderStyle::Colored => {
            if indicator.disabled {
                text.dimmed().to_string()
            } else {
                severity_color(text, indicator.severity).to_string()
            }
        }
    }
}

fn severity_color(text: String, severity: Severity) -> ColoredString {
    match severity {
        Severity::Normal => text.normal(),
        Severity::Warning => text.black().on_yellow(),
        Severity::Error => text.white().on_red(),
    }
}

fn tray_text(entry: &TrayEntry, style: RenderStyle) -> String {
    let text = format!("[{}]", entry.id);
    match (style, entry.error) {
        (RenderStyle::Plain, true) => format!("{}!!", text),
        (RenderStyle::Plain, false) => text,
        (RenderStyle::Colored, true) => text.white().on_red().to_string(),
        (RenderStyle::Colored, false) => text.cyan().to_string(),
    }
}

/// Render the view model as one JSON line.
pub fn render_json(view: &BarView) -> crate::Result<String> {
    Ok(serde_json::to_string(view)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::providers::*;
    use crate::core::snapshot::Snapshot;
    use crate::core::view::compose;

    #[test]
    fn test_empty_view_renders_disabled_indicators() {
        let view = compose(&Snapshot::default(), &Config::default());
        assert_eq!(
            render_bar(&view, RenderStyle::Plain),
            "wifi✗ - mem - cpu - bat! - ☁ -"
        );
    }

    #[test]
    fn test_plain_severity_marks() {
        let snapshot = Snapshot {
            cpu: Some(CpuOutput {
                usage: 95.0,
                ..Default::default()
            }),
            memory: Some(MemoryOutput {
                usage: 75.2,
                free_memory: 4_000_000_000,
                total_memory: 16_000_000_000,
            }),
            ..Default::default()
        };
        let view = compose(&snapshot, &Config::default());
        let line = render_bar(&view, RenderStyle::Plain);
        assert!(line.contains("mem 75%!"));
        assert!(line.contains("cpu 95%!!"));
    }

    #[test]
    fn test_sections_and_workspaces() {
        let snapshot = Snapshot {
            glazewm: Some(GlazeWmOutput {
                tiling_direction: Some(TilingDirection::Vertical),
                current_workspaces: vec![
                    Workspace {
                        name: "1".to_string(),
                        has_focus: true,
                        is_displayed: true,
                        ..Default::default()
                    },
                    Workspace {
                        name: "2".to_string(),
                        is_displayed: true,
                        ..Default::default()
                    },
                    Workspace {
                        name: "3".to_string(),
                        ..Default::default()
                    },
                ],
                is_paused: true,
                ..Default::default()
            }),
            date: Some(DateOutput {
                formatted: Some("Tue 4 Mar 09:15".to_string()),
                now: None,
            }),
            ..Default::default()
        };
        let view = compose(&snapshot, &Config::default());
        let line = render_bar(&view, RenderStyle::Plain);
        assert!(line.starts_with("⇅ [1] (2) 3 | Tue 4 Mar 09:15 | PAUSED "));
    }

    #[test]
    fn test_json_output() {
        let view = compose(&Snapshot::default(), &Config::default());
        let json = render_json(&view).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["indicators"][0]["kind"], "network");
        assert_eq!(value["indicators"][0]["icon"], "wifi-off");
        assert_eq!(value["indicators"][0]["disabled"], true);
        assert!(value["tray"].is_null());
    }
}
