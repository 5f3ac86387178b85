//! Send a single window-manager command or tray action.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::config::Config;
use crate::core::wm_command::{CommandSink, JsonLineSink, ProcessSink, TrayAction, WmCommand};
use crate::error::TaskbarError;

pub const ACTIONS: [&str; 6] = [
    "toggle-tiling",
    "focus",
    "toggle-pause",
    "exit-binding-mode",
    "tray-left",
    "tray-right",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecAction {
    Wm(WmCommand),
    Tray(TrayAction),
}

impl ExecAction {
    pub fn describe(&self) -> String {
        match self {
            ExecAction::Wm(command) => command.to_string(),
            ExecAction::Tray(TrayAction::LeftClick(id)) => format!("tray left-click {}", id),
            ExecAction::Tray(TrayAction::RightClick(id)) => format!("tray right-click {}", id),
        }
    }

    fn send(&self, sink: &mut dyn CommandSink) -> crate::Result<()> {
        match self {
            ExecAction::Wm(command) => sink.run_command(command),
            ExecAction::Tray(action) => sink.tray_action(action),
        }
    }
}

/// Map an action name and its optional target to an outbound action.
pub fn parse_action(name: &str, target: Option<&str>) -> crate::Result<ExecAction> {
    let required = |what: &str| {
        target
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| TaskbarError::command(format!("'{}' needs a {}", name, what)))
    };

    match name {
        "toggle-tiling" => Ok(ExecAction::Wm(WmCommand::ToggleTilingDirection)),
        "focus" => Ok(ExecAction::Wm(WmCommand::FocusWorkspace(required("workspace name")?))),
        "toggle-pause" => Ok(ExecAction::Wm(WmCommand::TogglePause)),
        "exit-binding-mode" => Ok(ExecAction::Wm(WmCommand::DisableBindingMode(required(
            "binding mode name",
        )?))),
        "tray-left" => Ok(ExecAction::Tray(TrayAction::LeftClick(required("tray icon id")?))),
        "tray-right" => Ok(ExecAction::Tray(TrayAction::RightClick(required("tray icon id")?))),
        _ => Err(TaskbarError::unknown_key(format!(
            "action '{}' (expected one of: {})",
            name,
            ACTIONS.join(", ")
        ))),
    }
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let name = matches
        .get_one::<String>("action")
        .context("Action argument is required")?;
    let target = matches.get_one::<String>("target").map(String::as_str);
    let action = parse_action(name, target)?;

    if matches.get_flag("dry-run") {
        println!("{} {}", "Would send:".dimmed(), action.describe().cyan());
        return Ok(());
    }

    if matches.get_flag("emit-json") {
        let mut sink = JsonLineSink::new(std::io::stdout());
        action.send(&mut sink)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load config")?;
    let mut sink = ProcessSink::new(config.wm_program.clone());
    action
        .send(&mut sink)
        .with_context(|| format!("Failed to send '{}' (try --emit-json)", action.describe()))?;
    log::info!("Sent '{}' via {}", action.describe(), config.wm_program);

    Ok(())
}
