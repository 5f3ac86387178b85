//! Outbound commands for the window manager and tray icons.
//!
//! Commands are fire-and-forget: a sink hands them off and never waits for
//! the window manager to act on them.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{Result, TaskbarError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmCommand {
    ToggleTilingDirection,
    FocusWorkspace(String),
    TogglePause,
    DisableBindingMode(String),
}

impl fmt::Display for WmCommand {
    // Names are substituted as-is; quoting is the command parser's business.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WmCommand::ToggleTilingDirection => write!(f, "toggle-tiling-direction"),
            WmCommand::FocusWorkspace(name) => write!(f, "focus --workspace {}", name),
            WmCommand::TogglePause => write!(f, "wm-toggle-pause"),
            WmCommand::DisableBindingMode(name) => {
                write!(f, "wm-disable-binding-mode --name {}", name)
            }
        }
    }
}

// Serialized in its textual form so JSON consumers can forward it as-is.
impl Serialize for WmCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrayAction {
    LeftClick(String),
    RightClick(String),
}

impl TrayAction {
    pub fn icon_id(&self) -> &str {
        match self {
            TrayAction::LeftClick(id) | TrayAction::RightClick(id) => id,
        }
    }
}

/// Wire form of an outbound action for an external relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    RunCommand {
        command: String,
    },
    #[serde(rename_all = "camelCase")]
    TrayLeftClick {
        icon_id: String,
    },
    #[serde(rename_all = "camelCase")]
    TrayRightClick {
        icon_id: String,
    },
}

impl From<&WmCommand> for OutboundMessage {
    fn from(command: &WmCommand) -> Self {
        OutboundMessage::RunCommand {
            command: command.to_string(),
        }
    }
}

impl From<&TrayAction> for OutboundMessage {
    fn from(action: &TrayAction) -> Self {
        match action {
            TrayAction::LeftClick(id) => OutboundMessage::TrayLeftClick {
                icon_id: id.clone(),
            },
            TrayAction::RightClick(id) => OutboundMessage::TrayRightClick {
                icon_id: id.clone(),
            },
        }
    }
}

/// Destination for user-triggered actions.
pub trait CommandSink {
    fn run_command(&mut self, command: &WmCommand) -> Result<()>;
    fn tray_action(&mut self, action: &TrayAction) -> Result<()>;
}

/// Writes one JSON message per line, for a runtime that owns the real
/// window-manager and tray handles.
pub struct JsonLineSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, message: &OutboundMessage) -> Result<()> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> CommandSink for JsonLineSink<W> {
    fn run_command(&mut self, command: &WmCommand) -> Result<()> {
        self.emit(&OutboundMessage::from(command))
    }

    fn tray_action(&mut self, action: &TrayAction) -> Result<()> {
        self.emit(&OutboundMessage::from(action))
    }
}

/// Spawns `<program> command <words...>` without waiting for it.
pub struct ProcessSink {
    program: String,
}

impl ProcessSink {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to the window-manager program.
    pub fn command_args(command: &WmCommand) -> Vec<String> {
        let rendered = command.to_string();
        std::iter::once("command".to_string())
            .chain(rendered.split_whitespace().map(str::to_string))
            .collect()
    }
}

impl CommandSink for ProcessSink {
    fn run_command(&mut self, command: &WmCommand) -> Result<()> {
        let args = Self::command_args(command);
        log::debug!("Spawning {} {}", self.program, args.join(" "));

        Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                TaskbarError::command(format!("failed to spawn '{}': {}", self.program, e))
            })?;

        Ok(())
    }

    fn tray_action(&mut self, action: &TrayAction) -> Result<()> {
        Err(TaskbarError::command(format!(
            "tray icon '{}' can only be activated through the provider runtime",
            action.icon_id()
        )))
    }
}
