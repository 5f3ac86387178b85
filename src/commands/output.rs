//! Shared output selection for commands that print the bar.

use anyhow::Result;
use clap::ArgMatches;
use std::io::IsTerminal;

use crate::core::config::Config;
use crate::core::snapshot::Snapshot;
use crate::core::view::compose;
use crate::ui::{render_bar, render_json, RenderStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Text(RenderStyle),
}

impl OutputMode {
    /// `--json` wins; colors only when stdout is a terminal and `--plain` is unset.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        if matches.get_flag("json") {
            OutputMode::Json
        } else if matches.get_flag("plain") || !std::io::stdout().is_terminal() {
            OutputMode::Text(RenderStyle::Plain)
        } else {
            OutputMode::Text(RenderStyle::Colored)
        }
    }

    pub fn render(&self, snapshot: &Snapshot, config: &Config) -> Result<String> {
        let view = compose(snapshot, config);
        Ok(match self {
            OutputMode::Json => render_json(&view)?,
            OutputMode::Text(style) => render_bar(&view, *style),
        })
    }
}
