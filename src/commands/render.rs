//! One-shot rendering of a snapshot file.

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::fs;

use super::output::OutputMode;
use crate::core::config::Config;
use crate::core::snapshot::{apply_update, parse_update_str, Snapshot};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("file")
        .context("Snapshot file argument is required")?;

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path))?;
    let snapshot = load_snapshot(&data).with_context(|| format!("Invalid snapshot in {}", path))?;

    let config = Config::load().context("Failed to load config")?;
    let mode = OutputMode::from_matches(matches);
    println!("{}", mode.render(&snapshot, &config)?);

    Ok(())
}

/// A snapshot file is a single update applied to an empty snapshot.
pub fn load_snapshot(data: &str) -> crate::Result<Snapshot> {
    let update = parse_update_str(data)?;
    Ok(apply_update(&Snapshot::default(), &update))
}
