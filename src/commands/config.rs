use crate::core::config::{Config, CONFIG_KEYS};
use anyhow::{Context, Result};
use colored::Colorize;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("path", _)) => path(),
        Some(("reset", _)) => reset(),
        Some(("set", sub_matches)) => set(sub_matches),
        _ => {
            println!("Use 'taskbar config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    let path = Config::get_config_path()?;

    println!("{}", format!("Configuration ({})", path.display()).white());
    println!(
        "{}",
        serde_json::to_string_pretty(&config).context("Failed to serialize config")?
    );

    Ok(())
}

fn path() -> Result<()> {
    let path = Config::get_config_path()?;
    println!("{}", path.display().to_string().cyan().bold());
    Ok(())
}

fn reset() -> Result<()> {
    Config::default().save()?;
    println!("{}", "✓ Configuration reset to defaults".green());
    Ok(())
}

fn set(matches: &clap::ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    let mut config = Config::load()?;
    if let Err(e) = config.set_value(key, value) {
        println!("{}", format!("✗ {}", e).red());
        println!("{}", format!("Valid keys: {}", CONFIG_KEYS.join(", ")).dimmed());
        return Err(e.into());
    }
    config.save()?;

    println!("{} {}", format!("✓ {} set to:", key).green(), value);

    Ok(())
}
