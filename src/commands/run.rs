//! Stream provider updates and print the bar after each one.

use anyhow::{Context, Result};
use clap::ArgMatches;
use tokio::io::{AsyncBufRead, BufReader};

use super::output::OutputMode;
use crate::core::config::Config;
use crate::core::runtime;

type UpdateReader = Box<dyn AsyncBufRead + Unpin + Send>;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let mode = OutputMode::from_matches(matches);
    let input = matches.get_one::<String>("input").cloned();

    // single logical stream, so one thread is enough
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    rt.block_on(async move {
        let reader = open_input(input.as_deref()).await?;

        let render = |snapshot: &crate::core::Snapshot| match mode.render(snapshot, &config) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("Failed to render bar: {}", e),
        };

        tokio::select! {
            snapshot = runtime::drive(reader, render) => {
                log::info!("Update stream closed; {} subsystems reported", snapshot.present().len());
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted, shutting down");
            }
        }

        Ok::<(), anyhow::Error>(())
    })
}

async fn open_input(path: Option<&str>) -> Result<UpdateReader> {
    match path {
        None | Some("-") => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open update stream: {}", path))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}
