mod driver;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xiangqi_core::{RuleConfig, placement};

use crate::driver::Driver;

/// Play xiangqi over a line protocol on stdin/stdout.
#[derive(Parser, Debug)]
#[command(name = "xiangqi", version)]
struct Args {
    /// Rule configuration (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting placement (JSON) instead of the standard opening.
    #[arg(short, long)]
    placement: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RuleConfig::load(path)?,
        None => RuleConfig::default(),
    };

    // stdout carries the protocol, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level in configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let placement = match &args.placement {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read placement {}", path.display()))?;
            Some(placement::from_json(&text)?)
        }
        None => None,
    };

    let mut driver = Driver::new(config, placement)?;
    info!(side = %driver.session().side_to_move(), "session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if !driver.handle(&line, &mut stdout)? {
            break;
        }
        stdout.flush()?;
    }
    Ok(())
}
