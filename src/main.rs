use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod core;

use crate::core::clock::SystemClock;
use crate::core::poller;
use crate::core::settings::Settings;

#[derive(Parser)]
#[command(name = "poll-runner")]
#[command(author, version, about = "Scheduled poll runner that records a timestamped status file per invocation")]
struct Cli {
    /// Directory the poll result is written into (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Stdout carries the human-readable progress lines, so logs go to stderr.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(()) => {
            println!("✓ Poll completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("✗ Error during polling: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    settings.validate()?;

    let data_dir = cli.data_dir.unwrap_or(settings.data_dir);
    poller::run_poll(&SystemClock, &data_dir)?;

    Ok(())
}
