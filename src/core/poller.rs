use crate::core::clock::Clock;
use crate::core::models::PollResult;
use chrono::SecondsFormat;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const RESULT_FILE: &str = "last_poll.json";

const COMPLETION_MESSAGE: &str = "Poll completed successfully";

#[derive(Debug, Error)]
pub enum PollError {
    #[error("Failed to create data directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize poll result")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Performs one poll: ensures the data directory exists, then overwrites
/// `last_poll.json` with a fresh success record. Invocations are assumed
/// non-overlapping; the external scheduler enforces that.
pub fn run_poll(clock: &dyn Clock, data_dir: &Path) -> Result<PollResult, PollError> {
    let started_at = clock.now();
    println!(
        "Starting poll at {}",
        started_at.to_rfc3339_opts(SecondsFormat::Micros, true)
    );
    tracing::info!(%started_at, "Starting poll");

    fs::create_dir_all(data_dir).map_err(|source| PollError::CreateDir {
        path: data_dir.to_path_buf(),
        source,
    })?;

    // TODO: replace the stub record below with real polling work once an
    // upstream data source exists.
    let result = PollResult::success(clock.now(), COMPLETION_MESSAGE);

    let result_path = data_dir.join(RESULT_FILE);
    let json = serde_json::to_string_pretty(&result)?;
    fs::write(&result_path, json).map_err(|source| PollError::WriteFile {
        path: result_path.clone(),
        source,
    })?;

    println!("Poll completed. Results saved to {}", result_path.display());
    tracing::info!(
        path = %result_path.display(),
        status = result.status.as_str(),
        "Poll result written"
    );

    Ok(result)
}
