// src/util/log.rs

//! File-based tracing setup. The terminal belongs to the UI, so log lines go to
//! `<data_dir>/chatdesk.log` instead of stdout.

use color_eyre::eyre::eyre;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

pub const LOG_FILE_NAME: &str = "chatdesk.log";

/// `DEBUG=true` in the environment switches on debug output.
pub fn debug_enabled() -> bool {
    std::env::var("DEBUG").unwrap_or_default() == "true"
}

pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE_NAME)
}

/// Installs the global subscriber. Must run after the data directory exists.
pub fn init(data_dir: &Path) -> color_eyre::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(data_dir))?;

    let level = if debug_enabled() { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_lives_in_data_dir() {
        let path = log_path(Path::new("./data"));
        assert_eq!(path, Path::new("./data").join("chatdesk.log"));
    }
}
