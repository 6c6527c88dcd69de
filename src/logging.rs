//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so events are written to `discolor.log`
//! in the data directory. Filtering follows `DISCOLOR_LOG` (an `EnvFilter`
//! directive) and defaults to `warn`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

pub const LOG_ENV: &str = "DISCOLOR_LOG";
pub const LOG_FILE_NAME: &str = "discolor.log";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Returns the log file path on success.
///
/// Calling this twice is harmless; the second call reports the existing
/// subscriber as an error, which callers may ignore.
pub fn initialize() -> Result<PathBuf> {
	let dir = app_dirs::get_data_dir()?;
	let path = dir.join(LOG_FILE_NAME);
	let file = open_log_file(&dir, &path)?;
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_ansi(false)
		.with_writer(Mutex::new(file))
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}

fn open_log_file(dir: &Path, path: &Path) -> Result<File> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn creates_missing_directory_and_appends() {
		let temp = tempfile::tempdir().unwrap();
		let dir = temp.path().join("nested").join("logs");
		let path = dir.join(LOG_FILE_NAME);

		let first = open_log_file(&dir, &path).unwrap();
		drop(first);
		fs::write(&path, "existing\n").unwrap();
		let _second = open_log_file(&dir, &path).unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "existing\n");
	}
}
