//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while it runs, so events go to a log file.
//! `SHOWCASE_LOG` takes an `EnvFilter` directive and defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_ENV: &str = "SHOWCASE_LOG";
const LOG_FILE_NAME: &str = "showcase.log";

/// Where logs go when `--log-file` is not given.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

/// Install the global subscriber, appending to `path`.
pub fn init(path: &Path) -> Result<()> {
	let file = open_log(path)?;
	tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.compact()
		.try_init()
		.map_err(|err| anyhow!(err))
}
