//! Resolve configuration, cache, and data directories for `showcase`.
//!
//! Each directory honours an environment override before falling back to the
//! platform location reported by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "showcase";

pub(crate) const CONFIG_DIR_ENV: &str = "SHOWCASE_CONFIG_DIR";
pub(crate) const DATA_DIR_ENV: &str = "SHOWCASE_DATA_DIR";
pub(crate) const CACHE_DIR_ENV: &str = "SHOWCASE_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for showcase"))
}

/// Read a directory override, treating an empty value as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory searched for `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding persisted preferences.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Directory for the default log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.cache_dir().to_path_buf())
}
