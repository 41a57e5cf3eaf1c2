//! Session preferences remembered between runs.
//!
//! Only the theme is persisted. Reads and writes are best-effort: a missing or
//! unreadable file yields defaults and a failed write is logged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use showcase_catalog::ThemeMode;

use crate::app_dirs;

const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
	pub theme: Option<ThemeMode>,
}

impl Preferences {
	/// `<data dir>/preferences.toml`.
	pub fn default_path() -> Result<PathBuf> {
		Ok(app_dirs::get_data_dir()?.join(PREFERENCES_FILE))
	}

	/// Read preferences from `path`, or `None` when the file does not exist.
	pub fn read(path: &Path) -> Result<Option<Self>> {
		let contents = match fs::read_to_string(path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(err) => {
				return Err(err)
					.with_context(|| format!("failed to read preferences {}", path.display()));
			}
		};
		let preferences = toml::from_str(&contents)
			.with_context(|| format!("failed to parse preferences {}", path.display()))?;
		Ok(Some(preferences))
	}

	pub fn write(&self, path: &Path) -> Result<()> {
		if let Some(parent) = path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)
				.with_context(|| format!("failed to create {}", parent.display()))?;
		}
		let contents = toml::to_string(self).context("failed to serialize preferences")?;
		fs::write(path, contents)
			.with_context(|| format!("failed to write preferences {}", path.display()))
	}
}

/// Load preferences from the default location, falling back to defaults.
pub fn load() -> Preferences {
	let loaded = Preferences::default_path().and_then(|path| Preferences::read(&path));
	match loaded {
		Ok(preferences) => preferences.unwrap_or_default(),
		Err(err) => {
			tracing::warn!(error = %format!("{err:#}"), "ignoring stored preferences");
			Preferences::default()
		}
	}
}

/// Remember `theme` for the next session.
pub fn store_theme(theme: ThemeMode) {
	let saved = Preferences::default_path().and_then(|path| {
		Preferences { theme: Some(theme) }.write(&path)?;
		Ok(path)
	});
	match saved {
		Ok(path) => tracing::debug!(path = %path.display(), %theme, "saved theme preference"),
		Err(err) => tracing::warn!(error = %format!("{err:#}"), "failed to save theme preference"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_reads_as_none() {
		let dir = tempfile::tempdir().expect("tempdir");
		let read = Preferences::read(&dir.path().join(PREFERENCES_FILE)).expect("read");
		assert_eq!(read, None);
	}

	#[test]
	fn theme_survives_a_write_and_read() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("data").join(PREFERENCES_FILE);
		Preferences {
			theme: Some(ThemeMode::Dark),
		}
		.write(&path)
		.expect("write");

		assert_eq!(fs::read_to_string(&path).expect("contents").trim(), "theme = \"dark\"");
		let read = Preferences::read(&path).expect("read").expect("present");
		assert_eq!(read.theme, Some(ThemeMode::Dark));
	}

	#[test]
	fn malformed_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join(PREFERENCES_FILE);
		fs::write(&path, "theme = \"sepia\"").expect("write");
		let err = Preferences::read(&path).expect_err("unknown theme");
		assert!(format!("{err:#}").contains("failed to parse preferences"));
	}
}
