use std::fmt;

use serde::{Deserialize, Serialize};

/// Named form of the light/dark preference, used by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
	#[default]
	Light,
	Dark,
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		})
	}
}

/// Whether the dark theme is active.
///
/// Only an explicit [`toggle`](Self::toggle) mutates it; the renderer is the
/// only reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
	dark: bool,
}

impl ThemePreference {
	#[must_use]
	pub fn new(dark: bool) -> Self {
		Self { dark }
	}

	/// Flip between light and dark.
	pub fn toggle(&mut self) {
		self.dark = !self.dark;
		tracing::debug!(mode = %self.mode(), "toggled theme");
	}

	/// `true` when the dark theme is active.
	#[must_use]
	pub fn current(&self) -> bool {
		self.dark
	}

	#[must_use]
	pub fn is_dark(&self) -> bool {
		self.dark
	}

	#[must_use]
	pub fn mode(&self) -> ThemeMode {
		if self.dark {
			ThemeMode::Dark
		} else {
			ThemeMode::Light
		}
	}
}

impl From<ThemeMode> for ThemePreference {
	fn from(mode: ThemeMode) -> Self {
		Self::new(mode == ThemeMode::Dark)
	}
}
