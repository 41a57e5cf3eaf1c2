use std::fmt::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use showcase_catalog::{Catalog, Tab, ThemeMode};

/// Where the starting theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeOrigin {
	Configured,
	Remembered,
	Default,
}

impl fmt::Display for ThemeOrigin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ThemeOrigin::Configured => "configured",
			ThemeOrigin::Remembered => "remembered",
			ThemeOrigin::Default => "default",
		})
	}
}

/// Application-ready configuration derived from the command line, config
/// files, remembered preferences and defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub catalog_path: Option<PathBuf>,
	pub catalog: Catalog,
	pub title: Option<String>,
	pub theme: ThemeMode,
	pub theme_origin: ThemeOrigin,
	pub initial_query: String,
	pub initial_entry: Option<String>,
	pub initial_tab: Tab,
	pub copy_reset: Duration,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut out = String::from("Effective configuration:\n");
		let source = match &self.catalog_path {
			Some(path) => path.display().to_string(),
			None => "(builtin library)".to_string(),
		};
		let _ = writeln!(out, "  Catalog: {source}");
		let _ = writeln!(out, "  Entries: {}", self.catalog.len());
		if let Some(title) = &self.title {
			let _ = writeln!(out, "  Title: {title}");
		}
		let _ = writeln!(out, "  Theme: {} ({})", self.theme, self.theme_origin);
		let _ = writeln!(out, "  Initial tab: {}", self.initial_tab);
		let _ = writeln!(
			out,
			"  Initial entry: {}",
			self.initial_entry
				.as_deref()
				.unwrap_or_else(|| self.catalog.first().id.as_str())
		);
		if !self.initial_query.is_empty() {
			let _ = writeln!(out, "  Initial query: {}", self.initial_query);
		}
		let _ = writeln!(out, "  Copy reset: {} ms", self.copy_reset.as_millis());
		out
	}
}

#[cfg(test)]
mod tests {
	use showcase_catalog::builtin;

	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			catalog_path: None,
			catalog: builtin().clone(),
			title: Some("Kit".into()),
			theme: ThemeMode::Dark,
			theme_origin: ThemeOrigin::Remembered,
			initial_query: String::new(),
			initial_entry: None,
			initial_tab: Tab::Code,
			copy_reset: Duration::from_millis(1500),
		};

		insta::assert_snapshot!(config.summary(), @r"
		Effective configuration:
		  Catalog: (builtin library)
		  Entries: 10
		  Title: Kit
		  Theme: dark (remembered)
		  Initial tab: code
		  Initial entry: button-primary
		  Copy reset: 1500 ms
		");
	}
}
