use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use showcase_catalog::{COPY_RESET_DELAY, Catalog, Tab, ThemeMode, builtin};
use showcase_tui::builtin_themes;

use super::resolved::{ResolvedConfig, ThemeOrigin};
use crate::cli::CliArgs;
use crate::preferences::Preferences;

/// Configuration as read from files and the environment, before CLI
/// overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	theme: Option<String>,
	initial_query: Option<String>,
	initial_entry: Option<String>,
	initial_tab: Option<String>,
	copy_reset_ms: Option<u64>,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.catalog.path = Some(path);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(id) = cli.select.clone() {
			self.ui.initial_entry = Some(id);
		}
		if let Some(tab) = cli.tab {
			self.ui.initial_tab = Some(tab.as_str().to_string());
		}
	}

	/// Validate every value and fill in defaults. A configured theme wins over
	/// the one remembered in `persisted`.
	pub(super) fn resolve(self, persisted: &Preferences) -> Result<ResolvedConfig> {
		let catalog = match &self.catalog.path {
			Some(path) => Catalog::from_path(path)
				.with_context(|| format!("failed to load catalog {}", path.display()))?,
			None => builtin().clone(),
		};

		let (theme, theme_origin) = match (&self.ui.theme, persisted.theme) {
			(Some(name), _) => (parse_theme(name)?, ThemeOrigin::Configured),
			(None, Some(mode)) => (mode, ThemeOrigin::Remembered),
			(None, None) => (ThemeMode::default(), ThemeOrigin::Default),
		};

		let initial_tab = match &self.ui.initial_tab {
			Some(name) => parse_tab(name)?,
			None => Tab::default(),
		};

		if let Some(id) = &self.ui.initial_entry
			&& !catalog.contains(id)
		{
			bail!("unknown entry id '{id}' (try --list to see the available ids)");
		}

		let copy_reset = self
			.ui
			.copy_reset_ms
			.map_or(COPY_RESET_DELAY, Duration::from_millis);

		Ok(ResolvedConfig {
			catalog_path: self.catalog.path,
			catalog,
			title: self.ui.title,
			theme,
			theme_origin,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			initial_entry: self.ui.initial_entry,
			initial_tab,
			copy_reset,
		})
	}
}

fn parse_theme(name: &str) -> Result<ThemeMode> {
	let themes = builtin_themes();
	match themes.resolve(name) {
		Some(mode) => Ok(mode),
		None => bail!(
			"unknown theme '{name}' (expected one of: {})",
			themes.names().join(", ")
		),
	}
}

fn parse_tab(name: &str) -> Result<Tab> {
	match name.trim().to_ascii_lowercase().as_str() {
		"preview" => Ok(Tab::Preview),
		"code" => Ok(Tab::Code),
		other => bail!("unknown tab '{other}' (expected preview or code)"),
	}
}
