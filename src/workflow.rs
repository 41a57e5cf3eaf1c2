use anyhow::Result;
use showcase_catalog::ThemePreference;
use showcase_tui::{App, Osc52, SessionOutcome, TerminalClipboard, UiLabels};

use crate::settings::ResolvedConfig;

/// Builds the browser from resolved settings and runs it.
pub(crate) struct ShowcaseWorkflow {
	app: App<'static>,
}

impl ShowcaseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			catalog,
			title,
			theme,
			initial_query,
			initial_entry,
			initial_tab,
			copy_reset,
			..
		} = config;

		let mut labels = UiLabels::default();
		if let Some(title) = title {
			labels = labels.with_title(title);
		}

		let mut app = App::new(catalog, Box::new(TerminalClipboard))?
			.with_labels(labels)
			.with_theme(ThemePreference::from(theme))
			.with_copy_reset(copy_reset)
			.with_tab(initial_tab)
			.with_osc52(Osc52::detect());
		if let Some(id) = initial_entry {
			app = app.with_selected(&id);
		}
		if !initial_query.is_empty() {
			app = app.with_query(initial_query);
		}

		Ok(Self { app })
	}

	pub(crate) fn run(mut self) -> Result<SessionOutcome> {
		self.app.run()
	}
}
