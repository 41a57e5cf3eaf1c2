//! Core state container for the showcase front-end.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use showcase_catalog::{Catalog, Clipboard, ClipboardError, SelectionState, Tab, ThemePreference};

use super::copy::CopyRuntime;
use super::detail::DetailState;
use super::sidebar::SidebarState;
use crate::clipboard::Osc52;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{Theme, ThemeSet, builtin_themes};

/// Where the session ended up, handed back when the user quits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
	pub selected_id: String,
	pub active_tab: Tab,
	pub query: String,
	pub theme: ThemePreference,
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the catalog for the whole session along with the
/// selection, theme preference and the caches the renderer needs.
pub struct App<'a> {
	pub catalog: Catalog,
	/// Text input widget for the search filter.
	pub search_input: QueryInput<'a>,
	pub selection: SelectionState,
	pub theme: ThemePreference,
	pub(crate) themes: &'static ThemeSet,
	pub(crate) ui: UiLabels,
	pub(crate) sidebar: SidebarState,
	pub(crate) detail: DetailState,
	pub(crate) copy: CopyRuntime,
	/// Copies go out as OSC 52 on the UI thread when set.
	pub(crate) osc52: Option<Osc52>,
	/// Escape sequences waiting for the next gap between frames.
	pub(crate) terminal_writes: Vec<String>,
	pub(crate) today: Option<NaiveDate>,
}

impl<'a> App<'a> {
	/// Build an app over `catalog` that copies through `clipboard`.
	///
	/// Starts on the first entry with the preview tab, an empty query and
	/// the light theme.
	pub fn new(catalog: Catalog, clipboard: Box<dyn Clipboard + Send>) -> Result<Self> {
		let copy = CopyRuntime::spawn(clipboard).context("failed to start clipboard worker")?;
		let selection = SelectionState::new(&catalog);
		let ui = UiLabels::default();
		let mut search_input = QueryInput::new("");
		let themes = builtin_themes();
		search_input.set_placeholder(
			ui.search_placeholder.clone(),
			themes.theme(ThemePreference::default().mode()).empty_style(),
		);

		let mut app = Self {
			catalog,
			search_input,
			selection,
			theme: ThemePreference::default(),
			themes,
			ui,
			sidebar: SidebarState::default(),
			detail: DetailState::default(),
			copy,
			osc52: None,
			terminal_writes: Vec::new(),
			today: None,
		};
		app.refresh_sidebar();
		Ok(app)
	}

	/// Start with `query` already typed.
	#[must_use]
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.search_input.set_text(query);
		self.refresh_sidebar();
		self
	}

	/// Start on the entry with `id`, which must exist in the catalog.
	#[must_use]
	pub fn with_selected(mut self, id: &str) -> Self {
		self.select(id);
		self
	}

	#[must_use]
	pub fn with_tab(mut self, tab: Tab) -> Self {
		self.selection.set_tab(tab);
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: ThemePreference) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_labels(mut self, ui: UiLabels) -> Self {
		let muted = self.active_theme().empty_style();
		self.search_input
			.set_placeholder(ui.search_placeholder.clone(), muted);
		self.ui = ui;
		self
	}

	/// Override how long the copied indicator stays lit.
	#[must_use]
	pub fn with_copy_reset(mut self, delay: Duration) -> Self {
		self.selection = self.selection.with_reset_delay(delay);
		self
	}

	/// Copy through OSC 52 escapes written by the event loop instead of the
	/// clipboard worker.
	#[must_use]
	pub fn with_osc52(mut self, osc52: Option<Osc52>) -> Self {
		self.osc52 = osc52;
		self
	}

	#[cfg(test)]
	pub(crate) fn with_today(mut self, today: NaiveDate) -> Self {
		self.today = Some(today);
		self
	}

	pub(crate) fn active_theme(&self) -> &'static Theme {
		self.themes.theme(self.theme.mode())
	}

	/// Recompute the sidebar for the current query.
	pub(crate) fn refresh_sidebar(&mut self) {
		self.sidebar.rebuild(&self.catalog, self.search_input.text());
		self.sidebar.sync_selection(self.selection.selected_id());
	}

	/// Select the entry with `id` and reset per-entry view state if it changed.
	pub(crate) fn select(&mut self, id: &str) {
		let before = self.selection.selected_id().to_string();
		self.selection.select_entry(&self.catalog, id);
		self.after_selection(&before);
	}

	/// Step through the visible entries.
	pub(crate) fn move_selection(&mut self, forward: bool) {
		let before = self.selection.selected_id().to_string();
		let visible = self.sidebar.visible_entries(&self.catalog);
		if forward {
			self.selection.select_next(&visible);
		} else {
			self.selection.select_previous(&visible);
		}
		self.after_selection(&before);
	}

	fn after_selection(&mut self, before: &str) {
		if self.selection.selected_id() != before {
			self.detail.reset();
		}
		self.sidebar.sync_selection(self.selection.selected_id());
	}

	pub(crate) fn switch_tab(&mut self, tab: Tab) {
		if self.selection.active_tab() != tab {
			self.detail.reset();
		}
		self.selection.set_tab(tab);
	}

	/// Queue the selected entry's code for the clipboard.
	pub(crate) fn request_copy(&mut self) {
		match self.selection.selected(&self.catalog) {
			Some(entry) => match self.osc52 {
				Some(osc52) => {
					self.terminal_writes.push(osc52.sequence(&entry.code));
					tracing::debug!(entry = %entry.id, "queued osc52 copy");
				}
				None => {
					let id = self.copy.request(entry.code.clone());
					tracing::debug!(request = id, entry = %entry.id, "queued copy");
				}
			},
			None => tracing::warn!(id = %self.selection.selected_id(), "nothing to copy"),
		}
	}

	/// Apply finished clipboard writes and expire the copied flag.
	pub(crate) fn tick(&mut self, now: Instant) {
		while let Some(done) = self.copy.try_recv() {
			tracing::trace!(request = done.id, ok = done.result.is_ok(), "copy finished");
			self.selection.finish_copy(done.result, now);
		}
		self.selection.tick(now);
	}

	/// Write queued escape sequences to `out`. Must run on the thread that
	/// draws, between frames.
	pub(crate) fn flush_terminal_writes<W: Write>(&mut self, out: &mut W, now: Instant) {
		if self.terminal_writes.is_empty() {
			return;
		}
		let pending = std::mem::take(&mut self.terminal_writes);
		let written = pending
			.iter()
			.try_for_each(|sequence| out.write_all(sequence.as_bytes()))
			.and_then(|()| out.flush());
		self.selection
			.finish_copy(written.map_err(ClipboardError::Io), now);
	}

	pub(crate) fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			selected_id: self.selection.selected_id().to_string(),
			active_tab: self.selection.active_tab(),
			query: self.search_input.text().to_string(),
			theme: self.theme,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io;
	use std::thread;

	use showcase_catalog::builtin;

	use super::*;
	use crate::test_support::SharedClipboard;

	fn app() -> App<'static> {
		App::new(builtin().clone(), Box::new(SharedClipboard::default())).expect("app")
	}

	fn wait_for_copy(app: &mut App<'_>, now: Instant) {
		let deadline = Instant::now() + Duration::from_secs(5);
		while app.copy.in_flight() > 0 {
			assert!(Instant::now() < deadline, "clipboard worker timed out");
			app.tick(now);
			thread::sleep(Duration::from_millis(2));
		}
	}

	#[test]
	fn starts_on_first_entry_with_everything_visible() {
		let app = app();
		assert_eq!(app.selection.selected_id(), "button-primary");
		assert_eq!(app.selection.active_tab(), Tab::Preview);
		assert_eq!(app.sidebar.visible.len(), 10);
		assert!(!app.theme.is_dark());
	}

	#[test]
	fn filtering_keeps_hidden_selection() {
		let mut app = app().with_query("card");
		assert_eq!(app.sidebar.visible, ["card-basic"]);
		assert_eq!(app.selection.selected_id(), "button-primary");
		assert_eq!(app.sidebar.list_state.selected(), None);

		app.move_selection(true);
		assert_eq!(app.selection.selected_id(), "card-basic");
	}

	#[test]
	fn selecting_resets_scroll_but_keeps_tab() {
		let mut app = app().with_tab(Tab::Code);
		app.detail.scroll = 7;
		app.select("debounce");
		assert_eq!(app.detail.scroll, 0);
		assert_eq!(app.selection.active_tab(), Tab::Code);
	}

	#[test]
	fn copied_flag_outlives_first_copy_when_copied_again() {
		let clipboard = SharedClipboard::default();
		let mut app = App::new(builtin().clone(), Box::new(clipboard.clone()))
			.expect("app")
			.with_selected("format-date");
		let start = Instant::now();

		app.request_copy();
		wait_for_copy(&mut app, start);
		assert!(app.selection.copied());

		let second = start + Duration::from_millis(1500);
		app.request_copy();
		wait_for_copy(&mut app, second);

		app.tick(start + Duration::from_millis(2100));
		assert!(app.selection.copied());
		app.tick(second + Duration::from_millis(2000));
		assert!(!app.selection.copied());

		let code = &builtin().get("format-date").expect("entry").code;
		assert_eq!(clipboard.written(), [code.clone(), code.clone()]);
	}

	struct ClosedTerminal;

	impl Write for ClosedTerminal {
		fn write(&mut self, _: &[u8]) -> io::Result<usize> {
			Err(io::Error::from(io::ErrorKind::BrokenPipe))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn osc52_copies_are_written_by_the_drawing_thread() {
		let clipboard = SharedClipboard::default();
		let osc52 = Osc52::new(false);
		let mut app = App::new(builtin().clone(), Box::new(clipboard.clone()))
			.expect("app")
			.with_osc52(Some(osc52))
			.with_selected("debounce");

		app.request_copy();
		assert_eq!(app.copy.in_flight(), 0);
		assert!(!app.selection.copied());

		let mut terminal = Vec::new();
		app.flush_terminal_writes(&mut terminal, Instant::now());
		let code = &builtin().get("debounce").expect("entry").code;
		assert_eq!(terminal, osc52.sequence(code).into_bytes());
		assert!(app.selection.copied());
		assert!(clipboard.written().is_empty());

		let mut again = Vec::new();
		app.flush_terminal_writes(&mut again, Instant::now());
		assert!(again.is_empty());
	}

	#[test]
	fn failed_osc52_write_leaves_flag_down() {
		let mut app = app().with_osc52(Some(Osc52::new(true)));
		app.request_copy();
		app.flush_terminal_writes(&mut ClosedTerminal, Instant::now());
		assert!(!app.selection.copied());
		assert!(app.terminal_writes.is_empty());
	}

	#[test]
	fn outcome_reports_session_state() {
		let mut app = app().with_query("util").with_selected("validate-email");
		app.theme.toggle();
		app.switch_tab(Tab::Code);
		assert_eq!(
			app.outcome(),
			SessionOutcome {
				selected_id: "validate-email".into(),
				active_tab: Tab::Code,
				query: "util".into(),
				theme: ThemePreference::new(true),
			}
		);
	}
}
