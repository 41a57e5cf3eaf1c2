//! Selection state for the detail view.
//!
//! [`SelectionState`] tracks which entry is shown, which view tab is active,
//! and whether the "copied" indicator is lit. Time is passed in explicitly so
//! the reset of the indicator can be driven by the event loop and by tests
//! alike.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::clipboard::{Clipboard, ClipboardError};
use crate::entry::Entry;

/// How long the copied indicator stays lit after a successful copy.
pub const COPY_RESET_DELAY: Duration = Duration::from_millis(2000);

/// The two views of the selected entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
	#[default]
	Preview,
	Code,
}

impl Tab {
	/// Every tab in display order.
	pub const ALL: [Tab; 2] = [Tab::Preview, Tab::Code];

	/// The other tab.
	#[must_use]
	pub fn next(self) -> Self {
		match self {
			Tab::Preview => Tab::Code,
			Tab::Code => Tab::Preview,
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Tab::Preview => "Preview",
			Tab::Code => "Code",
		}
	}
}

impl fmt::Display for Tab {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Tab::Preview => "preview",
			Tab::Code => "code",
		})
	}
}

/// The selected entry, the active tab, and the transient copied flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
	selected_id: String,
	active_tab: Tab,
	copied: bool,
	reset_at: Option<Instant>,
	reset_delay: Duration,
}

impl SelectionState {
	/// Start on the first catalog entry with the preview tab active.
	#[must_use]
	pub fn new(catalog: &Catalog) -> Self {
		Self {
			selected_id: catalog.first().id.clone(),
			active_tab: Tab::Preview,
			copied: false,
			reset_at: None,
			reset_delay: COPY_RESET_DELAY,
		}
	}

	/// Override how long the copied indicator stays lit.
	#[must_use]
	pub fn with_reset_delay(mut self, delay: Duration) -> Self {
		self.reset_delay = delay;
		self
	}

	#[must_use]
	pub fn selected_id(&self) -> &str {
		&self.selected_id
	}

	/// Resolve the selected entry against `catalog`.
	#[must_use]
	pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a Entry> {
		catalog.get(&self.selected_id)
	}

	#[must_use]
	pub fn active_tab(&self) -> Tab {
		self.active_tab
	}

	#[must_use]
	pub fn copied(&self) -> bool {
		self.copied
	}

	/// When the pending reset of the copied flag will fire, if one is scheduled.
	#[must_use]
	pub fn reset_deadline(&self) -> Option<Instant> {
		self.reset_at
	}

	/// Select the entry with `id`.
	///
	/// Callers must only pass ids drawn from `catalog`. An unknown id is a
	/// programming error: debug builds panic, release builds log and leave the
	/// selection untouched. The active tab is never changed.
	pub fn select_entry(&mut self, catalog: &Catalog, id: &str) {
		let known = catalog.contains(id);
		debug_assert!(known, "selected id '{id}' is not in the catalog");
		if !known {
			tracing::warn!(id, "ignoring selection of unknown entry");
			return;
		}
		if self.selected_id != id {
			tracing::debug!(id, "selected entry");
			self.selected_id = id.to_string();
		}
	}

	/// Move to the entry after the current one within `visible`.
	///
	/// When the current selection is filtered out, the first visible entry is
	/// selected instead. `visible` must come from the session's catalog.
	/// Returns whether the selection changed.
	pub fn select_next(&mut self, visible: &[&Entry]) -> bool {
		let target = match self.position_in(visible) {
			Some(index) => visible.get(index + 1),
			None => visible.first(),
		};
		self.adopt(target.copied())
	}

	/// Move to the entry before the current one within `visible`.
	///
	/// When the current selection is filtered out, the last visible entry is
	/// selected instead. Returns whether the selection changed.
	pub fn select_previous(&mut self, visible: &[&Entry]) -> bool {
		let target = match self.position_in(visible) {
			Some(index) => index.checked_sub(1).and_then(|prev| visible.get(prev)),
			None => visible.last(),
		};
		self.adopt(target.copied())
	}

	/// Switch the detail view to `tab`.
	pub fn set_tab(&mut self, tab: Tab) {
		if self.active_tab != tab {
			tracing::debug!(%tab, "switched tab");
		}
		self.active_tab = tab;
	}

	/// Copy the selected entry's code through `clipboard`.
	///
	/// On success the copied flag is raised and its reset is scheduled
	/// [`COPY_RESET_DELAY`] after `now`, replacing any reset still pending from
	/// an earlier copy. On failure the error is logged and the flag keeps its
	/// current value. Returns whether the write succeeded.
	pub fn copy<C>(&mut self, catalog: &Catalog, clipboard: &mut C, now: Instant) -> bool
	where
		C: Clipboard + ?Sized,
	{
		let result = match self.selected(catalog) {
			Some(entry) => clipboard.write_text(&entry.code),
			None => {
				tracing::warn!(id = %self.selected_id, "selected entry vanished before copy");
				return false;
			}
		};
		self.finish_copy(result, now)
	}

	/// Apply the outcome of a clipboard write that completed at `now`.
	pub fn finish_copy(&mut self, result: Result<(), ClipboardError>, now: Instant) -> bool {
		match result {
			Ok(()) => {
				self.copied = true;
				self.reset_at = Some(now + self.reset_delay);
				tracing::debug!(id = %self.selected_id, "copied code to clipboard");
				true
			}
			Err(err) => {
				tracing::warn!(id = %self.selected_id, error = %err, "failed to copy code");
				false
			}
		}
	}

	/// Fire the pending reset if its deadline has passed.
	///
	/// Returns whether the copied flag changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		match self.reset_at {
			Some(deadline) if now >= deadline => {
				self.reset_at = None;
				let was_copied = self.copied;
				self.copied = false;
				was_copied
			}
			_ => false,
		}
	}

	fn position_in(&self, visible: &[&Entry]) -> Option<usize> {
		visible
			.iter()
			.position(|entry| entry.id == self.selected_id)
	}

	fn adopt(&mut self, target: Option<&Entry>) -> bool {
		match target {
			Some(entry) if entry.id != self.selected_id => {
				tracing::debug!(id = %entry.id, "selected entry");
				self.selected_id = entry.id.clone();
				true
			}
			_ => false,
		}
	}
}
