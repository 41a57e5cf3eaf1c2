/// Text drawn around the sidebar and detail pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title of the sidebar block.
	pub title: String,
	/// Drawn before the search text.
	pub search_prompt: String,
	/// Shown while the search box is empty.
	pub search_placeholder: String,
	/// Shown in the sidebar when nothing matches.
	pub no_matches: String,
	/// Shown in the detail pane when no entry resolves.
	pub no_selection: String,
	pub props_heading: String,
	pub code_heading: String,
	pub copy_label: String,
	pub copied_label: String,
	/// Key reminder on the bottom edge of the detail pane.
	pub key_hints: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "UI Showcase".to_string(),
			search_prompt: "> ".to_string(),
			search_placeholder: "Search components...".to_string(),
			no_matches: "No components found".to_string(),
			no_selection: "Select a component to view details".to_string(),
			props_heading: "Props".to_string(),
			code_heading: "Source Code".to_string(),
			copy_label: "Copy Code".to_string(),
			copied_label: "✓ Copied!".to_string(),
			key_hints: "↑↓ browse · Tab view · ^Y copy · ^T theme · Esc quit".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the sidebar title.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Label for the copy button in its current state.
	#[must_use]
	pub fn copy_button(&self, copied: bool) -> &str {
		if copied {
			&self.copied_label
		} else {
			&self.copy_label
		}
	}

	/// Match counter shown at the end of the search row.
	#[must_use]
	pub fn match_count(&self, matches: usize, total: usize) -> String {
		if matches == total {
			format!("{total}")
		} else {
			format!("{matches}/{total}")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn copy_button_reflects_flag() {
		let labels = UiLabels::default();
		assert_eq!(labels.copy_button(false), "Copy Code");
		assert_eq!(labels.copy_button(true), "✓ Copied!");
	}

	#[test]
	fn match_count_collapses_when_unfiltered() {
		let labels = UiLabels::default().with_title("Widgets");
		assert_eq!(labels.title, "Widgets");
		assert_eq!(labels.match_count(10, 10), "10");
		assert_eq!(labels.match_count(3, 10), "3/10");
	}
}
