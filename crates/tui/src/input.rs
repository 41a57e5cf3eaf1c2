//! Single-line query input backed by [`tui_textarea`].

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The sidebar search box.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	/// Create an input holding `initial` with the cursor at the end.
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// The current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	///
	/// Line breaks are swallowed so the query stays on one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let is_newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if is_newline {
			return false;
		}
		self.textarea.input(key)
	}

	/// Replace the text, keeping the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let style = self.textarea.style();
		let placeholder = self.textarea.placeholder_text().to_string();
		*self = Self::new(text);
		self.textarea.set_style(style);
		self.textarea.set_placeholder_text(placeholder);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
