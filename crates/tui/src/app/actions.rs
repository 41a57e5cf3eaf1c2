use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use showcase_catalog::Tab;

use super::{App, SessionOutcome};
use crate::components::samples::is_interactive;

const WHEEL_STEP: isize = 3;

impl<'a> App<'a> {
	/// Process a keyboard event and return the outcome if the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Char('c') if ctrl => return Some(self.outcome()),
			KeyCode::Char('y') if ctrl => self.request_copy(),
			KeyCode::Char('t') if ctrl => self.theme.toggle(),
			KeyCode::Tab | KeyCode::BackTab => {
				self.switch_tab(self.selection.active_tab().next());
			}
			KeyCode::Up => self.move_selection(false),
			KeyCode::Down => self.move_selection(true),
			KeyCode::PageUp => self.detail.scroll_by(-self.detail.page_len()),
			KeyCode::PageDown => self.detail.scroll_by(self.detail.page_len()),
			KeyCode::Enter => self.activate_sample(),
			_ => {
				if self.search_input.input(key) {
					self.refresh_sidebar();
				}
			}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::ScrollUp if self.detail.body_contains(column, row) => {
				self.detail.scroll_by(-WHEEL_STEP);
			}
			MouseEventKind::ScrollDown if self.detail.body_contains(column, row) => {
				self.detail.scroll_by(WHEEL_STEP);
			}
			MouseEventKind::ScrollUp if self.sidebar.contains(column, row) => {
				self.move_selection(false);
			}
			MouseEventKind::ScrollDown if self.sidebar.contains(column, row) => {
				self.move_selection(true);
			}
			MouseEventKind::Down(MouseButton::Left) => self.click(column, row),
			_ => {}
		}
	}

	fn click(&mut self, column: u16, row: u16) {
		if let Some(id) = self.sidebar.entry_at(column, row).map(str::to_string) {
			self.select(&id);
		} else if let Some(tab) = self.detail.tab_at(column, row) {
			self.switch_tab(tab);
		} else if self.detail.copy_button_contains(column, row) {
			self.request_copy();
		}
	}

	/// Toggle the sample's interactive state, if it has one.
	fn activate_sample(&mut self) {
		let interactive = self
			.selection
			.selected(&self.catalog)
			.is_some_and(|entry| is_interactive(&entry.preview));
		if interactive && self.selection.active_tab() == Tab::Preview {
			self.detail.modal_open = !self.detail.modal_open;
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::layout::Rect;
	use showcase_catalog::builtin;

	use super::*;
	use crate::test_support::SharedClipboard;

	fn app() -> App<'static> {
		App::new(builtin().clone(), Box::new(SharedClipboard::default())).expect("app")
	}

	fn press(app: &mut App<'_>, code: KeyCode) -> Option<SessionOutcome> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn ctrl(app: &mut App<'_>, ch: char) -> Option<SessionOutcome> {
		app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
	}

	fn click(app: &mut App<'_>, column: u16, row: u16) {
		app.handle_mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column,
			row,
			modifiers: KeyModifiers::NONE,
		});
	}

	#[test]
	fn typing_filters_the_sidebar() {
		let mut app = app();
		for ch in "alert".chars() {
			press(&mut app, KeyCode::Char(ch));
		}
		assert_eq!(app.search_input.text(), "alert");
		assert_eq!(app.sidebar.visible, ["alert-success"]);
		press(&mut app, KeyCode::Backspace);
		assert_eq!(app.sidebar.query(), "aler");
	}

	#[test]
	fn arrows_walk_visible_entries() {
		let mut app = app();
		press(&mut app, KeyCode::Down);
		assert_eq!(app.selection.selected_id(), "button-secondary");
		press(&mut app, KeyCode::Down);
		assert_eq!(app.selection.selected_id(), "card-basic");
		press(&mut app, KeyCode::Up);
		press(&mut app, KeyCode::Up);
		press(&mut app, KeyCode::Up);
		assert_eq!(app.selection.selected_id(), "button-primary");
	}

	#[test]
	fn tab_keys_flip_the_view() {
		let mut app = app();
		press(&mut app, KeyCode::Tab);
		assert_eq!(app.selection.active_tab(), Tab::Code);
		press(&mut app, KeyCode::BackTab);
		assert_eq!(app.selection.active_tab(), Tab::Preview);
		assert_eq!(app.selection.selected_id(), "button-primary");
	}

	#[test]
	fn ctrl_t_toggles_theme_and_escape_quits() {
		let mut app = app();
		assert!(ctrl(&mut app, 't').is_none());
		assert!(app.theme.is_dark());
		let outcome = press(&mut app, KeyCode::Esc).expect("quit");
		assert!(outcome.theme.is_dark());
		assert!(ctrl(&mut app, 'c').is_some());
	}

	#[test]
	fn enter_opens_modal_only_for_modal_preview() {
		let mut app = app();
		press(&mut app, KeyCode::Enter);
		assert!(!app.detail.modal_open);
		assert_eq!(app.search_input.text(), "");

		app.select("modal-basic");
		press(&mut app, KeyCode::Enter);
		assert!(app.detail.modal_open);
		press(&mut app, KeyCode::Down);
		assert!(!app.detail.modal_open);
	}

	#[test]
	fn clicks_select_entries_and_tabs() {
		let mut app = app();
		app.sidebar.area = Some(Rect::new(1, 3, 30, 20));
		app.detail.tab_areas = vec![
			(Tab::Preview, Rect::new(40, 4, 11, 1)),
			(Tab::Code, Rect::new(52, 4, 8, 1)),
		];

		// Row 3 is the Buttons heading, row 5 the second button.
		click(&mut app, 5, 3);
		assert_eq!(app.selection.selected_id(), "button-primary");
		click(&mut app, 5, 5);
		assert_eq!(app.selection.selected_id(), "button-secondary");

		click(&mut app, 55, 4);
		assert_eq!(app.selection.active_tab(), Tab::Code);
	}
}
