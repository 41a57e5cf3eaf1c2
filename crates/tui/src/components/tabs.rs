use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use showcase_catalog::Tab;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the search row.
pub struct InputContext<'a> {
	pub search_input: &'a QueryInput<'a>,
	/// Label drawn before the text, e.g. `> `.
	pub prompt: &'a str,
	/// Right-aligned status such as the match count.
	pub status: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the search row: prompt, editable text and the status on the right.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>) {
	let InputContext {
		search_input,
		prompt,
		status,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prompt_width = u16::try_from(prompt.width()).unwrap_or(u16::MAX).min(area.width);
	frame.buffer_mut().set_line(
		area.x,
		area.y,
		&Line::from(Span::styled(prompt.to_string(), theme.header)),
		prompt_width,
	);

	let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);
	let room = area.width.saturating_sub(prompt_width);
	let show_status = !status.is_empty() && status_width + 2 < room;
	let text_width = if show_status {
		room - status_width - 1
	} else {
		room
	};

	search_input.render_textarea(
		frame,
		Rect {
			x: area.x + prompt_width,
			width: text_width,
			height: 1,
			..area
		},
	);

	if show_status {
		frame.buffer_mut().set_line(
			area.right() - status_width,
			area.y,
			&Line::from(Span::styled(status.to_string(), theme.empty_style())),
			status_width,
		);
	}
}

/// Render the tab labels on one row and return where each landed.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab, theme: &Theme) -> Vec<(Tab, Rect)> {
	let mut hits = Vec::with_capacity(Tab::ALL.len());
	if area.height == 0 {
		return hits;
	}

	let mut x = area.x;
	for tab in Tab::ALL {
		let label = format!("  {}  ", tab.label());
		let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
		if x.saturating_add(width) > area.right() {
			break;
		}
		let style = if tab == active {
			theme.tab_active
		} else {
			theme.tab_inactive_style()
		};
		frame
			.buffer_mut()
			.set_line(x, area.y, &Line::from(Span::styled(label, style)), width);
		hits.push((tab, Rect::new(x, area.y, width, 1)));
		x = x.saturating_add(width + 1);
	}
	hits
}
