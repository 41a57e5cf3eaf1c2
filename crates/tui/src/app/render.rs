use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, HighlightSpacing, List, ListItem, Paragraph};
use showcase_catalog::{Entry, Tab};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use super::App;
use super::sidebar::SidebarRow;
use crate::components::{
	InputContext, SampleContext, center_block, code_lines, listing, render_input,
	render_scrollbar, render_tab_bar, sample_lines,
};
use crate::style::Theme;

const SIDEBAR_WIDTH: u16 = 34;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let theme = self.active_theme();
		let area = frame.area();
		frame.render_widget(Block::new().style(theme.base), area);

		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([
				Constraint::Length(SIDEBAR_WIDTH.min(area.width / 2)),
				Constraint::Min(1),
			])
			.split(area);

		self.render_sidebar(frame, columns[0], theme);
		self.render_detail(frame, columns[1], theme);
	}

	fn render_sidebar(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let indicator = if self.theme.is_dark() {
			" ☾ dark "
		} else {
			" ☀ light "
		};
		let block = pane(theme)
			.title(Line::styled(format!(" {} ", self.ui.title), theme.header))
			.title(Line::styled(indicator, theme.empty).right_aligned());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(0),
			])
			.split(inner);

		self.search_input.set_style(theme.prompt);
		self.search_input
			.set_placeholder(self.ui.search_placeholder.clone(), theme.empty_style());
		let status = self
			.ui
			.match_count(self.sidebar.visible.len(), self.catalog.len());
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				prompt: &self.ui.search_prompt,
				status: &status,
				area: rows[0],
				theme,
			},
		);
		render_rule(frame, rows[1], theme);

		let list_area = rows[2];
		self.sidebar.area = Some(list_area);
		if self.sidebar.rows.is_empty() {
			let message = Paragraph::new(Line::styled(self.ui.no_matches.as_str(), theme.empty))
				.alignment(Alignment::Center);
			frame.render_widget(message, list_area);
			return;
		}

		let query = self.sidebar.query().to_string();
		let width = usize::from(list_area.width.saturating_sub(2));
		let items: Vec<ListItem> = self
			.sidebar
			.rows
			.iter()
			.map(|row| match row {
				SidebarRow::Category { name, count } => ListItem::new(Line::from(vec![
					Span::styled(
						name.to_uppercase(),
						theme.empty.add_modifier(Modifier::BOLD),
					),
					Span::styled(format!(" {count}"), theme.empty),
				])),
				SidebarRow::Entry { name, .. } => {
					let (shown, _) = name.unicode_truncate(width.saturating_sub(1));
					ListItem::new(highlight_matches(shown, &query, theme))
				}
			})
			.collect();

		let list = List::new(items)
			.highlight_style(theme.row_highlight)
			.highlight_symbol("▌")
			.highlight_spacing(HighlightSpacing::Always);
		frame.render_stateful_widget(list, list_area, &mut self.sidebar.list_state);
	}

	fn render_detail(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let Some(entry) = self.selection.selected(&self.catalog) else {
			let block = pane(theme);
			let inner = block.inner(area);
			frame.render_widget(block, area);
			let message = Paragraph::new(Line::styled(self.ui.no_selection.as_str(), theme.empty))
				.alignment(Alignment::Center);
			frame.render_widget(message, centered_row(inner));
			self.detail.tab_areas.clear();
			self.detail.copy_area = None;
			self.detail.body_area = None;
			return;
		};

		let block = pane(theme)
			.title(Line::styled(format!(" {} ", entry.name), theme.header))
			.title_bottom(Line::styled(format!(" {} ", self.ui.key_hints), theme.empty).right_aligned());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(0),
			])
			.split(inner);

		let summary = Line::from(vec![
			Span::styled(entry.description.as_str(), theme.prompt),
			Span::styled(format!("  · {}", entry.category), theme.empty),
		]);
		frame.render_widget(Paragraph::new(summary), rows[0]);

		let tab = self.selection.active_tab();
		self.detail.tab_areas = render_tab_bar(frame, rows[2], tab, theme);
		self.detail.copy_area = if tab == Tab::Code {
			self.render_copy_button(frame, rows[2], theme)
		} else {
			None
		};
		render_rule(frame, rows[3], theme);

		let body_area = rows[4];
		let lines = match tab {
			Tab::Preview => self.preview_lines(entry, body_area.width, theme),
			Tab::Code => {
				let mut lines = vec![
					Line::styled(self.ui.code_heading.clone(), theme.header),
					Line::default(),
				];
				lines.extend(code_lines(&entry.code, theme));
				lines
			}
		};
		self.detail.measure(lines.len(), body_area);
		let content_area = render_scrollbar(
			frame,
			body_area,
			self.detail.metrics,
			self.detail.scroll,
			theme,
		);
		let scroll = u16::try_from(self.detail.scroll).unwrap_or(u16::MAX);
		frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), content_area);
	}

	fn preview_lines(&self, entry: &Entry, width: u16, theme: &Theme) -> Vec<Line<'static>> {
		let ctx = SampleContext {
			theme,
			today: self
				.today
				.unwrap_or_else(|| chrono::Local::now().date_naive()),
			modal_open: self.detail.modal_open,
		};
		let mut lines = vec![Line::default()];
		lines.extend(center_block(sample_lines(&entry.preview, &ctx), width));
		if let Some(props) = &entry.props {
			lines.push(Line::default());
			lines.extend(listing(&self.ui.props_heading, props, theme.header, theme.code));
		}
		lines
	}

	/// Draw the copy button at the right end of `row` and return its area.
	fn render_copy_button(&self, frame: &mut Frame, row: Rect, theme: &Theme) -> Option<Rect> {
		let copied = self.selection.copied();
		let label = format!(" {} ", self.ui.copy_button(copied));
		let width = u16::try_from(label.width()).ok()?;
		if row.height == 0 || width + 2 > row.width {
			return None;
		}
		let style = if copied {
			theme.palette.success
		} else {
			theme.palette.primary
		};
		let area = Rect::new(row.right() - width, row.y, width, 1);
		frame
			.buffer_mut()
			.set_line(area.x, area.y, &Line::styled(label, style), width);
		Some(area)
	}
}

fn pane(theme: &Theme) -> Block<'static> {
	Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border)
}

fn render_rule(frame: &mut Frame, area: Rect, theme: &Theme) {
	let rule = "─".repeat(usize::from(area.width));
	frame.render_widget(Paragraph::new(Line::styled(rule, theme.border)), area);
}

fn centered_row(area: Rect) -> Rect {
	Rect {
		y: area.y + area.height / 2,
		height: area.height.min(1),
		..area
	}
}

/// Split `name` around case-insensitive occurrences of `query`.
fn highlight_matches(name: &str, query: &str, theme: &Theme) -> Line<'static> {
	let lowered = name.to_lowercase();
	let needle = query.to_lowercase();
	// Byte offsets only line up when lowercasing kept every length.
	if needle.is_empty() || lowered.len() != name.len() {
		return Line::from(Span::raw(name.to_string()));
	}

	let mut spans = Vec::new();
	let mut cursor = 0;
	for (start, matched) in lowered.match_indices(&needle) {
		let end = start + matched.len();
		let (Some(before), Some(hit)) = (name.get(cursor..start), name.get(start..end)) else {
			return Line::from(Span::raw(name.to_string()));
		};
		if !before.is_empty() {
			spans.push(Span::raw(before.to_string()));
		}
		spans.push(Span::styled(hit.to_string(), theme.highlight));
		cursor = end;
	}
	if let Some(rest) = name.get(cursor..)
		&& !rest.is_empty()
	{
		spans.push(Span::raw(rest.to_string()));
	}
	Line::from(spans)
}

#[cfg(test)]
mod tests {
	use showcase_catalog::ThemeMode;

	use super::*;
	use crate::style::builtin_themes;

	#[test]
	fn highlights_every_case_insensitive_match() {
		let theme = builtin_themes().theme(ThemeMode::Light);
		let line = highlight_matches("Button Button", "bu", theme);
		let pieces: Vec<_> = line
			.spans
			.iter()
			.map(|span| (span.content.as_ref(), span.style == theme.highlight))
			.collect();
		assert_eq!(
			pieces,
			[("Bu", true), ("tton ", false), ("Bu", true), ("tton", false)]
		);
	}

	#[test]
	fn empty_query_highlights_nothing() {
		let theme = builtin_themes().theme(ThemeMode::Dark);
		let line = highlight_matches("Basic Card", "", theme);
		assert_eq!(line.spans.len(), 1);
		assert_eq!(line.to_string(), "Basic Card");
	}
}
