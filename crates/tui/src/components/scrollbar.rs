//! Scroll bookkeeping and the detail pane scrollbar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// How a body of `content_len` lines fits a viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	pub content_len: usize,
	pub viewport_len: usize,
	pub max_scroll: usize,
}

impl ScrollMetrics {
	#[must_use]
	pub fn compute(content_len: usize, viewport_height: usize) -> Self {
		if content_len == 0 || viewport_height == 0 {
			return Self::default();
		}
		let viewport_len = viewport_height.min(content_len);
		Self {
			content_len,
			viewport_len,
			max_scroll: content_len - viewport_len,
		}
	}

	#[must_use]
	pub fn overflows(&self) -> bool {
		self.max_scroll > 0
	}

	/// Clamp `scroll` into the valid range.
	#[must_use]
	pub fn clamp(&self, scroll: usize) -> usize {
		scroll.min(self.max_scroll)
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= area.y
		&& row < area.y.saturating_add(area.height)
}

/// Draw a scrollbar on the right edge of `area` when the content overflows.
///
/// Returns the area left for the content itself.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	scroll: usize,
	theme: &Theme,
) -> Rect {
	if !metrics.overflows() || area.width < 2 {
		return area;
	}

	let mut state = ScrollbarState::new(metrics.max_scroll)
		.position(scroll)
		.viewport_content_length(metrics.viewport_len);
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.track_style(theme.border)
		.thumb_style(theme.header);
	frame.render_stateful_widget(scrollbar, area, &mut state);

	Rect {
		width: area.width - 1,
		..area
	}
}
