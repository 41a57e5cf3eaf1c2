use ratatui::layout::Rect;
use showcase_catalog::Tab;

use crate::components::{ScrollMetrics, point_in_rect};

/// Scroll position and hit areas of the detail pane.
#[derive(Debug, Default)]
pub(crate) struct DetailState {
	pub scroll: usize,
	pub metrics: ScrollMetrics,
	/// Scrollable body area from the last frame.
	pub body_area: Option<Rect>,
	pub tab_areas: Vec<(Tab, Rect)>,
	/// The copy button, only drawn on the code tab.
	pub copy_area: Option<Rect>,
	pub modal_open: bool,
}

impl DetailState {
	/// Forget per-entry view state after the selection or tab changes.
	pub fn reset(&mut self) {
		self.scroll = 0;
		self.modal_open = false;
	}

	pub fn scroll_by(&mut self, delta: isize) {
		self.scroll = self.metrics.clamp(self.scroll.saturating_add_signed(delta));
	}

	/// Record the body size measured while drawing and clamp the scroll to it.
	pub fn measure(&mut self, content_len: usize, area: Rect) {
		self.metrics = ScrollMetrics::compute(content_len, usize::from(area.height));
		self.scroll = self.metrics.clamp(self.scroll);
		self.body_area = Some(area);
	}

	pub fn page_len(&self) -> isize {
		let height = self.body_area.map_or(1, |area| area.height.max(1));
		isize::try_from(height.saturating_sub(1).max(1)).unwrap_or(1)
	}

	pub fn tab_at(&self, column: u16, row: u16) -> Option<Tab> {
		self.tab_areas
			.iter()
			.find(|(_, area)| point_in_rect(column, row, *area))
			.map(|(tab, _)| *tab)
	}

	pub fn copy_button_contains(&self, column: u16, row: u16) -> bool {
		self.copy_area
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	pub fn body_contains(&self, column: u16, row: u16) -> bool {
		self.body_area
			.is_some_and(|area| point_in_rect(column, row, area))
	}
}
