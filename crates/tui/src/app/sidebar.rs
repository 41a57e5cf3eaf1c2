//! Sidebar rows and their mapping back to catalog entries.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use showcase_catalog::{Catalog, Entry, filter, group};

use crate::components::point_in_rect;

/// One line of the sidebar list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarRow {
	Category { name: String, count: usize },
	Entry { id: String, name: String },
}

/// The filtered, grouped listing shown on the left.
#[derive(Debug, Default)]
pub(crate) struct SidebarState {
	pub rows: Vec<SidebarRow>,
	/// Ids of the matching entries in display order.
	pub visible: Vec<String>,
	pub list_state: ListState,
	/// Inner list area from the last frame.
	pub area: Option<Rect>,
	query: String,
}

impl SidebarState {
	/// Recompute the rows for `query`.
	pub fn rebuild(&mut self, catalog: &Catalog, query: &str) {
		let groups = group(filter(catalog, query));

		self.rows.clear();
		self.visible.clear();
		for (category, entries) in &groups {
			self.rows.push(SidebarRow::Category {
				name: (*category).to_string(),
				count: entries.len(),
			});
			for entry in entries {
				self.rows.push(SidebarRow::Entry {
					id: entry.id.clone(),
					name: entry.name.clone(),
				});
				self.visible.push(entry.id.clone());
			}
		}
		self.query = query.to_string();
		tracing::trace!(query, matches = self.visible.len(), "rebuilt sidebar");
	}

	/// The query the rows were built from.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Resolve the visible ids against `catalog`, in display order.
	pub fn visible_entries<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Entry> {
		self.visible.iter().filter_map(|id| catalog.get(id)).collect()
	}

	/// Point the list highlight at `selected_id`, or at nothing when it is
	/// filtered out.
	pub fn sync_selection(&mut self, selected_id: &str) {
		let row = self.rows.iter().position(
			|row| matches!(row, SidebarRow::Entry { id, .. } if id == selected_id),
		);
		self.list_state.select(row);
		if row.is_none() {
			*self.list_state.offset_mut() = 0;
		}
	}

	/// The entry drawn at a terminal position, if any.
	pub fn entry_at(&self, column: u16, row: u16) -> Option<&str> {
		let area = self.area?;
		if !point_in_rect(column, row, area) {
			return None;
		}
		let index = self.list_state.offset() + usize::from(row - area.y);
		match self.rows.get(index)? {
			SidebarRow::Entry { id, .. } => Some(id.as_str()),
			SidebarRow::Category { .. } => None,
		}
	}

	pub fn contains(&self, column: u16, row: u16) -> bool {
		self.area
			.is_some_and(|area| point_in_rect(column, row, area))
	}
}

#[cfg(test)]
mod tests {
	use showcase_catalog::builtin;

	use super::*;

	#[test]
	fn rows_interleave_headings_and_entries() {
		let mut sidebar = SidebarState::default();
		sidebar.rebuild(builtin(), "button");
		assert_eq!(
			sidebar.rows,
			[
				SidebarRow::Category {
					name: "Buttons".into(),
					count: 2
				},
				SidebarRow::Entry {
					id: "button-primary".into(),
					name: "Primary Button".into()
				},
				SidebarRow::Entry {
					id: "button-secondary".into(),
					name: "Secondary Button".into()
				},
			]
		);
		assert_eq!(sidebar.visible, ["button-primary", "button-secondary"]);
	}

	#[test]
	fn selection_tracks_rows_and_clears_when_hidden() {
		let mut sidebar = SidebarState::default();
		sidebar.rebuild(builtin(), "");
		sidebar.sync_selection("card-basic");
		// Buttons heading, two buttons, Cards heading, card.
		assert_eq!(sidebar.list_state.selected(), Some(4));

		sidebar.rebuild(builtin(), "alert");
		sidebar.sync_selection("card-basic");
		assert_eq!(sidebar.list_state.selected(), None);
	}

	#[test]
	fn hit_testing_skips_headings() {
		let mut sidebar = SidebarState::default();
		sidebar.rebuild(builtin(), "");
		sidebar.area = Some(Rect::new(1, 5, 20, 10));
		assert_eq!(sidebar.entry_at(3, 5), None);
		assert_eq!(sidebar.entry_at(3, 6), Some("button-primary"));
		assert_eq!(sidebar.entry_at(3, 7), Some("button-secondary"));
		assert_eq!(sidebar.entry_at(30, 7), None);
	}

	#[test]
	fn no_match_leaves_no_rows() {
		let mut sidebar = SidebarState::default();
		sidebar.rebuild(builtin(), "xyz-nothing");
		assert!(sidebar.rows.is_empty());
		assert!(sidebar.visible_entries(builtin()).is_empty());
		assert_eq!(sidebar.query(), "xyz-nothing");
	}
}
