//! The builtin component library embedded in the binary.

use std::sync::OnceLock;

use include_dir::{Dir, File, include_dir};

use crate::catalog::{Catalog, CatalogDocument};
use crate::error::CatalogError;

const LIBRARY_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/library");

/// The builtin catalog, parsed once on first use.
pub fn builtin() -> &'static Catalog {
	static LIBRARY: OnceLock<Catalog> = OnceLock::new();
	LIBRARY.get_or_init(|| {
		load_library(&LIBRARY_DIR)
			.unwrap_or_else(|error| panic!("failed to load builtin library: {error}"))
	})
}

/// Concatenate every document in `dir`, ordered by file path.
fn load_library(dir: &Dir) -> Result<Catalog, CatalogError> {
	let mut files: Vec<&File> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut entries = Vec::new();
	for file in files {
		let source_name = file.path().display().to_string();
		let contents = file.contents_utf8().ok_or_else(|| CatalogError::Parse {
			source_name: source_name.clone(),
			message: "not valid UTF-8".to_string(),
		})?;
		entries.extend(CatalogDocument::parse(&source_name, contents)?.entries);
	}

	Catalog::new(entries)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entry::Preview;
	use crate::filter::filter;
	use crate::group::group;

	#[test]
	fn builtin_library_keeps_canonical_order() {
		let ids: Vec<_> = builtin().iter().map(|entry| entry.id.as_str()).collect();
		assert_eq!(
			ids,
			[
				"button-primary",
				"button-secondary",
				"card-basic",
				"input-text",
				"modal-basic",
				"alert-success",
				"badge-primary",
				"format-date",
				"debounce",
				"validate-email",
			]
		);
	}

	#[test]
	fn builtin_categories_group_in_library_order() {
		let catalog = builtin();
		let groups = group(filter(catalog, ""));
		let categories: Vec<_> = groups.keys().copied().collect();
		assert_eq!(
			categories,
			[
				"Buttons",
				"Cards",
				"Form Elements",
				"Overlays",
				"Feedback",
				"Data Display",
				"Utility Functions",
			]
		);
		assert_eq!(groups["Utility Functions"].len(), 3);
	}

	#[test]
	fn only_component_entries_carry_props() {
		let catalog = builtin();
		let with_props: Vec<_> = catalog
			.iter()
			.filter(|entry| entry.props.is_some())
			.map(|entry| entry.id.as_str())
			.collect();
		assert_eq!(with_props, ["button-primary"]);
		for entry in filter(catalog, "utility") {
			assert!(entry.props.is_none(), "{} should not have props", entry.id);
		}
	}

	#[test]
	fn utility_entries_use_computed_previews() {
		let catalog = builtin();
		assert_eq!(
			catalog.get("format-date").map(|entry| &entry.preview),
			Some(&Preview::FormatDate)
		);
		assert!(matches!(
			catalog.get("validate-email").map(|entry| &entry.preview),
			Some(Preview::ValidateEmail { .. })
		));
	}

	#[test]
	fn code_is_kept_verbatim() {
		let validator = builtin().get("validate-email").expect("validator entry");
		assert!(validator.code.contains(r"/^[^\s@]+@[^\s@]+\.[^\s@]+$/"));
		let button = builtin().get("button-primary").expect("button entry");
		assert!(button.code.contains("className={`${baseClasses} ${variants[variant]}`}"));
	}
}
