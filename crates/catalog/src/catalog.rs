use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::entry::Entry;
use crate::error::CatalogError;

/// The ordered, immutable list of entries the browser presents.
///
/// Construction validates the entry invariants, so every other component can
/// rely on ids being unique, code being present, and at least one entry
/// existing to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
	entries: Vec<Entry>,
}

/// On-disk shape of a catalog document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogDocument {
	#[serde(default)]
	pub(crate) entries: Vec<Entry>,
}

impl CatalogDocument {
	pub(crate) fn parse(source_name: &str, contents: &str) -> Result<Self, CatalogError> {
		toml::from_str(contents).map_err(|err| CatalogError::Parse {
			source_name: source_name.to_string(),
			message: err.to_string(),
		})
	}
}

impl Catalog {
	/// Validate `entries` and wrap them in a catalog, keeping their order.
	pub fn new(entries: Vec<Entry>) -> Result<Self, CatalogError> {
		if entries.is_empty() {
			return Err(CatalogError::Empty);
		}

		let mut seen = HashSet::with_capacity(entries.len());
		for entry in &entries {
			validate_entry(entry)?;
			if !seen.insert(entry.id.as_str()) {
				return Err(CatalogError::DuplicateId {
					id: entry.id.clone(),
				});
			}
		}

		Ok(Self { entries })
	}

	/// Parse a TOML document with an `[[entries]]` array.
	pub fn from_toml_str(source_name: &str, contents: &str) -> Result<Self, CatalogError> {
		let document = CatalogDocument::parse(source_name, contents)?;
		Self::new(document.entries)
	}

	/// Read and parse a catalog document from disk.
	pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
		let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let catalog = Self::from_toml_str(&path.display().to_string(), &contents)?;
		tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded catalog file");
		Ok(catalog)
	}

	/// The entry selected when a session starts.
	#[must_use]
	pub fn first(&self) -> &Entry {
		// `new` rejects empty catalogs.
		&self.entries[0]
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<&Entry> {
		self.entries.iter().find(|entry| entry.id == id)
	}

	#[must_use]
	pub fn contains(&self, id: &str) -> bool {
		self.get(id).is_some()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always `false`; present for API symmetry with `len`.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
		self.entries.iter()
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a Entry;
	type IntoIter = std::slice::Iter<'a, Entry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

fn validate_entry(entry: &Entry) -> Result<(), CatalogError> {
	let blank = |field: &'static str| CatalogError::EmptyField {
		id: entry.id.clone(),
		field,
	};

	if entry.id.trim().is_empty() {
		return Err(blank("id"));
	}
	if entry.name.trim().is_empty() {
		return Err(blank("name"));
	}
	if entry.category.trim().is_empty() {
		return Err(blank("category"));
	}
	if entry.code.is_empty() {
		return Err(CatalogError::EmptyCode {
			id: entry.id.clone(),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;
	use crate::entry::Preview;

	fn entry(id: &str, name: &str, category: &str) -> Entry {
		Entry::new(id, name, category, format!("<{name} />"))
	}

	#[test]
	fn rejects_empty_catalog() {
		assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
	}

	#[test]
	fn rejects_duplicate_ids() {
		let result = Catalog::new(vec![
			entry("btn1", "Primary Button", "Buttons"),
			entry("btn1", "Other Button", "Buttons"),
		]);
		match result {
			Err(CatalogError::DuplicateId { id }) => assert_eq!(id, "btn1"),
			other => panic!("expected duplicate id error, got {other:?}"),
		}
	}

	#[test]
	fn rejects_entries_without_code() {
		let mut broken = entry("btn1", "Primary Button", "Buttons");
		broken.code.clear();
		assert!(matches!(
			Catalog::new(vec![broken]),
			Err(CatalogError::EmptyCode { .. })
		));
	}

	#[test]
	fn rejects_blank_category() {
		let result = Catalog::new(vec![entry("btn1", "Primary Button", "  ")]);
		match result {
			Err(CatalogError::EmptyField { field, .. }) => assert_eq!(field, "category"),
			other => panic!("expected empty field error, got {other:?}"),
		}
	}

	#[test]
	fn lookups_follow_catalog_order() {
		let catalog = Catalog::new(vec![
			entry("btn1", "Primary Button", "Buttons"),
			entry("card1", "Basic Card", "Cards"),
		])
		.expect("valid catalog");

		assert_eq!(catalog.first().id, "btn1");
		assert_eq!(catalog.get("card1").map(|e| e.name.as_str()), Some("Basic Card"));
		assert!(!catalog.contains("missing"));
		let ids: Vec<_> = catalog.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, ["btn1", "card1"]);
	}

	#[test]
	fn parses_toml_documents() {
		let source = r#"
[[entries]]
id = "badge"
name = "Status Badge"
category = "Data Display"
description = "A small badge"
code = "<Badge />"

[entries.preview]
kind = "badges"

[[entries.preview.badges]]
variant = "success"
label = "Done"
"#;
		let catalog = Catalog::from_toml_str("inline", source).expect("parses");
		let badge = catalog.first();
		assert!(badge.props.is_none());
		match &badge.preview {
			Preview::Badges { badges } => {
				assert_eq!(badges.len(), 1);
				assert_eq!(badges[0].label, "Done");
			}
			other => panic!("unexpected preview {other:?}"),
		}
	}

	#[test]
	fn malformed_documents_report_their_source() {
		let err = Catalog::from_toml_str("broken.toml", "[[entries]\nid = ").unwrap_err();
		match err {
			CatalogError::Parse { source_name, .. } => assert_eq!(source_name, "broken.toml"),
			other => panic!("expected parse error, got {other:?}"),
		}
	}

	#[test]
	fn reads_catalog_files_from_disk() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file");
		writeln!(
			file,
			"[[entries]]\nid = \"x\"\nname = \"X\"\ncategory = \"Misc\"\ndescription = \"\"\ncode = \"x()\"\n\n[entries.preview]\nkind = \"format_date\""
		)
		.expect("write catalog");

		let catalog = Catalog::from_path(file.path()).expect("loads");
		assert_eq!(catalog.len(), 1);
		assert_eq!(catalog.first().preview, Preview::FormatDate);
	}

	#[test]
	fn missing_files_surface_io_errors() {
		let dir = tempfile::tempdir().expect("temp dir");
		let err = Catalog::from_path(&dir.path().join("absent.toml")).unwrap_err();
		assert!(matches!(err, CatalogError::Io { .. }));
	}
}
