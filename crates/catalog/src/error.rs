use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The catalog has no entries, so there is nothing to select.
	#[error("catalog contains no entries")]
	Empty,

	/// Two entries share the same identifier.
	#[error("entry id '{id}' is defined more than once")]
	DuplicateId { id: String },

	/// An entry was defined without any code to show.
	#[error("entry '{id}' has no code")]
	EmptyCode { id: String },

	/// A required text field is blank.
	#[error("entry '{id}' has an empty {field}")]
	EmptyField { id: String, field: &'static str },

	/// A catalog document could not be parsed.
	#[error("failed to parse catalog document {source_name}: {message}")]
	Parse { source_name: String, message: String },

	/// A catalog file could not be read.
	#[error("failed to read catalog file {path:?}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}
