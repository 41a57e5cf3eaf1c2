use serde::{Deserialize, Serialize};

/// One catalog record describing a sample UI piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
	/// Stable key, unique across the catalog.
	pub id: String,
	/// Display name shown in the sidebar and the detail header.
	pub name: String,
	/// Free-form grouping key.
	pub category: String,
	/// One-line summary.
	#[serde(default)]
	pub description: String,
	/// Literal source text shown verbatim in the code view.
	pub code: String,
	/// Parameter description, absent for utility-function entries.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub props: Option<String>,
	/// What the renderer draws in the preview tab.
	pub preview: Preview,
}

impl Entry {
	/// Construct an entry with a snippet preview and no props block.
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		category: impl Into<String>,
		code: impl Into<String>,
	) -> Self {
		let code = code.into();
		Self {
			id: id.into(),
			name: name.into(),
			category: category.into(),
			description: String::new(),
			preview: Preview::Snippet { text: code.clone() },
			code,
			props: None,
		}
	}

	/// Attach a description.
	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}
}

/// Something the rendering layer knows how to display.
///
/// The catalog never inspects a preview; each variant names a sample the
/// renderer can draw, with just enough parameters to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Preview {
	/// A clickable button.
	Button {
		#[serde(default)]
		variant: ButtonVariant,
		label: String,
	},
	/// A content card with a banner, title, body and footer date.
	Card {
		title: String,
		body: String,
		date: String,
	},
	/// A labelled single-line input.
	TextInput { label: String, placeholder: String },
	/// A trigger button and the dialog it opens.
	Modal {
		trigger: String,
		title: String,
		body: String,
	},
	/// A status alert.
	Alert {
		#[serde(default)]
		level: AlertLevel,
		title: String,
		message: String,
	},
	/// A row of status badges.
	Badges { badges: Vec<Badge> },
	/// Today's date in long form.
	FormatDate,
	/// The result of running the email validator on `input`.
	ValidateEmail { input: String },
	/// A literal snippet of code.
	Snippet { text: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
	#[default]
	Primary,
	Secondary,
	Danger,
	Success,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
	Success,
	Warning,
	Error,
	#[default]
	Info,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
	#[default]
	Primary,
	Success,
	Warning,
	Danger,
}

/// A single badge in a [`Preview::Badges`] row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
	#[serde(default)]
	pub variant: BadgeVariant,
	pub label: String,
}
