mod loader;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use ratatui::style::{Color, Style};
use showcase_catalog::{AlertLevel, BadgeVariant, ButtonVariant, ThemeMode};

const BUILTIN_THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/themes");

/// Styles for every surface the showcase draws.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Background and default text for the whole frame.
	pub base: Style,
	/// Pane titles, category headings and the entry name.
	pub header: Style,
	/// Pane borders and dividers.
	pub border: Style,
	/// The selected sidebar row.
	pub row_highlight: Style,
	/// Text typed into the search input.
	pub prompt: Style,
	/// Placeholders, hints and other muted text.
	pub empty: Style,
	/// Query matches inside sidebar names.
	pub highlight: Style,
	/// The active detail tab.
	pub tab_active: Style,
	/// Code blocks and props listings.
	pub code: Style,
	/// Solid fills used by the sample previews.
	pub palette: Palette,
}

/// Solid fills for sample buttons, badges and alerts.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
	pub primary: Style,
	pub secondary: Style,
	pub success: Style,
	pub warning: Style,
	pub danger: Style,
	pub info: Style,
}

impl Theme {
	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		self.empty
	}

	/// Muted text style.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn button(&self, variant: ButtonVariant) -> Style {
		match variant {
			ButtonVariant::Primary => self.palette.primary,
			ButtonVariant::Secondary => self.palette.secondary,
			ButtonVariant::Danger => self.palette.danger,
			ButtonVariant::Success => self.palette.success,
		}
	}

	#[must_use]
	pub fn badge(&self, variant: BadgeVariant) -> Style {
		match variant {
			BadgeVariant::Primary => self.palette.primary,
			BadgeVariant::Success => self.palette.success,
			BadgeVariant::Warning => self.palette.warning,
			BadgeVariant::Danger => self.palette.danger,
		}
	}

	/// Foreground-only accent for an alert, taken from the fill color.
	#[must_use]
	pub fn alert(&self, level: AlertLevel) -> Style {
		let fill = match level {
			AlertLevel::Success => self.palette.success,
			AlertLevel::Warning => self.palette.warning,
			AlertLevel::Error => self.palette.danger,
			AlertLevel::Info => self.palette.info,
		};
		Style::new().fg(fill.bg.unwrap_or(Color::Reset))
	}
}

/// A theme bundled with the binary, plus the names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub mode: ThemeMode,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Whether `name` is this theme's name or one of its aliases.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

/// The light and dark themes, one per [`ThemeMode`].
#[derive(Debug, Clone)]
pub struct ThemeSet {
	light: ThemeRegistration,
	dark: ThemeRegistration,
}

impl ThemeSet {
	/// The theme drawn for `mode`.
	#[must_use]
	pub fn theme(&self, mode: ThemeMode) -> &Theme {
		match mode {
			ThemeMode::Light => &self.light.theme,
			ThemeMode::Dark => &self.dark.theme,
		}
	}

	/// Map a theme name or alias to the mode it belongs to.
	#[must_use]
	pub fn resolve(&self, name: &str) -> Option<ThemeMode> {
		self.registrations()
			.find(|registration| registration.answers_to(name))
			.map(|registration| registration.mode)
	}

	/// Every name and alias, light theme first.
	#[must_use]
	pub fn names(&self) -> Vec<&str> {
		self.registrations()
			.flat_map(|registration| {
				std::iter::once(registration.name.as_str())
					.chain(registration.aliases.iter().map(String::as_str))
			})
			.collect()
	}

	pub fn registrations(&self) -> impl Iterator<Item = &ThemeRegistration> {
		[&self.light, &self.dark].into_iter()
	}
}

/// The themes embedded in the binary, parsed on first use.
pub fn builtin_themes() -> &'static ThemeSet {
	static BUILTINS: OnceLock<ThemeSet> = OnceLock::new();
	BUILTINS.get_or_init(|| {
		loader::load_theme_set(&BUILTIN_THEME_DIR)
			.unwrap_or_else(|error| panic!("failed to load built-in themes: {error:#}"))
	})
}
