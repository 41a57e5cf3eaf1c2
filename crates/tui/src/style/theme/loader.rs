use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use showcase_catalog::ThemeMode;

use super::{Palette, Theme, ThemeRegistration, ThemeSet};

#[derive(Debug, Deserialize)]
struct ThemeDocument {
	name: String,
	mode: ThemeMode,
	#[serde(default)]
	aliases: Vec<String>,
	styles: StylesDocument,
}

#[derive(Debug, Deserialize)]
struct StylesDocument {
	base: StyleSpec,
	header: StyleSpec,
	border: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	tab_active: StyleSpec,
	code: StyleSpec,
	palette: PaletteDocument,
}

#[derive(Debug, Deserialize)]
struct PaletteDocument {
	primary: StyleSpec,
	secondary: StyleSpec,
	success: StyleSpec,
	warning: StyleSpec,
	danger: StyleSpec,
	info: StyleSpec,
}

#[derive(Debug, Default, Deserialize)]
struct StyleSpec {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn resolve(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?);
		}
		self.modifiers.iter().try_fold(style, |style, name| {
			let modifier = parse_modifier(name)
				.with_context(|| format!("{context}: invalid modifier `{name}`"))?;
			Ok(style.add_modifier(modifier))
		})
	}
}

impl StylesDocument {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |spec: &StyleSpec, key: &str| spec.resolve(&format!("{context}.{key}"));
		let palette = &self.palette;
		let tone = |spec: &StyleSpec, key: &str| spec.resolve(&format!("{context}.palette.{key}"));

		Ok(Theme {
			base: style(&self.base, "base")?,
			header: style(&self.header, "header")?,
			border: style(&self.border, "border")?,
			row_highlight: style(&self.row_highlight, "row_highlight")?,
			prompt: style(&self.prompt, "prompt")?,
			empty: style(&self.empty, "empty")?,
			highlight: style(&self.highlight, "highlight")?,
			tab_active: style(&self.tab_active, "tab_active")?,
			code: style(&self.code, "code")?,
			palette: Palette {
				primary: tone(&palette.primary, "primary")?,
				secondary: tone(&palette.secondary, "secondary")?,
				success: tone(&palette.success, "success")?,
				warning: tone(&palette.warning, "warning")?,
				danger: tone(&palette.danger, "danger")?,
				info: tone(&palette.info, "info")?,
			},
		})
	}
}

/// Parse every theme file in `dir` and pair them up by mode.
pub(super) fn load_theme_set(dir: &Dir) -> Result<ThemeSet> {
	let mut files: Vec<_> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut light: Option<ThemeRegistration> = None;
	let mut dark: Option<ThemeRegistration> = None;

	for file in files {
		let registration = parse_registration(file)?;
		let slot = match registration.mode {
			ThemeMode::Light => &mut light,
			ThemeMode::Dark => &mut dark,
		};
		if let Some(existing) = slot {
			bail!(
				"multiple built-in {} themes (`{}` and `{}`)",
				registration.mode,
				existing.name,
				registration.name
			);
		}
		*slot = Some(registration);
	}

	match (light, dark) {
		(Some(light), Some(dark)) => Ok(ThemeSet { light, dark }),
		(None, _) => bail!("no built-in light theme was found"),
		(_, None) => bail!("no built-in dark theme was found"),
	}
}

fn parse_registration(file: &File) -> Result<ThemeRegistration> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	let document: ThemeDocument = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {path:?}"))?;

	let theme = document.styles.into_theme(&format!("{path:?}.styles"))?;
	Ok(ThemeRegistration {
		name: document.name,
		mode: document.mode,
		theme,
		aliases: document
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.collect(),
	})
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex(hex);
	}
	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return parse_rgb(body);
	}
	if let Some(body) = value.strip_prefix("ansi(").and_then(|s| s.strip_suffix(')')) {
		let index: u8 = body
			.trim()
			.parse()
			.with_context(|| format!("invalid ANSI colour index `{body}`"))?;
		return Ok(Color::Indexed(index));
	}

	let named = match normalise_key(value).as_ref() {
		"reset" | "none" | "default" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" => Color::DarkGray,
		"white" => Color::White,
		other => bail!("unknown colour `{other}`"),
	};
	Ok(named)
}

fn parse_hex(hex: &str) -> Result<Color> {
	let digits: Cow<'_, str> = match hex.len() {
		3 => Cow::Owned(hex.chars().flat_map(|ch| [ch, ch]).collect()),
		6 => Cow::Borrowed(hex),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};
	let channel = |range: std::ops::Range<usize>| {
		digits
			.get(range)
			.and_then(|pair| u8::from_str_radix(pair, 16).ok())
			.with_context(|| format!("invalid hex colour `#{hex}`"))
	};
	Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_rgb(body: &str) -> Result<Color> {
	let channels = body
		.split(',')
		.map(|part| {
			part.trim()
				.parse::<u8>()
				.with_context(|| format!("invalid component `{part}` in rgb() colour"))
		})
		.collect::<Result<Vec<_>>>()?;
	match channels[..] {
		[r, g, b] => Ok(Color::Rgb(r, g, b)),
		_ => bail!(
			"expected three components for rgb() colour, found {}",
			channels.len()
		),
	}
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_ref() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" => Ok(Modifier::REVERSED),
		"crossed_out" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_colour_notations() {
		assert_eq!(parse_color("#fff").unwrap(), Color::Rgb(255, 255, 255));
		assert_eq!(parse_color("#2563eb").unwrap(), Color::Rgb(0x25, 0x63, 0xeb));
		assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Color::Rgb(1, 2, 3));
		assert_eq!(parse_color("ansi(42)").unwrap(), Color::Indexed(42));
		assert_eq!(parse_color("Dark-Gray").unwrap(), Color::DarkGray);
	}

	#[test]
	fn rejects_malformed_colours() {
		assert!(parse_color("#12").is_err());
		assert!(parse_color("#zzzzzz").is_err());
		assert!(parse_color("rgb(1, 2)").is_err());
		assert!(parse_color("chartreuse").is_err());
	}

	#[test]
	fn style_spec_applies_modifiers() {
		let spec = StyleSpec {
			fg: Some("red".into()),
			bg: None,
			modifiers: vec!["bold".into(), "underline".into()],
		};
		let style = spec.resolve("test").unwrap();
		assert_eq!(style.fg, Some(Color::Red));
		assert!(style.add_modifier.contains(Modifier::BOLD | Modifier::UNDERLINED));

		let bad = StyleSpec {
			modifiers: vec!["sparkle".into()],
			..StyleSpec::default()
		};
		assert!(bad.resolve("test").is_err());
	}
}
