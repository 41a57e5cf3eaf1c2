//! Source listings with a line-number gutter.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::style::Theme;

/// Lay out `source` with right-aligned line numbers.
///
/// Tabs are expanded to four spaces; every other character is kept as is.
#[must_use]
pub fn code_lines(source: &str, theme: &Theme) -> Vec<Line<'static>> {
	let rows: Vec<&str> = source.lines().collect();
	let digits = rows.len().max(1).to_string().len();
	rows.iter()
		.enumerate()
		.map(|(index, row)| {
			Line::from(vec![
				Span::styled(format!("{:>digits$} ", index + 1), theme.empty),
				Span::styled("│ ", theme.border),
				Span::styled(row.replace('\t', "    "), theme.code),
			])
		})
		.collect()
}

/// A plain indented listing with a heading, used for the props block.
#[must_use]
pub fn listing(heading: &str, text: &str, heading_style: Style, body: Style) -> Vec<Line<'static>> {
	std::iter::once(Line::from(Span::styled(heading.to_string(), heading_style)))
		.chain(
			text.lines()
				.map(|row| Line::from(Span::styled(format!("  {row}"), body))),
		)
		.collect()
}

#[cfg(test)]
mod tests {
	use showcase_catalog::ThemeMode;

	use super::*;
	use crate::style::builtin_themes;

	fn rendered(lines: &[Line<'_>]) -> Vec<String> {
		lines.iter().map(ToString::to_string).collect()
	}

	#[test]
	fn gutter_widens_with_line_count() {
		let theme = builtin_themes().theme(ThemeMode::Light);
		let source = (1..=12).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n");
		let lines = code_lines(&source, theme);
		assert_eq!(lines.len(), 12);
		assert_eq!(lines[0].to_string(), " 1 │ line 1");
		assert_eq!(lines[11].to_string(), "12 │ line 12");
	}

	#[test]
	fn keeps_code_text_verbatim() {
		let theme = builtin_themes().theme(ThemeMode::Dark);
		let lines = code_lines("fn main() {\n\tprintln!(\"hi\");\n}", theme);
		assert_eq!(
			rendered(&lines),
			["1 │ fn main() {", "2 │     println!(\"hi\");", "3 │ }"]
		);
	}

	#[test]
	fn listing_indents_body() {
		let theme = builtin_themes().theme(ThemeMode::Light);
		let lines = listing("Props", "variant: string\nsize: string", theme.header, theme.code);
		assert_eq!(rendered(&lines), ["Props", "  variant: string", "  size: string"]);
	}
}
