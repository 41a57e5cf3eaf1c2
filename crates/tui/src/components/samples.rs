//! Terminal renditions of the sample previews.
//!
//! Every sample is produced as a block of [`Line`]s so the detail pane can
//! center and scroll it like any other text.

use std::sync::OnceLock;

use chrono::NaiveDate;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;
use showcase_catalog::{AlertLevel, Badge, Preview};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const CARD_WIDTH: usize = 38;
const INPUT_WIDTH: usize = 32;
const DIALOG_WIDTH: usize = 40;
const BANNER_FROM: (u8, u8, u8) = (59, 130, 246);
const BANNER_TO: (u8, u8, u8) = (147, 51, 234);

/// Everything a sample needs besides its own parameters.
pub struct SampleContext<'a> {
	pub theme: &'a Theme,
	/// Date shown by the date-formatting sample.
	pub today: NaiveDate,
	/// Whether the modal sample's dialog is showing.
	pub modal_open: bool,
}

/// Lay out the sample for `preview`.
#[must_use]
pub fn sample_lines(preview: &Preview, ctx: &SampleContext<'_>) -> Vec<Line<'static>> {
	let theme = ctx.theme;
	match preview {
		Preview::Button { variant, label } => filled_button(label, theme.button(*variant)),
		Preview::Card { title, body, date } => card(title, body, date, theme),
		Preview::TextInput { label, placeholder } => text_input(label, placeholder, theme),
		Preview::Modal {
			trigger,
			title,
			body,
		} => modal(trigger, title, body, ctx),
		Preview::Alert {
			level,
			title,
			message,
		} => alert(*level, title, message, theme),
		Preview::Badges { badges } => vec![badge_row(badges, theme)],
		Preview::FormatDate => vec![call_result(
			"formatDate(new Date())",
			format!("\"{}\"", format_date(ctx.today)),
			theme,
		)],
		Preview::ValidateEmail { input } => vec![call_result(
			&format!("validateEmail(\"{input}\")"),
			validate_email(input).to_string(),
			theme,
		)],
		Preview::Snippet { text } => {
			let rows = text
				.lines()
				.map(|line| Line::from(Span::styled(line.to_string(), theme.code)))
				.collect();
			framed(None, rows, theme.border)
		}
	}
}

/// Whether pressing Enter changes how `preview` is drawn.
#[must_use]
pub fn is_interactive(preview: &Preview) -> bool {
	matches!(preview, Preview::Modal { .. })
}

/// Long-form US date, e.g. `January 5, 2025`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
	date.format("%B %-d, %Y").to_string()
}

/// Loose address check: something, `@`, something, `.`, something, no spaces.
#[must_use]
pub fn validate_email(input: &str) -> bool {
	static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
	PATTERN
		.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
		.as_ref()
		.is_some_and(|pattern| pattern.is_match(input))
}

/// Indent a block so its widest line sits in the middle of `width` columns.
#[must_use]
pub fn center_block(lines: Vec<Line<'static>>, width: u16) -> Vec<Line<'static>> {
	let block_width = lines.iter().map(Line::width).max().unwrap_or(0);
	let indent = usize::from(width).saturating_sub(block_width) / 2;
	if indent == 0 {
		return lines;
	}
	lines
		.into_iter()
		.map(|mut line| {
			line.spans.insert(0, Span::raw(" ".repeat(indent)));
			line
		})
		.collect()
}

fn filled_button(label: &str, fill: Style) -> Vec<Line<'static>> {
	let padded = format!("   {label}   ");
	let blank = " ".repeat(padded.width());
	vec![
		Line::from(Span::styled(blank.clone(), fill)),
		Line::from(Span::styled(padded, fill.add_modifier(Modifier::BOLD))),
		Line::from(Span::styled(blank, fill)),
	]
}

fn card(title: &str, body: &str, date: &str, theme: &Theme) -> Vec<Line<'static>> {
	let mut rows = vec![banner(CARD_WIDTH), banner(CARD_WIDTH), Line::default()];
	rows.push(Line::from(Span::styled(title.to_string(), theme.header)));
	rows.extend(
		wrap_words(body, CARD_WIDTH)
			.into_iter()
			.map(|line| Line::from(Span::styled(line, theme.empty))),
	);
	rows.push(Line::default());

	let actions = "♥  ⇪";
	let gap = CARD_WIDTH.saturating_sub(date.width() + actions.width());
	rows.push(Line::from(vec![
		Span::styled(date.to_string(), theme.empty),
		Span::raw(" ".repeat(gap)),
		Span::styled(actions, theme.empty),
	]));
	framed(None, rows, theme.border)
}

fn banner(width: usize) -> Line<'static> {
	let steps = width.saturating_sub(1).max(1);
	let spans = (0..width)
		.map(|column| {
			let mix = |from: u8, to: u8| {
				let from = i32::from(from);
				let to = i32::from(to);
				let value = from + (to - from) * column as i32 / steps as i32;
				u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
			};
			let colour = Color::Rgb(
				mix(BANNER_FROM.0, BANNER_TO.0),
				mix(BANNER_FROM.1, BANNER_TO.1),
				mix(BANNER_FROM.2, BANNER_TO.2),
			);
			Span::styled("█", Style::new().fg(colour))
		})
		.collect::<Vec<_>>();
	Line::from(spans)
}

fn text_input(label: &str, placeholder: &str, theme: &Theme) -> Vec<Line<'static>> {
	let mut lines = vec![Line::from(Span::styled(label.to_string(), theme.header))];
	let field = Line::from(vec![
		Span::styled(placeholder.to_string(), theme.empty),
		Span::raw(" ".repeat(INPUT_WIDTH.saturating_sub(placeholder.width()))),
	]);
	lines.extend(framed(None, vec![field], theme.border));
	lines
}

fn modal(trigger: &str, title: &str, body: &str, ctx: &SampleContext<'_>) -> Vec<Line<'static>> {
	let theme = ctx.theme;
	let mut lines = filled_button(trigger, theme.palette.primary);

	if ctx.modal_open {
		lines.push(Line::default());
		let mut rows: Vec<Line<'static>> = wrap_words(body, DIALOG_WIDTH)
			.into_iter()
			.map(|line| Line::from(Span::styled(line, theme.empty)))
			.collect();
		rows.push(Line::default());

		let cancel = Span::styled(" Cancel ", theme.palette.secondary);
		let confirm = Span::styled(" Confirm ", theme.palette.primary);
		let used = cancel.width() + confirm.width() + 2;
		rows.push(Line::from(vec![
			Span::raw(" ".repeat(DIALOG_WIDTH.saturating_sub(used))),
			cancel,
			Span::raw("  "),
			confirm,
		]));
		lines.extend(framed(Some((title, "✕")), rows, theme.border));
		lines.push(Line::from(Span::styled("Enter closes the dialog", theme.empty)));
	} else {
		lines.push(Line::from(Span::styled("Enter opens the dialog", theme.empty)));
	}
	lines
}

fn alert(level: AlertLevel, title: &str, message: &str, theme: &Theme) -> Vec<Line<'static>> {
	let accent = theme.alert(level);
	let icon = match level {
		AlertLevel::Success => "✔",
		AlertLevel::Warning | AlertLevel::Error => "⚠",
		AlertLevel::Info => "ℹ",
	};
	let rows = vec![
		Line::from(vec![
			Span::styled(format!("{icon} "), accent),
			Span::styled(title.to_string(), accent.add_modifier(Modifier::BOLD)),
		]),
		Line::from(Span::styled(format!("  {message}"), accent)),
	];
	framed(None, rows, accent)
}

fn badge_row(badges: &[Badge], theme: &Theme) -> Line<'static> {
	let mut spans = Vec::with_capacity(badges.len() * 2);
	for (index, badge) in badges.iter().enumerate() {
		if index > 0 {
			spans.push(Span::raw(" "));
		}
		spans.push(Span::styled(
			format!(" {} ", badge.label),
			theme.badge(badge.variant),
		));
	}
	Line::from(spans)
}

fn call_result(call: &str, result: String, theme: &Theme) -> Line<'static> {
	Line::from(vec![
		Span::styled(call.to_string(), theme.code),
		Span::styled(" → ", theme.empty),
		Span::styled(
			result,
			theme.alert(AlertLevel::Success).add_modifier(Modifier::BOLD),
		),
	])
}

/// Draw a rounded border around `rows`, padding each to the widest.
///
/// `title` puts a heading on the left of the top edge and a marker on the right.
fn framed(
	title: Option<(&str, &str)>,
	rows: Vec<Line<'static>>,
	border: Style,
) -> Vec<Line<'static>> {
	let title_width = title.map_or(0, |(heading, marker)| heading.width() + marker.width() + 3);
	let inner = rows
		.iter()
		.map(Line::width)
		.max()
		.unwrap_or(0)
		.max(title_width);

	let top = match title {
		Some((heading, marker)) => {
			let fill = inner.saturating_sub(heading.width() + marker.width() + 1);
			Line::from(vec![
				Span::styled("╭ ", border),
				Span::styled(heading.to_string(), border.add_modifier(Modifier::BOLD)),
				Span::styled(format!(" {} ", "─".repeat(fill)), border),
				Span::styled(marker.to_string(), border),
				Span::styled("╮", border),
			])
		}
		None => Line::from(Span::styled(format!("╭{}╮", "─".repeat(inner + 2)), border)),
	};

	let mut lines = Vec::with_capacity(rows.len() + 2);
	lines.push(top);
	for row in rows {
		let pad = inner - row.width();
		let mut spans = vec![Span::styled("│ ", border)];
		spans.extend(row.spans);
		spans.push(Span::raw(" ".repeat(pad)));
		spans.push(Span::styled(" │", border));
		lines.push(Line::from(spans));
	}
	lines.push(Line::from(Span::styled(
		format!("╰{}╯", "─".repeat(inner + 2)),
		border,
	)));
	lines
}

/// Greedy word wrap to `width` columns. Words longer than a line stay whole.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current = String::new();
	for word in text.split_whitespace() {
		if !current.is_empty() && current.width() + 1 + word.width() > width {
			lines.push(std::mem::take(&mut current));
		}
		if !current.is_empty() {
			current.push(' ');
		}
		current.push_str(word);
	}
	if !current.is_empty() {
		lines.push(current);
	}
	lines
}
