use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

const DEFAULT_MARKER: &str = "(default: ";

fn muted() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

fn push_muted(target: &mut StyledStr, text: &str) {
	let style = muted();
	let _ = std::fmt::write(target, format_args!("{style}{text}{style:#}"));
}

/// Dim the `(default: ...)` suffix of a help line and move clap's own
/// possible-values and env annotations into the same muted style.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
	let help = arg
		.get_help()
		.map(ToString::to_string)
		.unwrap_or_default();
	let mut styled = split_default(&help);

	let mut annotations = Vec::new();
	if let Some(values) = possible_values(&arg) {
		arg = arg.hide_possible_values(true);
		annotations.push(values);
	}
	if let Some(env) = arg.get_env().map(|name| name.to_string_lossy().into_owned())
		&& !env.trim().is_empty()
	{
		arg = arg.hide_env(true);
		annotations.push(format!("[env: {env}=]"));
	}

	if help.is_empty() && annotations.is_empty() {
		return arg;
	}
	let mut has_text = !help.is_empty();
	for annotation in annotations {
		if has_text {
			styled.push_str(" ");
		}
		push_muted(&mut styled, &annotation);
		has_text = true;
	}
	arg.help(styled)
}

/// Style `text` with its trailing default annotation muted.
pub(crate) fn split_default(text: &str) -> StyledStr {
	let mut styled = StyledStr::new();
	match text.find(DEFAULT_MARKER) {
		Some(start) => {
			let end = text[start..]
				.find(')')
				.map_or(text.len(), |offset| start + offset + 1);
			styled.push_str(&text[..start]);
			push_muted(&mut styled, &text[start..end]);
			styled.push_str(&text[end..]);
		}
		None => styled.push_str(text),
	}
	styled
}

fn possible_values(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let visible: Vec<String> = arg
		.get_possible_values()
		.into_iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| value.get_name().to_string())
		.collect();
	if visible.is_empty() {
		None
	} else {
		Some(format!("[possible values: {}]", visible.join(", ")))
	}
}
