use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use showcase_catalog::Tab;

use super::annotations::dim_cli_annotations;
use crate::app_dirs;

/// Version banner with the directories the binary reads and writes.
fn long_version() -> &'static str {
	let describe = |dir: anyhow::Result<PathBuf>| match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("showcase {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {}", describe(app_dirs::get_config_dir()));
	let _ = writeln!(details, "data directory: {}", describe(app_dirs::get_data_dir()));
	let _ = write!(details, "cache directory: {}", describe(app_dirs::get_cache_dir()));

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`], exiting on error.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

pub(super) fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(dim_cli_annotations)
}

#[derive(Parser, Debug, Default)]
#[command(
	name = "showcase",
	version,
	long_version = long_version(),
	about = "Browse, preview and copy reusable UI component samples",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `showcase` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SHOWCASE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load entries from a TOML catalog instead of the builtin library (default: builtin)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
		value_name = "TEXT",
		help = "Start with this search text (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 's',
		long,
		value_name = "ID",
		help = "Start on the entry with this id (default: first entry)"
	)]
	pub(crate) select: Option<String>,
	#[arg(long, value_enum, help = "Start on this view tab (default: preview)")]
	pub(crate) tab: Option<TabArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Start with this theme, by name or alias (default: last used, else light)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the sidebar title (default: UI Showcase)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'l',
		long,
		help = "Print the grouped catalog and exit (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Format used by --list"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "list-themes", help = "List theme names and aliases and exit (default: disabled)")]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		env = "SHOWCASE_LOG_FILE",
		help = "Append logs to this file (default: showcase.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// View tabs selectable from the command line.
pub(crate) enum TabArg {
	Preview,
	Code,
}

impl TabArg {
	/// The name configuration loading expects.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			TabArg::Preview => "preview",
			TabArg::Code => "code",
		}
	}
}

impl From<TabArg> for Tab {
	fn from(arg: TabArg) -> Self {
		match arg {
			TabArg::Preview => Tab::Preview,
			TabArg::Code => Tab::Code,
		}
	}
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
/// Output formats for `--list`.
pub(crate) enum OutputFormat {
	#[default]
	Plain,
	Json,
}
