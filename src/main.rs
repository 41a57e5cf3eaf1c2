mod app_dirs;
mod cli;
mod logging;
mod preferences;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, format_json, format_plain, parse_cli};
use preferences::Preferences;
use workflow::ShowcaseWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in showcase_tui::builtin_themes().names() {
			println!("{name}");
		}
		return Ok(());
	}

	init_logging(&cli);

	let persisted = preferences::load();
	let resolved = settings::load(&cli, &persisted)?;

	if cli.list {
		match cli.output {
			OutputFormat::Plain => print!("{}", format_plain(&resolved.catalog, &resolved.initial_query)),
			OutputFormat::Json => println!("{}", format_json(&resolved.catalog, &resolved.initial_query)?),
		}
		return Ok(());
	}

	if cli.print_config {
		resolved.print_summary();
	}

	run_showcase(resolved, persisted)
}

/// Logging is best-effort; a log file that cannot be opened is reported once
/// on stderr before the terminal is taken over.
fn init_logging(cli: &CliArgs) {
	let path = match cli.log_file.clone() {
		Some(path) => Ok(path),
		None => logging::default_log_path(),
	};
	if let Err(err) = path.and_then(|path| logging::init(&path)) {
		eprintln!("showcase: logging disabled: {err:#}");
	}
}

fn run_showcase(settings: settings::ResolvedConfig, persisted: Preferences) -> Result<()> {
	tracing::info!(
		entries = settings.catalog.len(),
		theme = %settings.theme,
		origin = %settings.theme_origin,
		"starting showcase"
	);
	let outcome = ShowcaseWorkflow::from_config(settings)?.run()?;

	let theme = outcome.theme.mode();
	if persisted.theme != Some(theme) {
		preferences::store_theme(theme);
	}
	Ok(())
}
