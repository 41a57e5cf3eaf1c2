use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;
use crate::preferences::Preferences;

/// Combine config files, environment variables and CLI arguments, falling
/// back to `persisted` for the theme.
pub fn load(cli: &CliArgs, persisted: &Preferences) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(persisted)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use showcase_catalog::{Tab, ThemeMode};

	use super::*;
	use crate::settings::ThemeOrigin;

	fn cli_with(files: Vec<std::path::PathBuf>) -> CliArgs {
		CliArgs {
			no_config: true,
			config: files,
			..CliArgs::default()
		}
	}

	#[test]
	fn config_file_values_are_applied() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("showcase.toml");
		fs::write(
			&path,
			"[ui]\ntheme = \"night\"\ninitial_entry = \"debounce\"\ninitial_tab = \"code\"\ncopy_reset_ms = 500\n",
		)
		.expect("write config");

		let resolved = load(&cli_with(vec![path]), &Preferences::default()).expect("loads");
		assert_eq!(resolved.theme, ThemeMode::Dark);
		assert_eq!(resolved.theme_origin, ThemeOrigin::Configured);
		assert_eq!(resolved.initial_entry.as_deref(), Some("debounce"));
		assert_eq!(resolved.initial_tab, Tab::Code);
		assert_eq!(resolved.copy_reset, Duration::from_millis(500));
	}

	#[test]
	fn cli_beats_config_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("showcase.toml");
		fs::write(&path, "[ui]\ntheme = \"dark\"\ninitial_query = \"card\"\n").expect("write config");

		let mut cli = cli_with(vec![path]);
		cli.theme = Some("light".into());
		let resolved = load(&cli, &Preferences::default()).expect("loads");
		assert_eq!(resolved.theme, ThemeMode::Light);
		assert_eq!(resolved.initial_query, "card");
	}

	#[test]
	fn later_files_override_earlier_ones() {
		let dir = tempfile::tempdir().expect("tempdir");
		let first = dir.path().join("first.toml");
		let second = dir.path().join("second.toml");
		fs::write(&first, "[ui]\ntitle = \"First\"\ninitial_query = \"alert\"\n").expect("write");
		fs::write(&second, "[ui]\ntitle = \"Second\"\n").expect("write");

		let resolved = load(&cli_with(vec![first, second]), &Preferences::default()).expect("loads");
		assert_eq!(resolved.title.as_deref(), Some("Second"));
		assert_eq!(resolved.initial_query, "alert");
	}

	#[test]
	fn catalog_path_replaces_builtin_library() {
		let dir = tempfile::tempdir().expect("tempdir");
		let catalog = dir.path().join("library.toml");
		fs::write(
			&catalog,
			r#"
[[entries]]
id = "chip"
name = "Chip"
category = "Data Display"
code = "<Chip />"
preview = { kind = "snippet", text = "<Chip />" }
"#,
		)
		.expect("write catalog");

		let mut cli = cli_with(Vec::new());
		cli.catalog = Some(catalog);
		let resolved = load(&cli, &Preferences::default()).expect("loads");
		assert_eq!(resolved.catalog.len(), 1);
		assert_eq!(resolved.catalog.first().id, "chip");
	}

	#[test]
	fn broken_catalog_reports_its_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		let catalog = dir.path().join("broken.toml");
		fs::write(&catalog, "[[entries]]\nid = ").expect("write catalog");

		let mut cli = cli_with(Vec::new());
		cli.catalog = Some(catalog);
		let err = load(&cli, &Preferences::default()).expect_err("broken catalog");
		assert!(format!("{err:#}").contains("broken.toml"));
	}
}
