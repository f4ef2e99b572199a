use std::env;
use std::fs;

use clap::Parser;
use log::LevelFilter;
use tempfile::tempdir;

use super::RawSettings;
use crate::cli::{CliArgs, ResolveFormat};
use crate::settings::load;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"lvcfg",
		"resolve",
		"board.h",
		"--strict",
		"--format",
		"summary",
		"--log-level",
		"trace",
	]);

	let mut settings = RawSettings::default();
	settings.resolve.strict = Some(false);
	settings.resolve.format = Some("json".into());
	settings.log.level = Some("warn".into());
	settings.apply_cli_overrides(&cli);

	assert_eq!(settings.resolve.strict, Some(true));
	assert_eq!(settings.resolve.format.as_deref(), Some("summary"));
	assert_eq!(settings.log.level.as_deref(), Some("trace"));
}

#[test]
fn absent_flags_keep_file_values() {
	let cli = CliArgs::parse_from(["lvcfg", "check", "board.h"]);

	let mut settings = RawSettings::default();
	settings.resolve.strict = Some(true);
	settings.resolve.format = Some("json".into());
	settings.apply_cli_overrides(&cli);

	assert_eq!(settings.resolve.strict, Some(true));
	assert_eq!(settings.resolve.format.as_deref(), Some("json"));
	assert_eq!(settings.log.level, None);
}

// Every case that goes through `load` lives in this one test because they
// share process environment variables.
#[test]
fn layered_loading_follows_precedence() {
	let dir = tempdir().unwrap();
	let settings_file = dir.path().join("lvcfg.toml");
	fs::write(
		&settings_file,
		"[resolve]\nformat = \"json\"\nbase_profiles = [\"boards/base.h\", \"/abs/common.h\"]\n\n[log]\nlevel = \"info\"\n",
	)
	.unwrap();
	let config = settings_file.to_str().unwrap();

	// Settings file only.
	let cli = CliArgs::parse_from(["lvcfg", "--no-config", "--config", config, "resolve", "a.h"]);
	let resolved = load(&cli).unwrap();
	assert_eq!(resolved.format, ResolveFormat::Json);
	assert!(!resolved.strict);
	assert_eq!(resolved.log.level, Some(LevelFilter::Info));
	let working_dir = env::current_dir().unwrap();
	assert_eq!(
		resolved.base_profiles,
		vec![
			working_dir.join("boards/base.h"),
			std::path::PathBuf::from("/abs/common.h"),
		]
	);

	// Environment beats the settings file.
	// SAFETY: Adjusting LVCFG variables for the duration of this test only.
	unsafe {
		env::set_var("LVCFG__RESOLVE__FORMAT", "summary");
		env::set_var("LVCFG__RESOLVE__STRICT", "true");
	}
	let resolved = load(&cli).unwrap();
	assert_eq!(resolved.format, ResolveFormat::Summary);
	assert!(resolved.strict);

	// CLI flags beat the environment.
	let with_flag = CliArgs::parse_from([
		"lvcfg",
		"--no-config",
		"--config",
		config,
		"resolve",
		"a.h",
		"--format",
		"header",
	]);
	assert_eq!(load(&with_flag).unwrap().format, ResolveFormat::Header);

	// Invalid values name the layer that supplied them.
	// SAFETY: As above.
	unsafe {
		env::set_var("LVCFG__RESOLVE__FORMAT", "yaml");
	}
	let err = load(&cli).unwrap_err().to_string();
	assert!(
		err.contains("from $LVCFG__RESOLVE__FORMAT;"),
		"{err}"
	);

	// SAFETY: Restoring the environment captured at the start of the test.
	unsafe {
		env::remove_var("LVCFG__RESOLVE__FORMAT");
		env::remove_var("LVCFG__RESOLVE__STRICT");
	}

	fs::write(&settings_file, "[resolve]\nformat = \"yaml\"\n").unwrap();
	let err = load(&cli).unwrap_err().to_string();
	assert!(err.contains("invalid resolve.format \"yaml\" from a settings file"), "{err}");
}
