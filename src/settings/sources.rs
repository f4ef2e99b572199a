use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::app_dirs;
use crate::cli::CliArgs;

/// Prefix of settings environment variables (`LVCFG__RESOLVE__STRICT`).
pub(super) const ENV_PREFIX: &str = "LVCFG";
const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.prefix_separator(ENV_SEPARATOR)
			.separator(ENV_SEPARATOR)
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("resolve.base_profiles"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("settings builder is frozen"),
		other => other.into(),
	})
}

/// Name of the environment variable that carries `key` (`resolve.strict`).
pub(super) fn env_var_for(key: &str) -> String {
	let mut name = String::from(ENV_PREFIX);
	for part in key.split('.') {
		name.push_str(ENV_SEPARATOR);
		name.push_str(&part.to_ascii_uppercase());
	}
	name
}

/// Discover the default settings file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(path) = app_dirs::user_settings_file() {
		files.push(path);
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".lvcfg.toml"));
		files.push(current_dir.join("lvcfg.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".lvcfg.toml")));
		assert!(files.iter().any(|path| path.ends_with("lvcfg.toml")));
	}

	#[test]
	fn env_var_names_follow_the_section_layout() {
		assert_eq!(env_var_for("resolve.strict"), "LVCFG__RESOLVE__STRICT");
		assert_eq!(env_var_for("log.level"), "LVCFG__LOG__LEVEL");
	}
}
