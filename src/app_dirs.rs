//! Where `lvcfg` looks for the per-user settings file.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// Overrides the platform settings directory when set to a non-empty path.
const SETTINGS_DIR_ENV: &str = "LVCFG_CONFIG_DIR";
const SETTINGS_FILE: &str = "config.toml";

/// Path of the user's `config.toml`, whether or not it exists.
pub(crate) fn user_settings_file() -> Result<PathBuf> {
	Ok(settings_dir(env::var_os(SETTINGS_DIR_ENV))?.join(SETTINGS_FILE))
}

fn settings_dir(overridden: Option<OsString>) -> Result<PathBuf> {
	if let Some(dir) = overridden.filter(|dir| !dir.is_empty()) {
		return Ok(PathBuf::from(dir));
	}
	ProjectDirs::from("io", "albo", "lvcfg")
		.map(|dirs| dirs.config_local_dir().to_path_buf())
		.ok_or_else(|| anyhow!("no home directory to keep lvcfg settings in"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn override_replaces_the_platform_directory() {
		let dir = settings_dir(Some(OsString::from("/etc/lvcfg"))).unwrap();
		assert_eq!(dir, PathBuf::from("/etc/lvcfg"));
	}

	#[test]
	fn empty_override_is_ignored() {
		if let Ok(dir) = settings_dir(Some(OsString::new())) {
			assert!(dir.ends_with("lvcfg"));
		}
	}
}
