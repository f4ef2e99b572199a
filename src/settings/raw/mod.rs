use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::{CliArgs, ResolveFormat};

use super::resolved::{
	LogSettings, ResolvedSettings, SettingSource, parse_format, parse_level,
};
use super::sources::env_var_for;
use super::util::anchor_paths;

/// `[resolve]` section as it is read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ResolveSection {
	pub(super) strict: Option<bool>,
	pub(super) format: Option<String>,
	pub(super) base_profiles: Option<Vec<PathBuf>>,
}

/// `[log]` section as it is read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

/// Mirror of the settings file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
	pub(super) resolve: ResolveSection,
	pub(super) log: LogSection,
}

impl RawSettings {
	/// Apply CLI overrides on top of the raw settings values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.strict_flag() {
			self.resolve.strict = Some(true);
		}
		if let Some(format) = cli.resolve_format() {
			self.resolve.format = Some(format.as_str().to_string());
		}
		if let Some(level) = cli.log_level {
			self.log.level = Some(level.as_str().to_string());
		}
	}

	/// Convert the raw settings into [`ResolvedSettings`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedSettings> {
		let working_dir = env::current_dir().context("failed to determine working directory")?;
		let base_profiles = anchor_paths(
			self.resolve.base_profiles.unwrap_or_default(),
			&working_dir,
		);

		let format = match self.resolve.format {
			Some(value) => {
				let origin = origin_of(cli.resolve_format().is_some(), "--format", "resolve.format");
				parse_format(&value, origin)?
			}
			None => ResolveFormat::default(),
		};

		let log = match self.log.level {
			Some(value) => {
				let origin = origin_of(cli.log_level.is_some(), "--log-level", "log.level");
				LogSettings {
					level: Some(parse_level(&value, origin.clone())?),
					source: Some(origin),
				}
			}
			None => LogSettings::default(),
		};

		Ok(ResolvedSettings {
			strict: self.resolve.strict.unwrap_or(false),
			format,
			base_profiles,
			log,
		})
	}
}

/// The layer a present value came from. CLI overrides were already folded
/// in, so a flag given on the command line always wins.
fn origin_of(from_cli: bool, cli_flag: &'static str, key: &str) -> SettingSource {
	if from_cli {
		return SettingSource::CliFlag(cli_flag);
	}
	let env_var = env_var_for(key);
	if env::var_os(&env_var).is_some() {
		SettingSource::Environment(env_var)
	} else {
		SettingSource::SettingsFile
	}
}

#[cfg(test)]
mod tests;
