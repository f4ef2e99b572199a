use std::fmt;
use std::path::PathBuf;

use log::LevelFilter;

use crate::cli::ResolveFormat;

mod errors;
mod summary;
mod validation;

pub(crate) use errors::SettingsError;
pub(super) use validation::{parse_format, parse_level};

/// The layer that supplied a setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	SettingsFile,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "command-line flag {flag}"),
			Self::Environment(var) => write!(f, "${var}"),
			Self::SettingsFile => f.write_str("a settings file"),
		}
	}
}

/// Log verbosity chosen through settings, with where it came from.
#[derive(Debug, Clone, Default)]
pub(crate) struct LogSettings {
	pub(crate) level: Option<LevelFilter>,
	pub(crate) source: Option<SettingSource>,
}

/// Tool settings derived from user input, settings files and defaults.
#[derive(Debug, Clone, Default)]
pub(crate) struct ResolvedSettings {
	pub(crate) strict: bool,
	pub(crate) format: ResolveFormat,
	/// Profiles merged before any given on the command line.
	pub(crate) base_profiles: Vec<PathBuf>,
	pub(crate) log: LogSettings,
}

impl ResolvedSettings {
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
