use clap::ValueEnum;
use log::LevelFilter;

use super::{SettingSource, SettingsError};
use crate::cli::ResolveFormat;

pub(in crate::settings) fn parse_format(
	value: &str,
	origin: SettingSource,
) -> Result<ResolveFormat, SettingsError> {
	ResolveFormat::from_str(value.trim(), true).map_err(|_| SettingsError::Format {
		value: value.to_string(),
		origin,
	})
}

pub(in crate::settings) fn parse_level(
	value: &str,
	origin: SettingSource,
) -> Result<LevelFilter, SettingsError> {
	value
		.trim()
		.parse::<LevelFilter>()
		.map_err(|_| SettingsError::LogLevel {
			value: value.to_string(),
			origin,
		})
}
