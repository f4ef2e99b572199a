use thiserror::Error;

use super::SettingSource;

/// A setting whose value could not be understood, with the layer that set it.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
	#[error("invalid resolve.format {value:?} from {origin}; expected header, json or summary")]
	Format { value: String, origin: SettingSource },

	#[error(
		"invalid log.level {value:?} from {origin}; expected off, error, warn, info, debug or trace"
	)]
	LogLevel { value: String, origin: SettingSource },
}
