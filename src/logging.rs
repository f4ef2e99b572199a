//! stderr logging through `env_logger`.
//!
//! Verbosity is decided by, from strongest to weakest: `--log-level`, the
//! `LVCFG_LOG` filter, the `log.level` setting, and finally `warn`.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::settings::{LogSettings, SettingSource};

/// Environment variable holding an `env_logger` filter specification.
pub(crate) const LOG_ENV: &str = "LVCFG_LOG";

/// Install the global logger. Calling this more than once is harmless.
pub(crate) fn initialize(settings: &LogSettings) {
	let _ = builder(settings).try_init();
}

fn builder(settings: &LogSettings) -> Builder {
	let from_cli = matches!(settings.source, Some(SettingSource::CliFlag(_)));
	let mut builder = Builder::new();
	builder
		.filter_level(LevelFilter::Warn)
		.format_timestamp(None)
		.format_target(false)
		.target(Target::Stderr);

	if let Some(level) = settings.level
		&& !from_cli
	{
		builder.filter_level(level);
	}
	builder.parse_env(Env::new().filter(LOG_ENV));
	if let Some(level) = settings.level
		&& from_cli
	{
		builder.filter_level(level);
	}

	builder
}
