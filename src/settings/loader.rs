use anyhow::{Result, anyhow};

use super::raw::RawSettings;
use super::resolved::ResolvedSettings;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load settings by combining CLI arguments, settings files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedSettings> {
	let builder = build_config(cli)?;
	let mut raw: RawSettings = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize settings: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
