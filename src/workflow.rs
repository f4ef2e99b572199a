use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use lvcfg_core::{Pipeline, PipelineError, Registry, Resolution, Source};

use crate::settings::ResolvedSettings;

/// Name given to profiles read from standard input.
const STDIN_NAME: &str = "<stdin>";

/// Result of a workflow run that got as far as the pipeline.
#[derive(Debug)]
pub(crate) enum Outcome {
	Resolved(Resolution),
	Rejected(PipelineError),
}

/// Read the requested profiles and run them through the resolution pipeline.
#[derive(Debug)]
pub(crate) struct ResolveWorkflow {
	sources: Vec<PathBuf>,
	strict: bool,
}

impl ResolveWorkflow {
	/// Combine the base profiles from `settings` with the command-line
	/// `sources`, which come last so that they win.
	pub(crate) fn from_settings(settings: &ResolvedSettings, sources: &[PathBuf]) -> Self {
		let sources = settings
			.base_profiles
			.iter()
			.chain(sources)
			.cloned()
			.collect();
		Self {
			sources,
			strict: settings.strict,
		}
	}

	pub(crate) fn sources(&self) -> &[PathBuf] {
		&self.sources
	}

	pub(crate) fn run(&self, registry: &Registry) -> Result<Outcome> {
		let sources = self.read_sources()?;
		info!("resolving {} profile(s)", sources.len());

		let outcome = match Pipeline::new(registry).strict(self.strict).run(&sources) {
			Ok(resolution) => Outcome::Resolved(resolution),
			Err(error) => Outcome::Rejected(error),
		};
		Ok(outcome)
	}

	fn read_sources(&self) -> Result<Vec<Source>> {
		self.sources.iter().map(|path| read_source(path)).collect()
	}
}

fn read_source(path: &Path) -> Result<Source> {
	if path.as_os_str() == "-" {
		let mut text = String::new();
		io::stdin()
			.read_to_string(&mut text)
			.context("failed to read profile from stdin")?;
		return Ok(Source::new(STDIN_NAME, text));
	}

	debug!("reading profile {}", path.display());
	let text = fs::read_to_string(path)
		.with_context(|| format!("failed to read profile {}", path.display()))?;
	Ok(Source::new(path.display().to_string(), text))
}

#[cfg(test)]
mod tests {
	use lvcfg_core::Value;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn base_profiles_come_first() {
		let settings = ResolvedSettings {
			base_profiles: vec![PathBuf::from("/boards/base.h")],
			..ResolvedSettings::default()
		};
		let workflow = ResolveWorkflow::from_settings(&settings, &[PathBuf::from("board.h")]);
		assert_eq!(
			workflow.sources(),
			&[PathBuf::from("/boards/base.h"), PathBuf::from("board.h")]
		);
	}

	#[test]
	fn command_line_profiles_override_base_profiles() {
		let dir = tempdir().unwrap();
		let base = dir.path().join("base.h");
		let board = dir.path().join("board.h");
		fs::write(&base, "#define LV_MEM_SIZE (64U * 1024U)\n").unwrap();
		fs::write(&board, "#define LV_MEM_SIZE (128U * 1024U)\n").unwrap();

		let settings = ResolvedSettings {
			base_profiles: vec![base],
			..ResolvedSettings::default()
		};
		let workflow = ResolveWorkflow::from_settings(&settings, &[board]);
		let Outcome::Resolved(resolution) = workflow.run(Registry::builtin()).unwrap() else {
			panic!("expected a resolution");
		};
		assert_eq!(
			resolution.configuration.get("LV_MEM_SIZE"),
			Some(&Value::Int(128 * 1024))
		);
	}

	#[test]
	fn strict_settings_reject_unknown_keys() {
		let dir = tempdir().unwrap();
		let board = dir.path().join("board.h");
		fs::write(&board, "#define LV_USE_GPU_SDL 1\n").unwrap();

		let settings = ResolvedSettings {
			strict: true,
			..ResolvedSettings::default()
		};
		let outcome = ResolveWorkflow::from_settings(&settings, &[board])
			.run(Registry::builtin())
			.unwrap();
		assert!(matches!(outcome, Outcome::Rejected(PipelineError::Invalid(_))));
	}

	#[test]
	fn missing_profiles_are_io_errors() {
		let settings = ResolvedSettings::default();
		let err = ResolveWorkflow::from_settings(&settings, &[PathBuf::from("/nonexistent/lv_conf.h")])
			.run(Registry::builtin())
			.unwrap_err();
		assert!(err.to_string().contains("failed to read profile /nonexistent/lv_conf.h"));
	}
}
