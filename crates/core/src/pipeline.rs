//! The full load → merge → validate → resolve chain behind one call.

use log::{debug, info};
use thiserror::Error;

use crate::loader::{LoadError, LoadedSource, Source, load_source};
use crate::merge::merge;
use crate::registry::Registry;
use crate::resolve::{Configuration, UnresolvedReference, resolve};
use crate::validate::{ValidationMode, Violation, validate};

/// Why a pipeline run produced no configuration. Each variant carries every
/// finding of its stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
	#[error("{} source error(s)", .0.len())]
	Load(Vec<LoadError>),
	#[error("{} violation(s)", .0.len())]
	Invalid(Vec<Violation>),
	#[error("{} unresolved reference(s)", .0.len())]
	Unresolved(Vec<UnresolvedReference>),
}

impl PipelineError {
	/// Human-readable lines, one per finding, prefixed with their location
	/// when known.
	pub fn messages(&self) -> Vec<String> {
		match self {
			Self::Load(errors) => errors.iter().map(ToString::to_string).collect(),
			Self::Invalid(violations) => violations
				.iter()
				.map(|violation| match &violation.origin {
					Some(origin) => format!("{origin}: {violation}"),
					None => violation.to_string(),
				})
				.collect(),
			Self::Unresolved(references) => references
				.iter()
				.map(|reference| match reference.origin() {
					Some(origin) => format!("{origin}: {reference}"),
					None => reference.to_string(),
				})
				.collect(),
		}
	}
}

/// A successful run.
#[derive(Debug, Clone)]
pub struct Resolution {
	pub configuration: Configuration,
	/// Non-fatal findings, such as unknown keys in lenient mode.
	pub warnings: Vec<Violation>,
}

/// Configured resolution run over a registry.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'r> {
	registry: &'r Registry,
	mode: ValidationMode,
}

impl<'r> Pipeline<'r> {
	pub fn new(registry: &'r Registry) -> Self {
		Self {
			registry,
			mode: ValidationMode::default(),
		}
	}

	#[must_use]
	pub fn strict(mut self, strict: bool) -> Self {
		self.mode.strict = strict;
		self
	}

	pub fn registry(&self) -> &'r Registry {
		self.registry
	}

	/// Run every stage over `sources`, later sources overriding earlier ones.
	pub fn run(&self, sources: &[Source]) -> Result<Resolution, PipelineError> {
		let mut loaded: Vec<LoadedSource> = Vec::with_capacity(sources.len());
		let mut load_errors = Vec::new();
		for source in sources {
			match load_source(source) {
				Ok(source) => loaded.push(source),
				Err(errors) => load_errors.extend(errors),
			}
		}
		if !load_errors.is_empty() {
			return Err(PipelineError::Load(load_errors));
		}

		let merged = merge(&loaded);
		debug!("merged {} keys from {} sources", merged.len(), loaded.len());

		let validated =
			validate(self.registry, &merged, self.mode).map_err(PipelineError::Invalid)?;
		let configuration =
			resolve(self.registry, &validated).map_err(PipelineError::Unresolved)?;

		info!(
			"resolved {} options ({} explicit)",
			configuration.len(),
			configuration.explicit_count()
		);
		Ok(Resolution {
			configuration,
			warnings: validated.into_warnings(),
		})
	}
}
