//! Checking merged options against the registry.
//!
//! Validation is exhaustive: every problem is collected before returning, so a
//! single run reports everything wrong with a set of profiles. Findings are
//! ordered deterministically, per-key findings in merge order first and
//! cross-key findings in registry order after them.
//!
//! Cross-key rules are evaluated on effective values, meaning the explicit
//! value when one was supplied and the registry default otherwise. Keys whose
//! explicit value failed its own check take no part in cross-key rules.

mod typing;
mod violation;

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;
use log::{debug, warn};

use crate::key::OptionKey;
use crate::merge::MergedOptions;
use crate::registry::{OptionSpec, Registry};
use crate::value::{Provenance, Value};

pub use violation::{Violation, ViolationKind};

/// Knobs that change how strictly a configuration is judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationMode {
	/// Treat unknown keys as violations rather than warnings.
	pub strict: bool,
}

impl ValidationMode {
	pub fn strict() -> Self {
		Self { strict: true }
	}

	pub fn lenient() -> Self {
		Self { strict: false }
	}
}

/// An explicit value that passed its type and range checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedValue {
	pub value: Value,
	pub origin: Provenance,
}

/// Typed explicit values for registered keys, plus non-fatal warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedOptions {
	values: IndexMap<OptionKey, ValidatedValue>,
	warnings: Vec<Violation>,
}

impl ValidatedOptions {
	pub fn get(&self, key: &str) -> Option<&ValidatedValue> {
		self.values.get(key)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&OptionKey, &ValidatedValue)> {
		self.values.iter()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Unknown keys that were dropped in lenient mode.
	pub fn warnings(&self) -> &[Violation] {
		&self.warnings
	}

	pub fn into_warnings(self) -> Vec<Violation> {
		self.warnings
	}
}

/// Validate `merged` against `registry`.
pub fn validate(
	registry: &Registry,
	merged: &MergedOptions,
	mode: ValidationMode,
) -> Result<ValidatedOptions, Vec<Violation>> {
	let mut violations = Vec::new();
	let mut warnings = Vec::new();
	let mut values = IndexMap::new();
	let mut rejected: HashSet<&str> = HashSet::new();

	for (key, entry) in merged.iter() {
		let Some(spec) = registry.get(key.as_str()) else {
			let finding = Violation::new(
				ViolationKind::UnknownKey,
				[key.clone()],
				format!("unknown option {key}"),
				Some(entry.origin.clone()),
			);
			if mode.strict {
				violations.push(finding);
			} else {
				warn!("{}: ignoring unknown option {key}", entry.origin);
				warnings.push(finding);
			}
			continue;
		};

		match typing::typed_value(spec, &entry.value) {
			Ok(value) => {
				values.insert(
					key.clone(),
					ValidatedValue {
						value,
						origin: entry.origin.clone(),
					},
				);
			}
			Err(rejection) => {
				rejected.insert(spec.key);
				violations.push(Violation::new(
					rejection.kind,
					[spec.key],
					rejection.message,
					Some(entry.origin.clone()),
				));
			}
		}
	}

	let effective = Effective {
		registry,
		values: &values,
		rejected: &rejected,
	};
	let mut reported_conflicts = BTreeSet::new();

	for spec in registry.iter() {
		if !effective.is_enabled(spec.key) {
			continue;
		}
		let origin = effective.origin(spec.key);

		for &target in spec.requires {
			if effective.is_rejected(target) || effective.is_enabled(target) {
				continue;
			}
			violations.push(Violation::new(
				ViolationKind::DependencyViolation,
				[spec.key, target],
				format!("{} requires {target} to be enabled", spec.key),
				origin.clone(),
			));
		}

		for &(target, expected) in spec.requires_values {
			if effective.is_rejected(target) {
				continue;
			}
			let expected = expected.to_value();
			let Some(actual) = effective.value(target) else {
				continue;
			};
			if actual != expected {
				violations.push(Violation::new(
					ViolationKind::DependencyViolation,
					[spec.key, target],
					format!(
						"{} requires {target} = {expected}, but it is {actual}",
						spec.key
					),
					origin.clone(),
				));
			}
		}

		for &target in spec.conflicts {
			if effective.is_rejected(target) || !effective.is_enabled(target) {
				continue;
			}
			let pair = if spec.key < target {
				(spec.key, target)
			} else {
				(target, spec.key)
			};
			if !reported_conflicts.insert(pair) {
				continue;
			}
			violations.push(Violation::new(
				ViolationKind::DependencyViolation,
				[spec.key, target],
				format!("{} conflicts with {target}; enable only one", spec.key),
				origin.clone().or_else(|| effective.origin(target)),
			));
		}
	}

	if !violations.is_empty() {
		debug!("validation found {} violations", violations.len());
		return Err(violations);
	}

	debug!(
		"validated {} explicit values with {} warnings",
		values.len(),
		warnings.len()
	);
	Ok(ValidatedOptions { values, warnings })
}

/// View of explicit values layered over registry defaults.
struct Effective<'a> {
	registry: &'a Registry,
	values: &'a IndexMap<OptionKey, ValidatedValue>,
	rejected: &'a HashSet<&'static str>,
}

impl Effective<'_> {
	fn value(&self, key: &str) -> Option<Value> {
		match self.values.get(key) {
			Some(validated) => Some(validated.value.clone()),
			None => self.registry.get(key).map(OptionSpec::default_value),
		}
	}

	fn is_enabled(&self, key: &str) -> bool {
		!self.is_rejected(key) && self.value(key).is_some_and(|value| value.is_truthy())
	}

	fn is_rejected(&self, key: &str) -> bool {
		self.rejected.contains(key)
	}

	fn origin(&self, key: &str) -> Option<Provenance> {
		self.values.get(key).map(|validated| validated.origin.clone())
	}
}
