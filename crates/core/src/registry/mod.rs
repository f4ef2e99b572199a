//! The set of recognised options, their types, defaults and cross-key rules.
//!
//! A [`Registry`] is assembled once and never mutated afterwards. The built-in
//! table covering every key seen across real-world `lv_conf.h` profiles is
//! available through [`Registry::builtin`], which initialises lazily and can be
//! shared by any number of concurrent resolution runs.

mod builtin;
mod error;
mod spec;

use std::collections::HashMap;
use std::sync::OnceLock;

use indexmap::IndexMap;

pub use builtin::BUILTIN_OPTIONS;
pub use error::RegistryError;
pub use spec::{FontFootprint, Literal, OptionGroup, OptionSpec, ValueType};

/// Lookup table of [`OptionSpec`]s keyed by option name, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	specs: IndexMap<&'static str, OptionSpec>,
	symbols: HashMap<&'static str, &'static str>,
}

impl Registry {
	/// Create an empty registry.
	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	/// Build a registry from a table of specs and verify that every
	/// cross-key rule names a registered option.
	pub fn from_specs<I>(specs: I) -> Result<Self, RegistryError>
	where
		I: IntoIterator<Item = OptionSpec>,
	{
		let mut registry = Self::empty();
		for spec in specs {
			registry.register(spec)?;
		}
		registry.check_integrity()?;
		Ok(registry)
	}

	/// The process-wide registry built from [`BUILTIN_OPTIONS`].
	pub fn builtin() -> &'static Registry {
		static BUILTIN: OnceLock<Registry> = OnceLock::new();
		BUILTIN.get_or_init(|| {
			Registry::from_specs(BUILTIN_OPTIONS.iter().copied())
				.unwrap_or_else(|error| panic!("built-in option table is inconsistent: {error}"))
		})
	}

	/// Register a new option. Keys and reference symbols must be unique.
	pub fn register(&mut self, spec: OptionSpec) -> Result<(), RegistryError> {
		if self.specs.contains_key(spec.key) {
			return Err(RegistryError::DuplicateKey {
				key: spec.key.to_string(),
			});
		}
		if let Some(symbol) = spec.symbol {
			if let Some(existing) = self.symbols.get(symbol) {
				return Err(RegistryError::DuplicateSymbol {
					symbol,
					key: spec.key,
					existing: *existing,
				});
			}
			self.symbols.insert(symbol, spec.key);
		}
		self.specs.insert(spec.key, spec);
		Ok(())
	}

	/// Look up a spec, failing when the key is not registered.
	pub fn lookup(&self, key: &str) -> Result<&OptionSpec, RegistryError> {
		self.get(key).ok_or_else(|| RegistryError::UnknownKey {
			key: key.to_string(),
		})
	}

	pub fn get(&self, key: &str) -> Option<&OptionSpec> {
		self.specs.get(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.specs.contains_key(key)
	}

	/// Find the option that a reference symbol such as `lv_font_montserrat_14`
	/// points to.
	pub fn key_for_symbol(&self, symbol: &str) -> Option<&OptionSpec> {
		let key = self.symbols.get(symbol)?;
		self.specs.get(key)
	}

	/// Iterate over all specs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
		self.specs.values()
	}

	/// Iterate over the specs of a single group in declaration order.
	pub fn group(&self, group: OptionGroup) -> impl Iterator<Item = &OptionSpec> {
		self.iter().filter(move |spec| spec.group == group)
	}

	pub fn len(&self) -> usize {
		self.specs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.specs.is_empty()
	}

	fn check_integrity(&self) -> Result<(), RegistryError> {
		for spec in self.specs.values() {
			let requires = spec.requires.iter().map(|target| ("requires", *target));
			let values = spec
				.requires_values
				.iter()
				.map(|(target, _)| ("requires a value of", *target));
			let conflicts = spec.conflicts.iter().map(|target| ("conflicts with", *target));

			for (rule, target) in requires.chain(values).chain(conflicts) {
				if !self.specs.contains_key(target) {
					return Err(RegistryError::DanglingReference {
						key: spec.key,
						rule,
						target,
					});
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
