use indexmap::IndexMap;
use serde::Serialize;

use crate::key::OptionKey;
use crate::value::{Provenance, Value};

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Origin {
	Explicit(Provenance),
	Default,
}

impl Origin {
	pub fn is_default(&self) -> bool {
		matches!(self, Self::Default)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
	pub value: Value,
	pub origin: Origin,
}

/// Values computed from the resolved options rather than read from a source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Derived {
	/// Size of the built-in heap, zero when a custom allocator is in use.
	pub heap_bytes: u64,
	/// Estimated flash footprint of every enabled built-in font.
	pub font_bytes: u64,
	pub total_bytes: u64,
	pub enabled_fonts: Vec<OptionKey>,
	pub enabled_widgets: Vec<OptionKey>,
}

/// The canonical, fully resolved configuration.
///
/// Holds a value for every registered option, in registry order. Equality
/// compares values and derived data only, so a configuration reloaded from its
/// own emitted header compares equal to the original even though every value
/// now carries a different origin.
#[derive(Debug, Clone, Serialize)]
pub struct Configuration {
	options: IndexMap<OptionKey, ConfigEntry>,
	derived: Derived,
}

impl Configuration {
	pub(super) fn new(options: IndexMap<OptionKey, ConfigEntry>, derived: Derived) -> Self {
		Self { options, derived }
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.options.get(key).map(|entry| &entry.value)
	}

	pub fn entry(&self, key: &str) -> Option<&ConfigEntry> {
		self.options.get(key)
	}

	/// `true` when `key` is registered and its value is truthy.
	pub fn is_enabled(&self, key: &str) -> bool {
		self.get(key).is_some_and(Value::is_truthy)
	}

	/// Iterate over all options in registry order.
	pub fn iter(&self) -> impl Iterator<Item = (&OptionKey, &ConfigEntry)> {
		self.options.iter()
	}

	pub fn len(&self) -> usize {
		self.options.len()
	}

	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	pub fn derived(&self) -> &Derived {
		&self.derived
	}

	/// Number of options set explicitly by some source.
	pub fn explicit_count(&self) -> usize {
		self.options
			.values()
			.filter(|entry| !entry.origin.is_default())
			.count()
	}
}

impl PartialEq for Configuration {
	fn eq(&self, other: &Self) -> bool {
		self.derived == other.derived
			&& self.options.len() == other.options.len()
			&& self
				.options
				.iter()
				.zip(other.options.iter())
				.all(|((key, entry), (other_key, other_entry))| {
					key == other_key && entry.value == other_entry.value
				})
	}
}

impl Eq for Configuration {}
