//! Combining loaded sources into one set of winning assignments.
//!
//! Later assignments win, across sources and within one source, so the order
//! in which profiles are supplied is significant.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::key::OptionKey;
use crate::loader::{Action, LoadedSource};
use crate::value::{Provenance, RawValue};

/// The winning assignment for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedEntry {
	pub value: RawValue,
	pub origin: Provenance,
	/// Earlier definitions of the same key, oldest first.
	pub shadowed: Vec<Provenance>,
}

/// Winning assignments keyed by option, in order of first definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedOptions {
	entries: IndexMap<OptionKey, MergedEntry>,
}

impl MergedOptions {
	pub fn get(&self, key: &str) -> Option<&MergedEntry> {
		self.entries.get(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&OptionKey, &MergedEntry)> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Merge `sources` in the order given.
///
/// `#undef` drops any earlier definition (its provenance included) so that the
/// key falls back to the registry default.
pub fn merge<'a>(sources: impl IntoIterator<Item = &'a LoadedSource>) -> MergedOptions {
	let mut entries: IndexMap<OptionKey, MergedEntry> = IndexMap::new();

	for source in sources {
		trace!("merging {} assignments from {}", source.len(), source.name());
		for assignment in source.assignments() {
			match &assignment.action {
				Action::Define(value) => {
					if let Some(entry) = entries.get_mut(assignment.key.as_str()) {
						debug!(
							"{}: {} overrides definition at {}",
							assignment.origin, assignment.key, entry.origin
						);
						let previous =
							std::mem::replace(&mut entry.origin, assignment.origin.clone());
						entry.shadowed.push(previous);
						entry.value = value.clone();
					} else {
						entries.insert(
							assignment.key.clone(),
							MergedEntry {
								value: value.clone(),
								origin: assignment.origin.clone(),
								shadowed: Vec::new(),
							},
						);
					}
				}
				Action::Undefine => {
					if entries.shift_remove(assignment.key.as_str()).is_some() {
						debug!("{}: {} undefined", assignment.origin, assignment.key);
					}
				}
			}
		}
	}

	MergedOptions { entries }
}
