use thiserror::Error;

use crate::key::OptionKey;
use crate::value::Provenance;

/// A symbolic reference that does not land on an enabled option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnresolvedReference {
	#[error("{key} refers to &{symbol}, which names no registered font")]
	UnknownSymbol {
		key: OptionKey,
		symbol: String,
		origin: Option<Provenance>,
	},

	#[error("{key} refers to &{symbol}, but {target} is disabled")]
	DisabledTarget {
		key: OptionKey,
		symbol: String,
		target: OptionKey,
		origin: Option<Provenance>,
	},
}

impl UnresolvedReference {
	/// The option holding the reference.
	pub fn key(&self) -> &OptionKey {
		match self {
			Self::UnknownSymbol { key, .. } | Self::DisabledTarget { key, .. } => key,
		}
	}

	/// Where the reference was assigned, if it was not a default.
	pub fn origin(&self) -> Option<&Provenance> {
		match self {
			Self::UnknownSymbol { origin, .. } | Self::DisabledTarget { origin, .. } => {
				origin.as_ref()
			}
		}
	}
}
