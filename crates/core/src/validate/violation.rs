use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::key::OptionKey;
use crate::value::Provenance;

/// Category of a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
	UnknownKey,
	TypeMismatch,
	RangeViolation,
	DependencyViolation,
}

impl ViolationKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::UnknownKey => "unknown-key",
			Self::TypeMismatch => "type-mismatch",
			Self::RangeViolation => "range-violation",
			Self::DependencyViolation => "dependency-violation",
		}
	}
}

impl fmt::Display for ViolationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A constraint breached by a merged configuration.
///
/// `origin` points at the assignment that triggered the finding. It is absent
/// when the offending value came from a registry default.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct Violation {
	pub kind: ViolationKind,
	pub keys: Vec<OptionKey>,
	pub message: String,
	pub origin: Option<Provenance>,
}

impl Violation {
	pub(crate) fn new(
		kind: ViolationKind,
		keys: impl IntoIterator<Item = impl Into<OptionKey>>,
		message: impl Into<String>,
		origin: Option<Provenance>,
	) -> Self {
		Self {
			kind,
			keys: keys.into_iter().map(Into::into).collect(),
			message: message.into(),
			origin,
		}
	}

	/// Whether `key` is one of the keys involved.
	pub fn involves(&self, key: &str) -> bool {
		self.keys.iter().any(|involved| involved == key)
	}
}
