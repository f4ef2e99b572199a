use thiserror::Error;

/// Errors raised while building or querying a [`Registry`](super::Registry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
	/// An option attempted to register a key that already exists.
	#[error("option '{key}' is already registered")]
	DuplicateKey { key: String },

	/// Two options claimed the same reference symbol.
	#[error("symbol '{symbol}' of '{key}' is already claimed by '{existing}'")]
	DuplicateSymbol {
		symbol: &'static str,
		key: &'static str,
		existing: &'static str,
	},

	/// A lookup named a key that was never registered.
	#[error("unknown option '{key}'")]
	UnknownKey { key: String },

	/// A requires/conflicts rule points at an unregistered key.
	#[error("option '{key}' {rule} unregistered option '{target}'")]
	DanglingReference {
		key: &'static str,
		rule: &'static str,
		target: &'static str,
	},
}
