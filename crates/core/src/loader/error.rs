use thiserror::Error;

use crate::value::Provenance;

/// Structural problems that prevent a source from being read at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
	#[error("{origin}: block comment is never closed")]
	UnterminatedComment { origin: Provenance },

	#[error("{origin}: #{directive} is missing a valid option name")]
	MissingName {
		directive: &'static str,
		origin: Provenance,
	},

	#[error("{origin}: #{directive} without a matching #if")]
	UnbalancedDirective {
		directive: &'static str,
		origin: Provenance,
	},

	#[error("{origin}: #{directive} after #else")]
	AfterElse {
		directive: &'static str,
		origin: Provenance,
	},

	#[error("{origin}: conditional block is never closed with #endif")]
	UnterminatedConditional { origin: Provenance },
}
