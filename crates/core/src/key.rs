use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Name of a single configuration option, e.g. `LV_COLOR_DEPTH`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OptionKey(String);

impl OptionKey {
	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for OptionKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for OptionKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for OptionKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for OptionKey {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for OptionKey {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl PartialEq<str> for OptionKey {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for OptionKey {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// Returns `true` when `text` is a C identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub(crate) fn is_identifier(text: &str) -> bool {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
		_ => return false,
	}
	chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identifiers_follow_c_rules() {
		assert!(is_identifier("LV_USE_LOG"));
		assert!(is_identifier("_private1"));
		assert!(!is_identifier("1LV"));
		assert!(!is_identifier("LV-USE"));
		assert!(!is_identifier(""));
	}

	#[test]
	fn keys_compare_against_plain_strings() {
		let key = OptionKey::from("LV_MEM_SIZE");
		assert_eq!(key, "LV_MEM_SIZE");
		assert_eq!(key.to_string(), "LV_MEM_SIZE");
	}
}
