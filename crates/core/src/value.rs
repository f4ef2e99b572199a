//! Untyped values as they appear in a source and typed values after validation.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Location an assignment was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Provenance {
	source: Arc<str>,
	line: usize,
}

impl Provenance {
	pub fn new(source: impl Into<Arc<str>>, line: usize) -> Self {
		Self {
			source: source.into(),
			line,
		}
	}

	/// Name of the source (usually a file path, or `<stdin>`).
	pub fn source(&self) -> &str {
		&self.source
	}

	/// One-based line number of the directive.
	pub fn line(&self) -> usize {
		self.line
	}
}

impl fmt::Display for Provenance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.source, self.line)
	}
}

/// A value exactly as classified by the loader, before any type information
/// from the registry is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
	/// A constant integer expression, already evaluated.
	Int(i64),
	/// A string literal (`"Arduino.h"`) or angle include path (`<stdlib.h>`).
	Text(String),
	/// A bare identifier such as `LV_LOG_LEVEL_WARN`.
	Symbol(String),
	/// An address-of reference such as `&lv_font_montserrat_14`.
	Reference(String),
	/// Anything the loader cannot evaluate, kept verbatim.
	Expression(String),
	/// A `#define` without a value.
	Empty,
}

impl RawValue {
	/// Short noun describing the value's shape, used in diagnostics.
	pub fn describe(&self) -> &'static str {
		match self {
			Self::Int(_) => "an integer",
			Self::Text(_) => "a string",
			Self::Symbol(_) => "an identifier",
			Self::Reference(_) => "a reference",
			Self::Expression(_) => "an expression",
			Self::Empty => "no value",
		}
	}
}

impl fmt::Display for RawValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(value) => write!(f, "{value}"),
			Self::Text(text) => f.write_str(&render_text(text)),
			Self::Symbol(symbol) | Self::Expression(symbol) => f.write_str(symbol),
			Self::Reference(symbol) => write!(f, "&{symbol}"),
			Self::Empty => Ok(()),
		}
	}
}

/// A value that passed its type check against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
	Bool(bool),
	Int(i64),
	Symbol(String),
	Text(String),
	Expression(String),
	Reference(String),
}

impl Value {
	/// C truthiness: non-zero numbers and non-empty text count as enabled.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Bool(value) => *value,
			Self::Int(value) => *value != 0,
			Self::Symbol(text)
			| Self::Text(text)
			| Self::Expression(text)
			| Self::Reference(text) => !text.is_empty(),
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Symbol(text)
			| Self::Text(text)
			| Self::Expression(text)
			| Self::Reference(text) => Some(text),
			_ => None,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(value) => f.write_str(if *value { "1" } else { "0" }),
			Self::Int(value) => write!(f, "{value}"),
			Self::Text(text) => f.write_str(&render_text(text)),
			Self::Symbol(text) | Self::Expression(text) => f.write_str(text),
			Self::Reference(symbol) => write!(f, "&{symbol}"),
		}
	}
}

/// Render text the way it appears in a header: angle include paths verbatim,
/// everything else as an escaped string literal.
pub(crate) fn render_text(text: &str) -> String {
	if text.len() >= 2 && text.starts_with('<') && text.ends_with('>') {
		return text.to_string();
	}

	let mut rendered = String::with_capacity(text.len() + 2);
	rendered.push('"');
	for ch in text.chars() {
		if ch == '"' || ch == '\\' {
			rendered.push('\\');
		}
		rendered.push(ch);
	}
	rendered.push('"');
	rendered
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truthiness_follows_c_conventions() {
		assert!(Value::Bool(true).is_truthy());
		assert!(!Value::Int(0).is_truthy());
		assert!(Value::Int(-1).is_truthy());
		assert!(!Value::Expression(String::new()).is_truthy());
		assert!(Value::Text("Arduino.h".into()).is_truthy());
	}

	#[test]
	fn text_rendering_keeps_angle_includes() {
		assert_eq!(render_text("<stdlib.h>"), "<stdlib.h>");
		assert_eq!(render_text("Arduino.h"), "\"Arduino.h\"");
		assert_eq!(render_text("a\"b"), "\"a\\\"b\"");
	}

	#[test]
	fn provenance_displays_as_location() {
		let origin = Provenance::new("board.h", 12);
		assert_eq!(origin.to_string(), "board.h:12");
	}
}
