//! Parsing of `lv_conf.h`-style text into ordered option assignments.
//!
//! Only `#define` and `#undef` carry meaning. Comments, free-form annotation
//! lines and unrelated directives are discarded without interpretation, so a
//! profile may carry commentary in any language. Keys are not checked against
//! the registry here; unknown keys flow through to validation so that every
//! problem in every source can be reported in one pass.

mod conditional;
mod error;
mod expr;
mod scan;

use std::sync::Arc;

use log::{debug, trace};

use crate::key::{OptionKey, is_identifier};
use crate::value::{Provenance, RawValue};

use conditional::{ConditionStack, Directive};
pub use error::LoadError;
pub(crate) use expr::evaluate;

/// What a single directive does to its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	Define(RawValue),
	Undefine,
}

/// One `#define`/`#undef` read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
	pub key: OptionKey,
	pub action: Action,
	pub origin: Provenance,
}

/// A named text blob to be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
	pub name: String,
	pub text: String,
}

impl Source {
	pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			text: text.into(),
		}
	}
}

/// All assignments of one source, in the order they appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
	name: Arc<str>,
	assignments: Vec<Assignment>,
}

impl LoadedSource {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn assignments(&self) -> &[Assignment] {
		&self.assignments
	}

	pub fn len(&self) -> usize {
		self.assignments.len()
	}

	pub fn is_empty(&self) -> bool {
		self.assignments.is_empty()
	}
}

impl IntoIterator for LoadedSource {
	type Item = Assignment;
	type IntoIter = std::vec::IntoIter<Assignment>;

	fn into_iter(self) -> Self::IntoIter {
		self.assignments.into_iter()
	}
}

/// Load a [`Source`].
pub fn load_source(source: &Source) -> Result<LoadedSource, Vec<LoadError>> {
	load(&source.name, &source.text)
}

/// Parse `text` into assignments, collecting every load error instead of
/// stopping at the first.
pub fn load(name: &str, text: &str) -> Result<LoadedSource, Vec<LoadError>> {
	let name: Arc<str> = Arc::from(name);
	let scanned = scan::scan(text);
	let mut errors = Vec::new();
	let mut assignments = Vec::new();
	let mut conditions = ConditionStack::default();
	let mut pending_guard: Option<String> = None;

	for line in &scanned.lines {
		let origin = Provenance::new(Arc::clone(&name), line.line);
		let Some(directive) = line.text.strip_prefix('#') else {
			trace!("{origin}: discarding commentary");
			continue;
		};
		let (directive, rest) = split_word(directive.trim_start());
		let guard = pending_guard.take();

		match directive {
			"if" | "ifdef" | "ifndef" | "elif" | "else" | "endif" => {
				let parsed = Directive::parse(directive, rest);
				if let Err(error) = conditions.apply(parsed, &origin) {
					errors.push(error);
				}
				if directive == "ifndef" && conditions.is_active() {
					pending_guard = Some(rest.trim().to_string());
				}
			}
			_ if !conditions.is_active() => {
				trace!("{origin}: skipping #{directive} in inactive block");
			}
			"define" => {
				let (key, value) = split_word(rest.trim_start());
				if !is_identifier(key) {
					errors.push(LoadError::MissingName {
						directive: "define",
						origin,
					});
					continue;
				}
				let value = value.trim();
				if value.is_empty() && guard.as_deref() == Some(key) {
					debug!("{origin}: dropping include guard {key}");
					continue;
				}
				assignments.push(Assignment {
					key: OptionKey::from(key),
					action: Action::Define(classify(value)),
					origin,
				});
			}
			"undef" => {
				let key = rest.trim();
				if !is_identifier(key) {
					errors.push(LoadError::MissingName {
						directive: "undef",
						origin,
					});
					continue;
				}
				assignments.push(Assignment {
					key: OptionKey::from(key),
					action: Action::Undefine,
					origin,
				});
			}
			other => debug!("{origin}: ignoring #{other} directive"),
		}
	}

	if let Some(line) = scanned.unterminated_comment {
		errors.push(LoadError::UnterminatedComment {
			origin: Provenance::new(Arc::clone(&name), line),
		});
	}
	if let Some(line) = conditions.unclosed() {
		errors.push(LoadError::UnterminatedConditional {
			origin: Provenance::new(Arc::clone(&name), line),
		});
	}

	if !errors.is_empty() {
		return Err(errors);
	}

	debug!("loaded {} assignments from {name}", assignments.len());
	Ok(LoadedSource { name, assignments })
}

/// Split off the leading identifier-like word. A function-like macro keeps
/// its parameter list in the remainder.
fn split_word(text: &str) -> (&str, &str) {
	let end = text
		.find(|ch: char| !(ch == '_' || ch.is_ascii_alphanumeric()))
		.unwrap_or(text.len());
	text.split_at(end)
}

/// Classify the value text of a `#define`.
pub(crate) fn classify(text: &str) -> RawValue {
	let text = text.trim();
	if text.is_empty() {
		return RawValue::Empty;
	}
	if let Some(literal) = parse_string_literal(text) {
		return RawValue::Text(literal);
	}
	if text.len() >= 2 && text.starts_with('<') && text.ends_with('>') {
		return RawValue::Text(text.to_string());
	}
	if let Some(symbol) = text.strip_prefix('&').map(str::trim)
		&& is_identifier(symbol)
	{
		return RawValue::Reference(symbol.to_string());
	}
	if is_identifier(text) {
		return RawValue::Symbol(text.to_string());
	}
	if let Some(value) = evaluate(text) {
		return RawValue::Int(value);
	}
	RawValue::Expression(collapse_whitespace(text))
}

/// Parse a single complete string literal, resolving `\"` and `\\`.
fn parse_string_literal(text: &str) -> Option<String> {
	let inner = text.strip_prefix('"')?;
	let mut literal = String::with_capacity(inner.len());
	let mut chars = inner.chars();

	while let Some(ch) = chars.next() {
		match ch {
			'"' => return chars.as_str().is_empty().then_some(literal),
			'\\' => match chars.next()? {
				escaped @ ('"' | '\\') => literal.push(escaped),
				other => {
					literal.push('\\');
					literal.push(other);
				}
			},
			_ => literal.push(ch),
		}
	}

	None
}

/// Collapse runs of whitespace to one space, leaving string and character
/// literals untouched.
fn collapse_whitespace(text: &str) -> String {
	let mut collapsed = String::with_capacity(text.len());
	let mut quote: Option<char> = None;
	let mut pending_space = false;
	let mut chars = text.trim().chars();

	while let Some(ch) = chars.next() {
		if let Some(open) = quote {
			collapsed.push(ch);
			if ch == '\\' {
				if let Some(escaped) = chars.next() {
					collapsed.push(escaped);
				}
			} else if ch == open {
				quote = None;
			}
			continue;
		}
		if ch.is_whitespace() {
			pending_space = true;
			continue;
		}
		if pending_space {
			collapsed.push(' ');
			pending_space = false;
		}
		if ch == '"' || ch == '\'' {
			quote = Some(ch);
		}
		collapsed.push(ch);
	}

	collapsed
}

#[cfg(test)]
mod tests;
