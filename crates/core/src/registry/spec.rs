use std::fmt;

use serde::Serialize;

use crate::value::Value;

/// Section an option belongs to. Used for grouping in listings and in the
/// emitted header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionGroup {
	Color,
	Memory,
	Tick,
	Display,
	Logging,
	Assert,
	Font,
	Text,
	Widget,
	Theme,
}

impl OptionGroup {
	pub const ALL: [OptionGroup; 10] = [
		Self::Color,
		Self::Memory,
		Self::Tick,
		Self::Display,
		Self::Logging,
		Self::Assert,
		Self::Font,
		Self::Text,
		Self::Widget,
		Self::Theme,
	];

	pub fn id(self) -> &'static str {
		match self {
			Self::Color => "color",
			Self::Memory => "memory",
			Self::Tick => "tick",
			Self::Display => "display",
			Self::Logging => "logging",
			Self::Assert => "assert",
			Self::Font => "font",
			Self::Text => "text",
			Self::Widget => "widget",
			Self::Theme => "theme",
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Self::Color => "Color settings",
			Self::Memory => "Memory settings",
			Self::Tick => "HAL tick settings",
			Self::Display => "Display and input timing",
			Self::Logging => "Logging",
			Self::Assert => "Asserts",
			Self::Font => "Fonts",
			Self::Text => "Text settings",
			Self::Widget => "Widgets",
			Self::Theme => "Themes",
		}
	}

	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|group| group.id().eq_ignore_ascii_case(id.trim()))
	}
}

impl fmt::Display for OptionGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Shape and admissible values of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
	/// `0` or `1`.
	Bool,
	/// An integer within an inclusive range.
	Int { min: i64, max: i64 },
	/// A byte count within an inclusive range.
	Bytes { min: i64, max: i64 },
	/// One of a fixed set of integers.
	IntChoice(&'static [i64]),
	/// One of a fixed set of identifiers.
	Choice(&'static [&'static str]),
	/// A string literal or angle include path.
	Text,
	/// An opaque C expression handed to the toolkit verbatim.
	Expression,
	/// `&symbol` naming a font that must be enabled.
	FontRef,
}

impl ValueType {
	pub fn describe(&self) -> String {
		match self {
			Self::Bool => "0 or 1".to_string(),
			Self::Int { min, max } => format!("an integer in {min}..={max}"),
			Self::Bytes { min, max } => format!("a byte count in {min}..={max}"),
			Self::IntChoice(choices) => {
				let choices: Vec<String> = choices.iter().map(i64::to_string).collect();
				format!("one of {}", choices.join(", "))
			}
			Self::Choice(choices) => format!("one of {}", choices.join(", ")),
			Self::Text => "a string".to_string(),
			Self::Expression => "an expression".to_string(),
			Self::FontRef => "a font reference (&lv_font_...)".to_string(),
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int { .. } => "int",
			Self::Bytes { .. } => "bytes",
			Self::IntChoice(_) => "int-choice",
			Self::Choice(_) => "choice",
			Self::Text => "text",
			Self::Expression => "expression",
			Self::FontRef => "font-ref",
		}
	}
}

/// A value written directly into the static option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
	Bool(bool),
	Int(i64),
	Symbol(&'static str),
	Text(&'static str),
	Expression(&'static str),
	Reference(&'static str),
}

impl Literal {
	pub fn to_value(self) -> Value {
		match self {
			Self::Bool(value) => Value::Bool(value),
			Self::Int(value) => Value::Int(value),
			Self::Symbol(text) => Value::Symbol(text.to_string()),
			Self::Text(text) => Value::Text(text.to_string()),
			Self::Expression(text) => Value::Expression(text.to_string()),
			Self::Reference(text) => Value::Reference(text.to_string()),
		}
	}
}

/// Estimated flash footprint parameters of a built-in bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFootprint {
	pub size: u32,
	pub bpp: u32,
}

impl FontFootprint {
	/// Printable ASCII range covered by the built-in fonts.
	pub const GLYPHS: u64 = 95;
	/// Fixed cost of the font descriptor, kerning and cmap tables.
	pub const DESCRIPTOR_BYTES: u64 = 1024;

	/// `GLYPHS * size^2 * bpp / 8 + DESCRIPTOR_BYTES`.
	pub const fn bytes(self) -> u64 {
		let size = self.size as u64;
		Self::GLYPHS * size * size * self.bpp as u64 / 8 + Self::DESCRIPTOR_BYTES
	}
}

/// Declaration of one recognised option.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
	pub key: &'static str,
	pub group: OptionGroup,
	pub kind: ValueType,
	pub default: Literal,
	pub summary: &'static str,
	/// Keys that must be truthy whenever this option is.
	pub requires: &'static [&'static str],
	/// Exact values other keys must hold whenever this option is truthy.
	pub requires_values: &'static [(&'static str, Literal)],
	/// Keys that must not be truthy together with this option.
	pub conflicts: &'static [&'static str],
	/// Symbol other options use to reference this one (`lv_font_...`).
	pub symbol: Option<&'static str>,
	pub footprint: Option<FontFootprint>,
}

impl OptionSpec {
	pub const fn new(
		key: &'static str,
		group: OptionGroup,
		kind: ValueType,
		default: Literal,
		summary: &'static str,
	) -> Self {
		Self {
			key,
			group,
			kind,
			default,
			summary,
			requires: &[],
			requires_values: &[],
			conflicts: &[],
			symbol: None,
			footprint: None,
		}
	}

	pub const fn flag(
		key: &'static str,
		group: OptionGroup,
		default: bool,
		summary: &'static str,
	) -> Self {
		Self::new(key, group, ValueType::Bool, Literal::Bool(default), summary)
	}

	pub const fn requires(mut self, keys: &'static [&'static str]) -> Self {
		self.requires = keys;
		self
	}

	pub const fn requires_values(mut self, pairs: &'static [(&'static str, Literal)]) -> Self {
		self.requires_values = pairs;
		self
	}

	pub const fn conflicts(mut self, keys: &'static [&'static str]) -> Self {
		self.conflicts = keys;
		self
	}

	pub const fn font(mut self, symbol: &'static str, size: u32, bpp: u32) -> Self {
		self.symbol = Some(symbol);
		self.footprint = Some(FontFootprint { size, bpp });
		self
	}

	pub fn default_value(&self) -> Value {
		self.default.to_value()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn footprint_follows_documented_formula() {
		let montserrat_14 = FontFootprint { size: 14, bpp: 4 };
		assert_eq!(montserrat_14.bytes(), 95 * 14 * 14 * 4 / 8 + 1024);

		let unscii_8 = FontFootprint { size: 8, bpp: 1 };
		assert_eq!(unscii_8.bytes(), 95 * 64 / 8 + 1024);
	}

	#[test]
	fn groups_parse_case_insensitively() {
		assert_eq!(OptionGroup::from_id("Widget"), Some(OptionGroup::Widget));
		assert_eq!(OptionGroup::from_id(" font "), Some(OptionGroup::Font));
		assert_eq!(OptionGroup::from_id("nope"), None);
	}

	#[test]
	fn describe_lists_choices() {
		assert_eq!(ValueType::IntChoice(&[8, 16]).describe(), "one of 8, 16");
		assert_eq!(ValueType::Bool.describe(), "0 or 1");
	}
}
