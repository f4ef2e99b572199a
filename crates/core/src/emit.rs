//! Rendering a [`Configuration`] as an `lv_conf.h`-style header.
//!
//! The layout is stable: one `#define` per registered option in registry
//! order, grouped under section banners. Loading the emitted text again
//! reproduces the same configuration.

use std::fmt::Write as _;

use crate::registry::{OptionGroup, Registry, ValueType};
use crate::resolve::Configuration;
use crate::value::{Value, render_text};

const GUARD: &str = "LV_CONF_H";

/// Render `config` as a header, using `registry` for ordering and grouping.
pub fn emit_header(registry: &Registry, config: &Configuration) -> String {
	let mut out = String::new();
	let derived = config.derived();

	out.push_str("/**\n * @file lv_conf.h\n * Generated by lvcfg. Edit the source profiles instead.\n *\n");
	let _ = writeln!(out, " * Built-in heap: {} bytes", derived.heap_bytes);
	let _ = writeln!(out, " * Font data (estimated): {} bytes", derived.font_bytes);
	let _ = writeln!(out, " * Total: {} bytes", derived.total_bytes);
	let _ = writeln!(out, " * Enabled fonts: {}", join_keys(&derived.enabled_fonts));
	let _ = writeln!(
		out,
		" * Enabled widgets: {}",
		derived.enabled_widgets.len()
	);
	out.push_str(" */\n\n");

	let _ = writeln!(out, "#ifndef {GUARD}\n#define {GUARD}\n");
	out.push_str("#include <stdint.h>\n");

	let mut current: Option<OptionGroup> = None;
	for spec in registry.iter() {
		let Some(value) = config.get(spec.key) else {
			continue;
		};
		if current != Some(spec.group) {
			current = Some(spec.group);
			let _ = writeln!(
				out,
				"\n/*====================\n   {}\n *====================*/\n",
				spec.group.title()
			);
		}
		let _ = writeln!(out, "/*{}*/", spec.summary);
		match render_value(&spec.kind, value) {
			Some(rendered) => {
				let _ = writeln!(out, "#define {} {rendered}", spec.key);
			}
			None => {
				let _ = writeln!(out, "#define {}", spec.key);
			}
		}
	}

	let _ = writeln!(out, "\n#endif /*{GUARD}*/");
	out
}

/// Header text of a single value, `None` for a valueless define.
fn render_value(kind: &ValueType, value: &Value) -> Option<String> {
	let rendered = match value {
		Value::Bool(enabled) => u8::from(*enabled).to_string(),
		Value::Int(bytes) if matches!(kind, ValueType::Bytes { .. }) => render_bytes(*bytes),
		Value::Int(number) => number.to_string(),
		Value::Text(text) => render_text(text),
		Value::Expression(expr) if expr.is_empty() => return None,
		Value::Symbol(text) | Value::Expression(text) => text.clone(),
		Value::Reference(symbol) => format!("&{symbol}"),
	};
	Some(rendered)
}

fn render_bytes(bytes: i64) -> String {
	if bytes != 0 && bytes % 1024 == 0 {
		format!("({}U * 1024U)", bytes / 1024)
	} else {
		bytes.to_string()
	}
}

fn join_keys(keys: &[crate::key::OptionKey]) -> String {
	if keys.is_empty() {
		return "none".to_string();
	}
	keys.iter()
		.map(|key| key.as_str())
		.collect::<Vec<_>>()
		.join(", ")
}
