use std::fmt::Write as _;

use anyhow::Result;
use lvcfg_core::{
	Configuration, OptionGroup, OptionSpec, PipelineError, Registry, Resolution, Violation,
	emit_header,
};
use serde_json::json;

use super::args::{ListFormat, ResolveFormat};

/// Render a successful resolution in the chosen format.
pub(crate) fn render_resolution(
	format: ResolveFormat,
	registry: &Registry,
	resolution: &Resolution,
) -> Result<String> {
	match format {
		ResolveFormat::Header => Ok(emit_header(registry, &resolution.configuration)),
		ResolveFormat::Json => format_resolution_json(resolution),
		ResolveFormat::Summary => Ok(summarize(&resolution.configuration)),
	}
}

/// Format the configuration and warnings as a JSON document.
fn format_resolution_json(resolution: &Resolution) -> Result<String> {
	let warnings: Vec<_> = resolution
		.warnings
		.iter()
		.map(|warning| {
			json!({
				"kind": warning.kind,
				"keys": warning.keys,
				"message": warning.message,
				"origin": warning.origin,
			})
		})
		.collect();

	let payload = json!({
		"configuration": resolution.configuration,
		"warnings": warnings,
	});

	Ok(serde_json::to_string_pretty(&payload)? + "\n")
}

/// Short human-readable overview of a configuration.
fn summarize(config: &Configuration) -> String {
	let derived = config.derived();
	let mut out = String::new();
	let _ = writeln!(
		out,
		"{} options ({} explicit, {} defaulted)",
		config.len(),
		config.explicit_count(),
		config.len() - config.explicit_count()
	);
	let _ = writeln!(out, "  Heap: {}", human_bytes(derived.heap_bytes));
	let _ = writeln!(out, "  Fonts: {}", human_bytes(derived.font_bytes));
	let _ = writeln!(out, "  Total: {}", human_bytes(derived.total_bytes));
	let _ = writeln!(out, "  Enabled fonts: {}", join(&derived.enabled_fonts));
	let _ = writeln!(
		out,
		"  Enabled widgets ({}): {}",
		derived.enabled_widgets.len(),
		join(&derived.enabled_widgets)
	);
	out
}

fn join<T: AsRef<str>>(items: &[T]) -> String {
	if items.is_empty() {
		return "(none)".to_string();
	}
	items
		.iter()
		.map(|item| item.as_ref())
		.collect::<Vec<_>>()
		.join(", ")
}

fn human_bytes(bytes: u64) -> String {
	if bytes >= 1024 {
		format!("{bytes} B ({:.1} KiB)", bytes as f64 / 1024.0)
	} else {
		format!("{bytes} B")
	}
}

/// Print non-fatal findings to stderr.
pub(crate) fn print_warnings(warnings: &[Violation]) {
	for warning in warnings {
		match &warning.origin {
			Some(origin) => eprintln!("warning: {origin}: {warning}"),
			None => eprintln!("warning: {warning}"),
		}
	}
}

/// Print every finding of a failed run to stderr.
pub(crate) fn print_failure(error: &PipelineError) {
	for message in error.messages() {
		eprintln!("error: {message}");
	}
	eprintln!("error: {error}; no configuration produced");
}

/// Format the option table, optionally limited to one group.
pub(crate) fn format_options(
	registry: &Registry,
	group: Option<OptionGroup>,
	format: ListFormat,
) -> Result<String> {
	let specs: Vec<&OptionSpec> = registry
		.iter()
		.filter(|spec| group.is_none_or(|group| spec.group == group))
		.collect();

	match format {
		ListFormat::Plain => Ok(format_options_plain(&specs)),
		ListFormat::Json => {
			let rows: Vec<_> = specs.iter().map(|spec| option_json(spec)).collect();
			Ok(serde_json::to_string_pretty(&rows)? + "\n")
		}
	}
}

fn format_options_plain(specs: &[&OptionSpec]) -> String {
	let width = specs.iter().map(|spec| spec.key.len()).max().unwrap_or(0);
	let mut out = String::new();
	let mut current = None;

	for spec in specs {
		if current != Some(spec.group) {
			if current.is_some() {
				out.push('\n');
			}
			current = Some(spec.group);
			let _ = writeln!(out, "{}:", spec.group.title());
		}
		let _ = writeln!(
			out,
			"  {:width$}  {:<8}  {}",
			spec.key,
			spec.default_value().to_string(),
			spec.summary,
		);
	}
	out
}

fn option_json(spec: &OptionSpec) -> serde_json::Value {
	json!({
		"key": spec.key,
		"group": spec.group,
		"type": spec.kind.name(),
		"accepts": spec.kind.describe(),
		"default": spec.default_value(),
		"summary": spec.summary,
		"requires": spec.requires,
		"requires_values": spec
			.requires_values
			.iter()
			.map(|(key, value)| json!({ "key": key, "value": value.to_value() }))
			.collect::<Vec<_>>(),
		"conflicts": spec.conflicts,
		"symbol": spec.symbol,
	})
}

#[cfg(test)]
mod tests {
	use lvcfg_core::{Pipeline, Source};
	use serde_json::Value;

	use super::*;

	fn resolution(text: &str) -> Resolution {
		Pipeline::new(Registry::builtin())
			.run(&[Source::new("board.h", text)])
			.expect("resolves")
	}

	#[test]
	fn json_format_includes_configuration_and_warnings() {
		let resolution = resolution("#define LV_MEM_SIZE (64U * 1024U)\n#define LV_USE_GPU 1\n");
		let json = render_resolution(ResolveFormat::Json, Registry::builtin(), &resolution)
			.expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");

		let memory = &value["configuration"]["options"]["LV_MEM_SIZE"];
		assert_eq!(memory["value"], 65_536);
		assert_eq!(memory["origin"]["kind"], "explicit");
		assert_eq!(memory["origin"]["line"], 1);
		assert_eq!(
			value["configuration"]["options"]["LV_COLOR_DEPTH"]["origin"]["kind"],
			"default"
		);
		assert_eq!(value["configuration"]["derived"]["heap_bytes"], 65_536);
		assert_eq!(value["warnings"][0]["kind"], "unknown-key");
		assert_eq!(value["warnings"][0]["keys"][0], "LV_USE_GPU");
	}

	#[test]
	fn header_format_is_the_emitted_header() {
		let resolution = resolution("");
		let header = render_resolution(ResolveFormat::Header, Registry::builtin(), &resolution)
			.expect("header");
		assert!(header.starts_with("/**"));
		assert!(header.contains("#define LV_COLOR_DEPTH 16\n"));
	}

	#[test]
	fn summary_reports_memory_figures() {
		let summary = summarize(&resolution("#define LV_MEM_SIZE (64U * 1024U)\n").configuration);
		assert!(summary.contains("  Heap: 65536 B (64.0 KiB)\n"));
		assert!(summary.contains("1 explicit"));
		assert!(summary.contains("LV_FONT_MONTSERRAT_14"));
	}

	#[test]
	fn options_can_be_limited_to_a_group() {
		let plain = format_options(Registry::builtin(), Some(OptionGroup::Theme), ListFormat::Plain)
			.expect("plain");
		assert!(plain.starts_with("Themes:\n"));
		assert!(plain.contains("LV_USE_THEME_MONO"));
		assert!(!plain.contains("LV_COLOR_DEPTH"));

		let json = format_options(Registry::builtin(), Some(OptionGroup::Color), ListFormat::Json)
			.expect("json");
		let rows: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(rows[0]["key"], "LV_COLOR_DEPTH");
		assert_eq!(rows[0]["default"], 16);
		assert_eq!(rows[0]["type"], "int-choice");
		assert_eq!(rows[0]["accepts"], "one of 1, 8, 16, 32");
		assert_eq!(rows[1]["requires_values"][0]["key"], "LV_COLOR_DEPTH");
	}
}
