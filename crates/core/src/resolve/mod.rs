//! Turning validated explicit values into a complete [`Configuration`].
//!
//! Every registered option receives a value: the validated explicit one if a
//! source supplied it, the registry default otherwise. Font references are
//! then checked against the font options they name, and the derived memory
//! figures are computed.

mod configuration;
mod error;

use indexmap::IndexMap;
use log::debug;

use crate::key::OptionKey;
use crate::registry::{OptionGroup, Registry, ValueType};
use crate::validate::ValidatedOptions;
use crate::value::Value;

pub use configuration::{ConfigEntry, Configuration, Derived, Origin};
pub use error::UnresolvedReference;

const MEM_CUSTOM: &str = "LV_MEM_CUSTOM";
const MEM_SIZE: &str = "LV_MEM_SIZE";

/// Resolve `validated` against `registry`, collecting every unresolved
/// reference.
pub fn resolve(
	registry: &Registry,
	validated: &ValidatedOptions,
) -> Result<Configuration, Vec<UnresolvedReference>> {
	let options: IndexMap<OptionKey, ConfigEntry> = registry
		.iter()
		.map(|spec| {
			let entry = match validated.get(spec.key) {
				Some(explicit) => ConfigEntry {
					value: explicit.value.clone(),
					origin: Origin::Explicit(explicit.origin.clone()),
				},
				None => ConfigEntry {
					value: spec.default_value(),
					origin: Origin::Default,
				},
			};
			(OptionKey::from(spec.key), entry)
		})
		.collect();

	let unresolved = check_references(registry, &options);
	if !unresolved.is_empty() {
		debug!("{} unresolved references", unresolved.len());
		return Err(unresolved);
	}

	let derived = derive(registry, &options);
	debug!(
		"resolved {} options: heap {} B, fonts {} B",
		options.len(),
		derived.heap_bytes,
		derived.font_bytes
	);
	Ok(Configuration::new(options, derived))
}

fn check_references(
	registry: &Registry,
	options: &IndexMap<OptionKey, ConfigEntry>,
) -> Vec<UnresolvedReference> {
	let mut unresolved = Vec::new();

	for spec in registry.iter() {
		if spec.kind != ValueType::FontRef {
			continue;
		}
		let Some(entry) = options.get(spec.key) else {
			continue;
		};
		let Value::Reference(symbol) = &entry.value else {
			continue;
		};
		let origin = match &entry.origin {
			Origin::Explicit(origin) => Some(origin.clone()),
			Origin::Default => None,
		};

		match registry.key_for_symbol(symbol) {
			None => unresolved.push(UnresolvedReference::UnknownSymbol {
				key: OptionKey::from(spec.key),
				symbol: symbol.clone(),
				origin,
			}),
			Some(target) if !is_enabled(options, target.key) => {
				unresolved.push(UnresolvedReference::DisabledTarget {
					key: OptionKey::from(spec.key),
					symbol: symbol.clone(),
					target: OptionKey::from(target.key),
					origin,
				});
			}
			Some(_) => {}
		}
	}

	unresolved
}

fn derive(registry: &Registry, options: &IndexMap<OptionKey, ConfigEntry>) -> Derived {
	let heap_bytes = if is_enabled(options, MEM_CUSTOM) {
		0
	} else {
		options
			.get(MEM_SIZE)
			.and_then(|entry| entry.value.as_int())
			.and_then(|bytes| u64::try_from(bytes).ok())
			.unwrap_or(0)
	};

	let mut font_bytes = 0;
	let mut enabled_fonts = Vec::new();
	for spec in registry.iter() {
		if let Some(footprint) = spec.footprint
			&& is_enabled(options, spec.key)
		{
			font_bytes += footprint.bytes();
			enabled_fonts.push(OptionKey::from(spec.key));
		}
	}

	let enabled_widgets = registry
		.group(OptionGroup::Widget)
		.filter(|spec| spec.kind == ValueType::Bool && spec.key.starts_with("LV_USE_"))
		.filter(|spec| is_enabled(options, spec.key))
		.map(|spec| OptionKey::from(spec.key))
		.collect();

	Derived {
		heap_bytes,
		font_bytes,
		total_bytes: heap_bytes + font_bytes,
		enabled_fonts,
		enabled_widgets,
	}
}

fn is_enabled(options: &IndexMap<OptionKey, ConfigEntry>, key: &str) -> bool {
	options
		.get(key)
		.is_some_and(|entry| entry.value.is_truthy())
}
