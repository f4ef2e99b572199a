use super::*;
use crate::value::Value;

fn spec(key: &'static str) -> OptionSpec {
	OptionSpec::flag(key, OptionGroup::Widget, false, "test option")
}

#[test]
fn register_rejects_duplicate_keys() {
	let mut registry = Registry::empty();
	registry.register(spec("LV_USE_A")).unwrap();

	let err = registry.register(spec("LV_USE_A")).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateKey {
			key: "LV_USE_A".into()
		}
	);
	assert_eq!(registry.len(), 1);
}

#[test]
fn register_rejects_duplicate_symbols() {
	let mut registry = Registry::empty();
	registry
		.register(spec("LV_FONT_A").font("lv_font_shared", 10, 4))
		.unwrap();

	let err = registry
		.register(spec("LV_FONT_B").font("lv_font_shared", 12, 4))
		.unwrap_err();
	assert!(matches!(
		err,
		RegistryError::DuplicateSymbol {
			existing: "LV_FONT_A",
			..
		}
	));
}

#[test]
fn lookup_reports_unknown_keys() {
	let registry = Registry::empty();
	let err = registry.lookup("LV_USE_NOTHING").unwrap_err();
	assert_eq!(err.to_string(), "unknown option 'LV_USE_NOTHING'");
}

#[test]
fn from_specs_rejects_dangling_rules() {
	let specs = [spec("LV_USE_A").requires(&["LV_USE_MISSING"])];
	let err = Registry::from_specs(specs).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DanglingReference {
			key: "LV_USE_A",
			rule: "requires",
			target: "LV_USE_MISSING",
		}
	);
}

#[test]
fn builtin_registry_is_consistent() {
	let registry = Registry::builtin();
	assert!(!registry.is_empty());
	assert_eq!(registry.len(), BUILTIN_OPTIONS.len());
	assert!(registry.contains("LV_COLOR_DEPTH"));
	assert!(registry.contains("LV_TICK_CUSTOM_SYS_TIME_EXPR"));
}

#[test]
fn builtin_defaults_satisfy_their_own_rules() {
	let registry = Registry::builtin();
	let default_of = |key: &str| registry.get(key).map(OptionSpec::default_value);

	for spec in registry.iter() {
		if !spec.default_value().is_truthy() {
			continue;
		}
		for required in spec.requires {
			let value = default_of(*required).unwrap();
			assert!(value.is_truthy(), "{} requires {required}", spec.key);
		}
		for (target, expected) in spec.requires_values {
			assert_eq!(default_of(*target), Some(expected.to_value()));
		}
		for conflict in spec.conflicts {
			let value = default_of(*conflict).unwrap();
			assert!(!value.is_truthy(), "{} conflicts with {conflict}", spec.key);
		}
	}
}

#[test]
fn symbols_resolve_to_font_options() {
	let registry = Registry::builtin();
	let font = registry.key_for_symbol("lv_font_montserrat_36").unwrap();
	assert_eq!(font.key, "LV_FONT_MONTSERRAT_36");
	assert_eq!(font.footprint, Some(FontFootprint { size: 36, bpp: 4 }));
	assert!(registry.key_for_symbol("lv_font_comic_sans").is_none());
}

#[test]
fn default_font_points_at_an_enabled_font() {
	let registry = Registry::builtin();
	let default_font = registry.lookup("LV_FONT_DEFAULT").unwrap();
	let Value::Reference(symbol) = default_font.default_value() else {
		panic!("LV_FONT_DEFAULT must default to a reference");
	};
	let font = registry.key_for_symbol(&symbol).unwrap();
	assert!(font.default_value().is_truthy());
}

#[test]
fn group_filter_preserves_declaration_order() {
	let registry = Registry::builtin();
	let colors: Vec<_> = registry.group(OptionGroup::Color).map(|spec| spec.key).collect();
	assert_eq!(colors.first(), Some(&"LV_COLOR_DEPTH"));
	assert!(colors.iter().all(|key| key.starts_with("LV_COLOR")));
}
