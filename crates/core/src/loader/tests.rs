use super::*;

fn defines(source: &LoadedSource) -> Vec<(&str, &Action)> {
	source
		.assignments()
		.iter()
		.map(|assignment| (assignment.key.as_str(), &assignment.action))
		.collect()
}

#[test]
fn commentary_in_any_language_is_ignored() {
	let text = "\
配置文件 for the demo board
/* 颜色深度 */
#define LV_COLOR_DEPTH 16 // 十六位
Настройки памяти
#define LV_MEM_SIZE (64U * 1024U)
";
	let loaded = load("board.h", text).unwrap();
	assert_eq!(
		defines(&loaded),
		vec![
			("LV_COLOR_DEPTH", &Action::Define(RawValue::Int(16))),
			("LV_MEM_SIZE", &Action::Define(RawValue::Int(65_536))),
		]
	);
	assert_eq!(loaded.assignments()[1].origin.line(), 5);
	assert_eq!(loaded.name(), "board.h");
}

#[test]
fn commentary_ending_in_a_backslash_keeps_the_next_define() {
	let text = "备注：路径 C:\\\n#define LV_MEM_SIZE (64U * 1024U)\n";
	let loaded = load("board.h", text).unwrap();
	assert_eq!(
		defines(&loaded),
		vec![("LV_MEM_SIZE", &Action::Define(RawValue::Int(65_536)))]
	);
	assert_eq!(loaded.assignments()[0].origin.line(), 2);
}

#[test]
fn include_guard_and_disabled_blocks_are_dropped() {
	let text = "\
#ifndef LV_CONF_H
#define LV_CONF_H
#if 0
#define LV_USE_LOG 1
#endif
#if 1 /*Set it to \"1\" to enable content*/
#define LV_USE_LOG 0
#endif
#endif /*LV_CONF_H*/
";
	let loaded = load("lv_conf.h", text).unwrap();
	assert_eq!(
		defines(&loaded),
		vec![("LV_USE_LOG", &Action::Define(RawValue::Int(0)))]
	);
}

#[test]
fn opaque_conditions_keep_only_the_first_branch() {
	let text = "\
#define LV_MEM_CUSTOM 0
#if LV_MEM_CUSTOM == 0
    #define LV_MEM_SIZE (48U * 1024U)
#else
    #define LV_MEM_CUSTOM_INCLUDE <stdlib.h>
#endif
";
	let loaded = load("lv_conf.h", text).unwrap();
	let keys: Vec<_> = defines(&loaded).into_iter().map(|(key, _)| key).collect();
	assert_eq!(keys, vec!["LV_MEM_CUSTOM", "LV_MEM_SIZE"]);
}

#[test]
fn values_are_classified_by_shape() {
	assert_eq!(classify(""), RawValue::Empty);
	assert_eq!(classify("1"), RawValue::Int(1));
	assert_eq!(classify("(128U * 1024U)"), RawValue::Int(131_072));
	assert_eq!(classify("\"Arduino.h\""), RawValue::Text("Arduino.h".into()));
	assert_eq!(classify("<stdlib.h>"), RawValue::Text("<stdlib.h>".into()));
	assert_eq!(
		classify("&lv_font_montserrat_14"),
		RawValue::Reference("lv_font_montserrat_14".into())
	);
	assert_eq!(
		classify("LV_LOG_LEVEL_WARN"),
		RawValue::Symbol("LV_LOG_LEVEL_WARN".into())
	);
	assert_eq!(
		classify("(millis())"),
		RawValue::Expression("(millis())".into())
	);
	assert_eq!(
		classify("lv_color_hex(0x00ff00)"),
		RawValue::Expression("lv_color_hex(0x00ff00)".into())
	);
	assert_eq!(
		classify("\" ,.;:-_\""),
		RawValue::Text(" ,.;:-_".into())
	);
}

#[test]
fn deeply_nested_values_stay_verbatim() {
	let depth = 200_000;
	let nested = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
	let text = format!("#define LV_MEM_SIZE {nested}\n#if {nested}\n#define LV_USE_LOG 1\n#endif\n");
	let loaded = load("deep.h", &text).unwrap();
	assert_eq!(
		defines(&loaded),
		vec![
			("LV_MEM_SIZE", &Action::Define(RawValue::Expression(nested.clone()))),
			("LV_USE_LOG", &Action::Define(RawValue::Int(1))),
		]
	);
}

#[test]
fn literals_inside_expressions_keep_their_spacing() {
	let loaded = load(
		"a.h",
		"#define LV_ASSERT_HANDLER   printf(\"fail:   x\",  'a  ');\n",
	)
	.unwrap();
	assert_eq!(
		defines(&loaded),
		vec![(
			"LV_ASSERT_HANDLER",
			&Action::Define(RawValue::Expression(
				"printf(\"fail:   x\", 'a  ');".into()
			))
		)]
	);
	assert_eq!(
		classify("lv_log( \"a \\\"  b\"   )"),
		RawValue::Expression("lv_log( \"a \\\"  b\" )".into())
	);
}

#[test]
fn undef_produces_an_undefine_action() {
	let loaded = load("a.h", "#define LV_USE_LOG 1\n#undef LV_USE_LOG\n").unwrap();
	assert_eq!(
		defines(&loaded),
		vec![
			("LV_USE_LOG", &Action::Define(RawValue::Int(1))),
			("LV_USE_LOG", &Action::Undefine),
		]
	);
}

#[test]
fn function_like_macros_keep_their_body() {
	let loaded = load("a.h", "#define LV_ASSERT_HANDLER while(1);\n").unwrap();
	assert_eq!(
		defines(&loaded),
		vec![(
			"LV_ASSERT_HANDLER",
			&Action::Define(RawValue::Expression("while(1);".into()))
		)]
	);
}

#[test]
fn unrelated_directives_are_ignored() {
	let text = "#include <stdint.h>\n#pragma once\n#define LV_DPI_DEF 130\n";
	let loaded = load("a.h", text).unwrap();
	assert_eq!(loaded.len(), 1);
}

#[test]
fn errors_are_collected_across_the_whole_source() {
	let text = "\
#define 1BAD 2
#endif
#undef
#if 1
/* dangling
";
	let errors = load("broken.h", text).unwrap_err();
	let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
	assert_eq!(
		messages,
		vec![
			"broken.h:1: #define is missing a valid option name",
			"broken.h:2: #endif without a matching #if",
			"broken.h:3: #undef is missing a valid option name",
			"broken.h:5: block comment is never closed",
			"broken.h:4: conditional block is never closed with #endif",
		]
	);
}

#[test]
fn load_source_uses_the_source_name() {
	let source = Source::new("<stdin>", "#define LV_USE_LOG 1\n");
	let loaded = load_source(&source).unwrap();
	assert_eq!(loaded.assignments()[0].origin.to_string(), "<stdin>:1");
}
