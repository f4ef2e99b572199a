//! Static table of every option recognised by the resolver.
//!
//! Defaults mirror the toolkit's own template, except that optional hooks
//! with no sensible default (such as the custom tick expression) default to
//! empty so they must be supplied explicitly.

use super::spec::{Literal, OptionGroup, OptionSpec, ValueType};

use OptionGroup::{Assert, Color, Display, Font, Logging, Memory, Text, Theme, Tick, Widget};

macro_rules! montserrat {
	($size:literal, $enabled:literal) => {
		OptionSpec::flag(
			concat!("LV_FONT_MONTSERRAT_", stringify!($size)),
			Font,
			$enabled,
			concat!("Montserrat ", stringify!($size), " px, 4 bpp"),
		)
		.font(concat!("lv_font_montserrat_", stringify!($size)), $size, 4)
	};
}

macro_rules! widget {
	($name:literal, $summary:literal) => {
		OptionSpec::flag(concat!("LV_USE_", $name), Widget, true, $summary)
	};
	($name:literal, $summary:literal, requires = [$($dep:literal),+ $(,)?]) => {
		widget!($name, $summary).requires(&[$(concat!("LV_USE_", $dep)),+])
	};
}

const LOG_LEVELS: &[&str] = &[
	"LV_LOG_LEVEL_TRACE",
	"LV_LOG_LEVEL_INFO",
	"LV_LOG_LEVEL_WARN",
	"LV_LOG_LEVEL_ERROR",
	"LV_LOG_LEVEL_USER",
	"LV_LOG_LEVEL_NONE",
];

const TEXT_ENCODINGS: &[&str] = &["LV_TXT_ENC_UTF8", "LV_TXT_ENC_ASCII"];

const BASE_DIRECTIONS: &[&str] = &["LV_BASE_DIR_LTR", "LV_BASE_DIR_RTL", "LV_BASE_DIR_AUTO"];

const KIB: i64 = 1024;

pub static BUILTIN_OPTIONS: &[OptionSpec] = &[
	// Color
	OptionSpec::new(
		"LV_COLOR_DEPTH",
		Color,
		ValueType::IntChoice(&[1, 8, 16, 32]),
		Literal::Int(16),
		"Color depth in bits per pixel",
	),
	OptionSpec::flag(
		"LV_COLOR_16_SWAP",
		Color,
		false,
		"Swap the bytes of RGB565 colors for 8-bit display interfaces",
	)
	.requires_values(&[("LV_COLOR_DEPTH", Literal::Int(16))]),
	OptionSpec::flag(
		"LV_COLOR_SCREEN_TRANSP",
		Color,
		false,
		"Allow a transparent screen background",
	)
	.requires_values(&[("LV_COLOR_DEPTH", Literal::Int(32))]),
	OptionSpec::new(
		"LV_COLOR_CHROMA_KEY",
		Color,
		ValueType::Expression,
		Literal::Expression("lv_color_hex(0x00ff00)"),
		"Pixels of this color are not drawn for chroma-keyed images",
	),
	// Memory
	OptionSpec::flag(
		"LV_MEM_CUSTOM",
		Memory,
		false,
		"Use a custom allocator instead of the built-in heap",
	)
	.requires(&[
		"LV_MEM_CUSTOM_INCLUDE",
		"LV_MEM_CUSTOM_ALLOC",
		"LV_MEM_CUSTOM_FREE",
		"LV_MEM_CUSTOM_REALLOC",
	]),
	OptionSpec::new(
		"LV_MEM_SIZE",
		Memory,
		ValueType::Bytes {
			min: 2 * KIB,
			max: 16 * KIB * KIB,
		},
		Literal::Int(48 * KIB),
		"Size of the built-in heap in bytes",
	),
	OptionSpec::new(
		"LV_MEM_CUSTOM_INCLUDE",
		Memory,
		ValueType::Text,
		Literal::Text("<stdlib.h>"),
		"Header declaring the custom allocator",
	),
	OptionSpec::new(
		"LV_MEM_CUSTOM_ALLOC",
		Memory,
		ValueType::Expression,
		Literal::Expression("malloc"),
		"Custom allocation function",
	),
	OptionSpec::new(
		"LV_MEM_CUSTOM_FREE",
		Memory,
		ValueType::Expression,
		Literal::Expression("free"),
		"Custom free function",
	),
	OptionSpec::new(
		"LV_MEM_CUSTOM_REALLOC",
		Memory,
		ValueType::Expression,
		Literal::Expression("realloc"),
		"Custom reallocation function",
	),
	OptionSpec::new(
		"LV_MEM_BUF_MAX_NUM",
		Memory,
		ValueType::Int { min: 1, max: 64 },
		Literal::Int(16),
		"Number of intermediate memory buffers used during rendering",
	),
	OptionSpec::flag(
		"LV_MEMCPY_MEMSET_STD",
		Memory,
		false,
		"Use the C library memcpy and memset",
	),
	// Tick
	OptionSpec::flag(
		"LV_TICK_CUSTOM",
		Tick,
		false,
		"Read the system time from a custom expression instead of lv_tick_inc",
	)
	.requires(&["LV_TICK_CUSTOM_INCLUDE", "LV_TICK_CUSTOM_SYS_TIME_EXPR"]),
	OptionSpec::new(
		"LV_TICK_CUSTOM_INCLUDE",
		Tick,
		ValueType::Text,
		Literal::Text("Arduino.h"),
		"Header declaring the system time function",
	),
	OptionSpec::new(
		"LV_TICK_CUSTOM_SYS_TIME_EXPR",
		Tick,
		ValueType::Expression,
		Literal::Expression(""),
		"Expression evaluating to the current system time in ms",
	),
	// Display and input
	OptionSpec::new(
		"LV_DISP_DEF_REFR_PERIOD",
		Display,
		ValueType::Int { min: 1, max: 1000 },
		Literal::Int(30),
		"Default display refresh period in ms",
	),
	OptionSpec::new(
		"LV_INDEV_DEF_READ_PERIOD",
		Display,
		ValueType::Int { min: 1, max: 1000 },
		Literal::Int(30),
		"Input device read period in ms",
	),
	OptionSpec::new(
		"LV_DPI_DEF",
		Display,
		ValueType::Int { min: 1, max: 1000 },
		Literal::Int(130),
		"Default dots per inch",
	),
	// Logging
	OptionSpec::flag("LV_USE_LOG", Logging, false, "Enable the log module"),
	OptionSpec::new(
		"LV_LOG_LEVEL",
		Logging,
		ValueType::Choice(LOG_LEVELS),
		Literal::Symbol("LV_LOG_LEVEL_WARN"),
		"Minimum level of logged messages",
	),
	OptionSpec::flag(
		"LV_LOG_PRINTF",
		Logging,
		false,
		"Print log messages with printf",
	)
	.requires(&["LV_USE_LOG"]),
	// Asserts
	OptionSpec::flag(
		"LV_USE_ASSERT_NULL",
		Assert,
		true,
		"Check whether parameters are NULL",
	),
	OptionSpec::flag(
		"LV_USE_ASSERT_MALLOC",
		Assert,
		true,
		"Check whether memory allocation succeeded",
	),
	OptionSpec::flag(
		"LV_USE_ASSERT_STYLE",
		Assert,
		false,
		"Check whether styles are properly initialised",
	),
	OptionSpec::flag(
		"LV_USE_ASSERT_MEM_INTEGRITY",
		Assert,
		false,
		"Check heap integrity after critical operations",
	),
	OptionSpec::flag(
		"LV_USE_ASSERT_OBJ",
		Assert,
		false,
		"Check object type and existence",
	),
	OptionSpec::new(
		"LV_ASSERT_HANDLER_INCLUDE",
		Assert,
		ValueType::Text,
		Literal::Text("<stdint.h>"),
		"Header declaring the assert handler",
	),
	OptionSpec::new(
		"LV_ASSERT_HANDLER",
		Assert,
		ValueType::Expression,
		Literal::Expression("while(1);"),
		"Statement executed when an assertion fails",
	),
	// Fonts
	montserrat!(8, false),
	montserrat!(10, false),
	montserrat!(12, false),
	montserrat!(14, true),
	montserrat!(16, false),
	montserrat!(18, false),
	montserrat!(20, false),
	montserrat!(22, false),
	montserrat!(24, false),
	montserrat!(26, false),
	montserrat!(28, false),
	montserrat!(30, false),
	montserrat!(32, false),
	montserrat!(34, false),
	montserrat!(36, false),
	montserrat!(38, false),
	montserrat!(40, false),
	montserrat!(42, false),
	montserrat!(44, false),
	montserrat!(46, false),
	montserrat!(48, false),
	OptionSpec::flag(
		"LV_FONT_UNSCII_8",
		Font,
		false,
		"UNSCII 8 px pixel-perfect monospace font",
	)
	.font("lv_font_unscii_8", 8, 1),
	OptionSpec::flag(
		"LV_FONT_UNSCII_16",
		Font,
		false,
		"UNSCII 16 px pixel-perfect monospace font",
	)
	.font("lv_font_unscii_16", 16, 1),
	OptionSpec::new(
		"LV_FONT_DEFAULT",
		Font,
		ValueType::FontRef,
		Literal::Reference("lv_font_montserrat_14"),
		"Font used when a style does not set one",
	),
	OptionSpec::flag(
		"LV_FONT_FMT_TXT_LARGE",
		Font,
		false,
		"Support fonts with many characters or large glyphs",
	),
	OptionSpec::flag(
		"LV_USE_FONT_COMPRESSED",
		Font,
		false,
		"Support compressed fonts",
	),
	// Text
	OptionSpec::new(
		"LV_TXT_ENC",
		Text,
		ValueType::Choice(TEXT_ENCODINGS),
		Literal::Symbol("LV_TXT_ENC_UTF8"),
		"Character encoding of strings",
	),
	OptionSpec::new(
		"LV_TXT_BREAK_CHARS",
		Text,
		ValueType::Text,
		Literal::Text(" ,.;:-_"),
		"Characters texts may be broken on",
	),
	OptionSpec::flag(
		"LV_USE_BIDI",
		Text,
		false,
		"Support bidirectional texts",
	)
	.requires_values(&[("LV_TXT_ENC", Literal::Symbol("LV_TXT_ENC_UTF8"))]),
	OptionSpec::new(
		"LV_BIDI_BASE_DIR_DEF",
		Text,
		ValueType::Choice(BASE_DIRECTIONS),
		Literal::Symbol("LV_BASE_DIR_AUTO"),
		"Default base direction of bidirectional texts",
	),
	OptionSpec::flag(
		"LV_USE_ARABIC_PERSIAN_CHARS",
		Text,
		false,
		"Support Arabic and Persian glyph shaping",
	)
	.requires(&["LV_USE_BIDI"]),
	// Widgets
	widget!("ARC", "Arc widget"),
	widget!("BAR", "Bar widget"),
	widget!("BTN", "Button widget"),
	widget!("BTNMATRIX", "Button matrix widget"),
	widget!("CANVAS", "Canvas widget", requires = ["IMG"]),
	widget!("CHECKBOX", "Checkbox widget"),
	widget!("DROPDOWN", "Dropdown widget", requires = ["LABEL"]),
	widget!("IMG", "Image widget", requires = ["LABEL"]),
	widget!("LABEL", "Label widget"),
	OptionSpec::flag(
		"LV_LABEL_TEXT_SELECTION",
		Widget,
		true,
		"Enable selecting text of labels",
	)
	.requires(&["LV_USE_LABEL"]),
	OptionSpec::flag(
		"LV_LABEL_LONG_TXT_HINT",
		Widget,
		true,
		"Store extra drawing info to speed up very long labels",
	)
	.requires(&["LV_USE_LABEL"]),
	widget!("LINE", "Line widget"),
	widget!("ROLLER", "Roller widget", requires = ["LABEL"]),
	widget!("SLIDER", "Slider widget", requires = ["BAR"]),
	widget!("SWITCH", "Switch widget"),
	widget!("TEXTAREA", "Text area widget", requires = ["LABEL"]),
	OptionSpec::new(
		"LV_TEXTAREA_DEF_PWD_SHOW_TIME",
		Widget,
		ValueType::Int { min: 0, max: 10_000 },
		Literal::Int(1500),
		"How long the last password character stays visible, in ms",
	),
	widget!("TABLE", "Table widget"),
	widget!("CALENDAR", "Calendar widget", requires = ["BTNMATRIX"]),
	widget!("CHART", "Chart widget"),
	widget!("COLORWHEEL", "Color wheel widget"),
	widget!("IMGBTN", "Image button widget"),
	widget!(
		"KEYBOARD",
		"On-screen keyboard widget",
		requires = ["BTNMATRIX", "TEXTAREA"]
	),
	widget!("LED", "LED widget"),
	widget!("LIST", "List widget", requires = ["BTN", "LABEL"]),
	widget!("MENU", "Menu widget"),
	widget!("METER", "Meter widget"),
	widget!(
		"MSGBOX",
		"Message box widget",
		requires = ["BTNMATRIX", "LABEL"]
	),
	widget!("SPAN", "Span widget"),
	widget!("SPINBOX", "Spinbox widget", requires = ["TEXTAREA"]),
	widget!("SPINNER", "Spinner widget", requires = ["ARC"]),
	widget!("TABVIEW", "Tab view widget", requires = ["BTNMATRIX"]),
	widget!("TILEVIEW", "Tile view widget"),
	widget!("WIN", "Window widget", requires = ["BTN", "LABEL"]),
	// Themes
	OptionSpec::flag(
		"LV_USE_THEME_DEFAULT",
		Theme,
		true,
		"Simple, impressive and very complete theme",
	)
	.conflicts(&["LV_USE_THEME_BASIC", "LV_USE_THEME_MONO"]),
	OptionSpec::flag(
		"LV_THEME_DEFAULT_DARK",
		Theme,
		false,
		"Use the dark palette of the default theme",
	)
	.requires(&["LV_USE_THEME_DEFAULT"]),
	OptionSpec::flag(
		"LV_THEME_DEFAULT_GROW",
		Theme,
		true,
		"Enable grow-on-press in the default theme",
	),
	OptionSpec::new(
		"LV_THEME_DEFAULT_TRANSITION_TIME",
		Theme,
		ValueType::Int { min: 0, max: 10_000 },
		Literal::Int(80),
		"Default transition time in ms",
	),
	OptionSpec::flag(
		"LV_USE_THEME_BASIC",
		Theme,
		false,
		"Very simple theme that is a good starting point for a custom one",
	)
	.conflicts(&["LV_USE_THEME_DEFAULT", "LV_USE_THEME_MONO"]),
	OptionSpec::flag(
		"LV_USE_THEME_MONO",
		Theme,
		false,
		"Theme designed for monochrome displays",
	)
	.conflicts(&["LV_USE_THEME_DEFAULT", "LV_USE_THEME_BASIC"]),
];
