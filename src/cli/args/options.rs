use clap::ValueEnum;
use lvcfg_core::OptionGroup;

/// Output formats of `lvcfg resolve`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ResolveFormat {
	#[default]
	Header,
	Json,
	Summary,
}

impl ResolveFormat {
	/// Return the string representation used by the settings file.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ResolveFormat::Header => "header",
			ResolveFormat::Json => "json",
			ResolveFormat::Summary => "summary",
		}
	}
}

/// Output formats of `lvcfg options`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ListFormat {
	Plain,
	Json,
}

/// Log verbosity accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevelArg {
	/// Return the string representation used by the settings file.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			LogLevelArg::Off => "off",
			LogLevelArg::Error => "error",
			LogLevelArg::Warn => "warn",
			LogLevelArg::Info => "info",
			LogLevelArg::Debug => "debug",
			LogLevelArg::Trace => "trace",
		}
	}
}

/// Option groups selectable with `--group`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum GroupArg {
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

impl GroupArg {
	pub(crate) fn group(self) -> OptionGroup {
		match self {
			GroupArg::Color => OptionGroup::Color,
			GroupArg::Memory => OptionGroup::Memory,
			GroupArg::Tick => OptionGroup::Tick,
			GroupArg::Display => OptionGroup::Display,
			GroupArg::Logging => OptionGroup::Logging,
			GroupArg::Assert => OptionGroup::Assert,
			GroupArg::Font => OptionGroup::Font,
			GroupArg::Text => OptionGroup::Text,
			GroupArg::Widget => OptionGroup::Widget,
			GroupArg::Theme => OptionGroup::Theme,
		}
	}
}
