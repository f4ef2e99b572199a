use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};

use super::options::{GroupArg, ListFormat, LogLevelArg, ResolveFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `lvcfg` binary.
#[derive(Parser, Debug)]
#[command(
	name = "lvcfg",
	version,
	long_version = long_version(),
	about = "Resolve layered lv_conf.h profiles into one validated configuration",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LVCFG_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional settings file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default settings files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "log-level",
		value_enum,
		global = true,
		help = "Set the log verbosity on stderr (default: warn)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		short = 'p',
		long = "print-settings",
		global = true,
		help = "Print the effective tool settings before running (default: disabled)"
	)]
	pub(crate) print_settings: bool,
	#[command(subcommand)]
	pub(crate) command: Command,
}

impl CliArgs {
	/// `--strict` as given to `resolve` or `check`.
	pub(crate) fn strict_flag(&self) -> bool {
		match &self.command {
			Command::Resolve(args) => args.strict,
			Command::Check(args) => args.strict,
			Command::Options(_) => false,
		}
	}

	/// `--format` as given to `resolve`.
	pub(crate) fn resolve_format(&self) -> Option<ResolveFormat> {
		match &self.command {
			Command::Resolve(args) => args.format,
			_ => None,
		}
	}
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
	/// Resolve profiles and emit the canonical configuration.
	Resolve(ResolveArgs),
	/// Validate profiles without emitting anything.
	Check(CheckArgs),
	/// List the recognised options.
	Options(OptionsArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
	#[arg(
		value_name = "SOURCE",
		required = true,
		help = "Profiles to merge in order; later ones win. Use - for stdin"
	)]
	pub(crate) sources: Vec<PathBuf>,
	#[arg(
		short = 's',
		long,
		help = "Treat unknown options as violations (default: disabled)"
	)]
	pub(crate) strict: bool,
	#[arg(
		short = 'f',
		long,
		value_enum,
		help = "Choose how to print the configuration (default: header)"
	)]
	pub(crate) format: Option<ResolveFormat>,
	#[arg(
		short = 'o',
		long,
		value_name = "FILE",
		help = "Write the result to a file instead of stdout"
	)]
	pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
	#[arg(
		value_name = "SOURCE",
		required = true,
		help = "Profiles to merge in order; later ones win. Use - for stdin"
	)]
	pub(crate) sources: Vec<PathBuf>,
	#[arg(
		short = 's',
		long,
		help = "Treat unknown options as violations (default: disabled)"
	)]
	pub(crate) strict: bool,
}

#[derive(Args, Debug)]
pub(crate) struct OptionsArgs {
	#[arg(
		short = 'f',
		long,
		value_enum,
		default_value_t = ListFormat::Plain,
		help = "Choose how to print the option table"
	)]
	pub(crate) format: ListFormat,
	#[arg(
		short = 'g',
		long,
		value_enum,
		help = "Only list options of one group (default: all)"
	)]
	pub(crate) group: Option<GroupArg>,
}
