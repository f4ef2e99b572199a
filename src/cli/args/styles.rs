use std::fmt::Write;
use std::sync::OnceLock;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use lvcfg_core::{OptionGroup, Registry};

use crate::app_dirs;

/// Version banner listing the settings file and the size of the option table.
pub(super) fn long_version() -> &'static str {
	static BANNER: OnceLock<String> = OnceLock::new();
	BANNER.get_or_init(|| {
		let settings = app_dirs::user_settings_file()
			.map(|path| path.display().to_string())
			.unwrap_or_else(|err| format!("unavailable ({err})"));
		let registry = Registry::builtin();

		let mut banner = format!("lvcfg {}\n", env!("CARGO_PKG_VERSION"));
		let _ = writeln!(banner, "settings file: {settings}");
		let _ = writeln!(
			banner,
			"options: {} in {} groups",
			registry.len(),
			OptionGroup::ALL.len()
		);
		banner
	})
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Cyan.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
