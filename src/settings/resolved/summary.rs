use super::ResolvedSettings;

pub(super) fn print_summary(settings: &ResolvedSettings) {
	for line in summary_lines(settings) {
		println!("{line}");
	}
}

fn summary_lines(settings: &ResolvedSettings) -> Vec<String> {
	let mut lines = vec![
		"Effective settings:".to_string(),
		format!("  Strict: {}", bool_to_word(settings.strict)),
		format!("  Format: {}", settings.format.as_str()),
	];
	if settings.base_profiles.is_empty() {
		lines.push("  Base profiles: (none)".to_string());
	} else {
		lines.push("  Base profiles:".to_string());
		for path in &settings.base_profiles {
			lines.push(format!("    {}", path.display()));
		}
	}
	match (&settings.log.level, &settings.log.source) {
		(Some(level), Some(source)) => {
			lines.push(format!("  Log level: {} (from {source})", level.to_string().to_ascii_lowercase()));
		}
		(Some(level), None) => {
			lines.push(format!("  Log level: {}", level.to_string().to_ascii_lowercase()));
		}
		(None, _) => lines.push("  Log level: (LVCFG_LOG or warn)".to_string()),
	}
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use log::LevelFilter;

	use super::super::{LogSettings, SettingSource};
	use super::*;
	use crate::cli::ResolveFormat;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_profiles_and_log_origin() {
		let settings = ResolvedSettings {
			strict: true,
			format: ResolveFormat::Json,
			base_profiles: vec![PathBuf::from("/boards/base.h")],
			log: LogSettings {
				level: Some(LevelFilter::Debug),
				source: Some(SettingSource::CliFlag("--log-level")),
			},
		};

		let lines = summary_lines(&settings);
		assert_eq!(lines[1], "  Strict: yes");
		assert_eq!(lines[2], "  Format: json");
		assert_eq!(lines[4], "    /boards/base.h");
		assert_eq!(lines[5], "  Log level: debug (from command-line flag --log-level)");

		print_summary(&settings);
	}
}
