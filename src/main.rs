mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cli::{
	CliArgs, Command, format_options, parse_cli, print_failure, print_warnings, render_resolution,
};
use log::info;
use lvcfg_core::Registry;
use settings::ResolvedSettings;
use workflow::{Outcome, ResolveWorkflow};

fn main() -> ExitCode {
	let cli = parse_cli();

	match run(&cli) {
		Ok(code) => code,
		Err(err) => {
			eprintln!("error: {err:#}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &CliArgs) -> Result<ExitCode> {
	let settings = settings::load(cli)?;
	logging::initialize(&settings.log);

	if cli.print_settings {
		settings.print_summary();
	}

	let registry = Registry::builtin();
	match &cli.command {
		Command::Resolve(args) => {
			run_resolve(registry, &settings, &args.sources, args.output.as_ref())
		}
		Command::Check(args) => run_check(registry, &settings, &args.sources),
		Command::Options(args) => {
			let listing = format_options(registry, args.group.map(|group| group.group()), args.format)?;
			print!("{listing}");
			Ok(ExitCode::SUCCESS)
		}
	}
}

/// Resolve the profiles and print or write the configuration.
fn run_resolve(
	registry: &Registry,
	settings: &ResolvedSettings,
	sources: &[PathBuf],
	output: Option<&PathBuf>,
) -> Result<ExitCode> {
	let workflow = ResolveWorkflow::from_settings(settings, sources);
	let resolution = match workflow.run(registry)? {
		Outcome::Resolved(resolution) => resolution,
		Outcome::Rejected(error) => {
			print_failure(&error);
			return Ok(ExitCode::FAILURE);
		}
	};
	print_warnings(&resolution.warnings);

	let rendered = render_resolution(settings.format, registry, &resolution)?;
	match output {
		Some(path) => {
			fs::write(path, rendered)
				.with_context(|| format!("failed to write {}", path.display()))?;
			info!("wrote {}", path.display());
		}
		None => print!("{rendered}"),
	}

	Ok(ExitCode::SUCCESS)
}

/// Validate the profiles and report the result without emitting anything.
fn run_check(
	registry: &Registry,
	settings: &ResolvedSettings,
	sources: &[PathBuf],
) -> Result<ExitCode> {
	let workflow = ResolveWorkflow::from_settings(settings, sources);
	match workflow.run(registry)? {
		Outcome::Resolved(resolution) => {
			print_warnings(&resolution.warnings);
			println!(
				"ok: {} profile(s), {} options resolved ({} explicit)",
				workflow.sources().len(),
				resolution.configuration.len(),
				resolution.configuration.explicit_count()
			);
			Ok(ExitCode::SUCCESS)
		}
		Outcome::Rejected(error) => {
			print_failure(&error);
			Ok(ExitCode::FAILURE)
		}
	}
}
