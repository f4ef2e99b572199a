mod args;
mod output;

pub(crate) use args::{CliArgs, Command, ResolveFormat, parse_cli};
pub(crate) use output::{format_options, print_failure, print_warnings, render_resolution};
