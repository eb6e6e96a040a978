//! Notecal - daily-note calendar list with locally generated titles
//!
//! Scans a vault for daily notes, shows them as a list labelled with custom
//! titles or model-generated titles, and manages the title cache, color tags
//! and custom titles that persist alongside the vault.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, OutputFormat};
use notecal_core::error::NotecalError;
use notecal_core::logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout; everything else is a usage error
        Err(err) if err.use_stderr() && argv_requests_json() => {
            return report(&NotecalError::UsageError(err.to_string()), true, false);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::dispatch::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format == OutputFormat::Json, cli.quiet),
    }
}

fn report(error: &NotecalError, json: bool, quiet: bool) -> ExitCode {
    if json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

/// `--format json` / `--format=json` in argv, for errors raised before
/// `Cli.format` exists
fn argv_requests_json() -> bool {
    let args: Vec<String> = std::env::args().skip(1).collect();
    args.iter().enumerate().any(|(i, arg)| {
        let value = match arg.strip_prefix("--format=") {
            Some(value) => Some(value),
            None if arg == "--format" => args.get(i + 1).map(String::as_str),
            None => None,
        };
        value.is_some_and(|value| value.eq_ignore_ascii_case("json"))
    })
}
