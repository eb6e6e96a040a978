//! CLI commands for notecal

pub mod cache;
pub mod color;
pub mod context;
pub mod dispatch;
pub mod list;
pub mod models;
pub mod parse;
pub mod rename;
pub mod title;

use chrono::NaiveDate;
use notecal_core::daily::DATE_KEY_FORMAT;
use notecal_core::error::{NotecalError, Result};

/// Parse a `YYYY-MM-DD` command argument
pub fn parse_date_arg(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT)
        .map_err(|_| NotecalError::invalid_value("date (expected YYYY-MM-DD)", value))
}

/// Print a status line to stderr unless `--quiet`
pub fn status(cli: &crate::cli::Cli, message: impl std::fmt::Display) {
    if !cli.quiet {
        eprintln!("{}", message);
    }
}
