//! `notecal parse` command - turn a raw model response into a label
//!
//! Reads the response text from stdin, so labels can be checked without an
//! inference server.

use std::io::{self, Read};

use serde_json::json;

use notecal_core::daily::DATE_KEY_FORMAT;
use notecal_core::error::{NotecalError, Result};
use notecal_core::generate::label_from_response;

use crate::cli::{Cli, OutputFormat};
use crate::commands::parse_date_arg;

/// Execute the parse command
pub fn execute(cli: &Cli, date: &str) -> Result<()> {
    let date_str = parse_date_arg(date)?.format(DATE_KEY_FORMAT).to_string();

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;

    let label = label_from_response(&date_str, &raw).ok_or_else(|| {
        NotecalError::InvalidResponse(format!("no usable title parts for {date_str}"))
    })?;

    match cli.format {
        OutputFormat::Json => {
            let output = json!({"date": date_str, "label": label});
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", label),
    }
    Ok(())
}
