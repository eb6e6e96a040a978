//! `notecal list` command - daily notes with their labels
//!
//! Label precedence: custom title, then a fresh generated title, then the
//! plain date. Stale generated titles are never shown.

use notecal_core::daily::{build_list, scan_daily_notes, ListItem};
use notecal_core::bail_usage;
use notecal_core::error::Result;

use crate::cli::{Cli, OutputFormat};
use crate::commands::context::VaultContext;

/// Execute the list command
pub fn execute(cli: &Cli, ctx: &VaultContext, limit: Option<usize>) -> Result<()> {
    if limit == Some(0) {
        bail_usage!("--limit must be at least 1");
    }

    let notes = scan_daily_notes(&ctx.root, &ctx.settings)?;
    let mut items = build_list(&notes, &ctx.data, &ctx.settings);
    if let Some(limit) = limit {
        items.truncate(limit);
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Human => output_human(cli, &items),
    }
    Ok(())
}

fn output_human(cli: &Cli, items: &[ListItem]) {
    if items.is_empty() {
        if !cli.quiet {
            println!("No daily notes found");
        }
        return;
    }

    for item in items {
        match &item.color {
            Some(color) => println!("{}  [{}]", item.label, color),
            None => println!("{}", item.label),
        }
    }
}
