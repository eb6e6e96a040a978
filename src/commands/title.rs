//! `notecal title` command - generate a label for one daily note

use std::fs;

use serde_json::json;

use notecal_core::daily::{find_by_date, scan_daily_notes, DATE_KEY_FORMAT};
use notecal_core::error::{NotecalError, Result};
use notecal_core::generate::{generate_daily_title, OllamaClient, OllamaConfig};
use notecal_core::store::PluginData;

use crate::cli::{Cli, OutputFormat};
use crate::commands::context::VaultContext;
use crate::commands::parse_date_arg;

/// Execute the title command
///
/// A fresh cached title is reused unless `force`; on any generation failure
/// the cache is left as it was.
pub fn execute(cli: &Cli, ctx: &VaultContext, date: &str, force: bool) -> Result<()> {
    let date = parse_date_arg(date)?;
    let date_str = date.format(DATE_KEY_FORMAT).to_string();

    let notes = scan_daily_notes(&ctx.root, &ctx.settings)?;
    let note = find_by_date(&notes, date)
        .ok_or_else(|| NotecalError::not_found("daily note", &date_str))?;

    if !force {
        if let Some(title) = ctx.data.title_cache.fresh_title(&note.path, note.mtime) {
            tracing::debug!(path = %note.path, "reusing fresh cached title");
            return output(cli, &date_str, &note.path, title, true);
        }
    }

    let note_path = ctx.root.join(&note.path);
    let text = fs::read_to_string(&note_path)
        .map_err(|e| NotecalError::io_operation("read", note_path.display(), e))?;

    let client = OllamaClient::new(OllamaConfig::from(&ctx.settings));
    let label = generate_daily_title(&client, &date_str, &text, ctx.settings.note_char_budget())?;

    let data = PluginData {
        title_cache: ctx.data.title_cache.upsert(
            &note.path,
            note.mtime,
            &label,
            ctx.settings.cache_bound(),
            None,
        ),
        ..ctx.data.clone()
    };
    ctx.save(&data)?;

    output(cli, &date_str, &note.path, &label, false)
}

fn output(cli: &Cli, date: &str, path: &str, label: &str, cached: bool) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "date": date,
                "path": path,
                "label": label,
                "cached": cached,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", label),
    }
    Ok(())
}
