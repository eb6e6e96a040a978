//! `notecal cache` commands - inspect and maintain the generated-title cache

use serde_json::json;

use notecal_core::error::Result;
use notecal_core::store::PluginData;

use crate::cli::{Cli, OutputFormat};
use crate::commands::context::VaultContext;
use crate::commands::status;

/// Show cached titles in stored order
pub fn show(cli: &Cli, ctx: &VaultContext) -> Result<()> {
    let cache = &ctx.data.title_cache;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cache.to_value())?);
        }
        OutputFormat::Human => {
            if cache.is_empty() {
                status(cli, "Title cache is empty");
                return Ok(());
            }
            for (path, entry) in cache.iter() {
                println!("{}  {}", path, entry.title);
            }
        }
    }
    Ok(())
}

/// Apply the configured bound and write the result back
pub fn prune(cli: &Cli, ctx: &VaultContext) -> Result<()> {
    let before = ctx.data.title_cache.len();
    let bound = ctx.settings.cache_bound();
    let data = PluginData {
        title_cache: ctx.data.title_cache.prune(bound).into_owned(),
        ..ctx.data.clone()
    };
    ctx.save(&data)?;

    let removed = before - data.title_cache.len();
    report(cli, "pruned", removed, data.title_cache.len())
}

/// Remove every cached title, keeping color tags and custom titles
pub fn clear(cli: &Cli, ctx: &VaultContext) -> Result<()> {
    let removed = ctx.data.title_cache.len();
    ctx.save(&ctx.data.with_cleared_titles())?;
    report(cli, "cleared", removed, 0)
}

fn report(cli: &Cli, action: &str, removed: usize, remaining: usize) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = json!({"action": action, "removed": removed, "remaining": remaining});
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => status(
            cli,
            format!("Title cache {}: {} removed, {} remaining", action, removed, remaining),
        ),
    }
    Ok(())
}
