//! `notecal color` command - list, show, set or clear color tags
//!
//! A bare `YYYY-MM-DD` key is shorthand for `day:YYYY-MM-DD`.

use serde_json::json;

use notecal_core::error::Result;
use notecal_core::store::PluginData;
use notecal_core::tags::{day_key, is_date_key};

use crate::cli::{Cli, OutputFormat};
use crate::commands::context::VaultContext;
use crate::commands::status;

/// Expand the date shorthand into a `day:` key
pub fn resolve_key(key: &str) -> String {
    let key = key.trim();
    if is_date_key(key) {
        day_key(key)
    } else {
        key.to_string()
    }
}

/// List every color tag in stored order
pub fn list(cli: &Cli, ctx: &VaultContext) -> Result<()> {
    let tags = &ctx.data.color_tags;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(tags)?);
        }
        OutputFormat::Human => {
            if tags.is_empty() {
                status(cli, "No color tags");
                return Ok(());
            }
            for (key, color) in tags.iter() {
                println!("{}  {}", key, color);
            }
        }
    }
    Ok(())
}

/// Execute the color command
pub fn execute(
    cli: &Cli,
    ctx: &VaultContext,
    key: &str,
    color: Option<&str>,
    clear: bool,
) -> Result<()> {
    let key = resolve_key(key);

    let next = if clear {
        Some(ctx.data.color_tags.without(&key))
    } else if let Some(color) = color {
        Some(ctx.data.color_tags.with_color(&key, color)?)
    } else {
        None
    };

    let data = match next {
        Some(color_tags) => {
            let data = PluginData {
                color_tags,
                ..ctx.data.clone()
            };
            ctx.save(&data)?;
            data
        }
        None => ctx.data.clone(),
    };

    let current = data.color_tags.get(&key);
    match cli.format {
        OutputFormat::Json => {
            let output = json!({"key": key, "color": current});
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match current {
            Some(color) => println!("{}  {}", key, color),
            None => status(cli, format!("No color tag for {}", key)),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_key() {
        assert_eq!(resolve_key("2025-12-15"), "day:2025-12-15");
        assert_eq!(resolve_key(" day:2025-12-15 "), "day:2025-12-15");
        assert_eq!(resolve_key("file:daily/a.md"), "file:daily/a.md");
    }
}
