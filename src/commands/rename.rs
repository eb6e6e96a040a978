//! `notecal rename` command - set or clear a day's custom title

use serde_json::json;

use notecal_core::daily::DATE_KEY_FORMAT;
use notecal_core::error::Result;
use notecal_core::store::PluginData;
use notecal_core::title::format_custom_list_title;

use crate::cli::{Cli, OutputFormat};
use crate::commands::context::VaultContext;
use crate::commands::{parse_date_arg, status};

/// Execute the rename command
///
/// Text that normalizes to nothing (including a repeated date prefix alone)
/// removes the custom title.
pub fn execute(cli: &Cli, ctx: &VaultContext, date: &str, text: &[String]) -> Result<()> {
    let date_str = parse_date_arg(date)?.format(DATE_KEY_FORMAT).to_string();
    let input = text.join(" ");

    let custom_titles = ctx.data.custom_titles.with_title(
        &date_str,
        &input,
        ctx.settings.custom_title_max_length,
    )?;
    let data = PluginData {
        custom_titles,
        ..ctx.data.clone()
    };
    ctx.save(&data)?;

    let suffix = data.custom_titles.title_for(&date_str);
    let label = match suffix {
        Some(suffix) => format_custom_list_title(&date_str, suffix),
        None => date_str.clone(),
    };

    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "date": date_str,
                "title": suffix,
                "label": label,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if suffix.is_none() {
                status(cli, format!("Cleared custom title for {}", date_str));
            }
            println!("{}", label);
        }
    }
    Ok(())
}
