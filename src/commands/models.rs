//! `notecal models` command - list models on the inference server

use notecal_core::error::Result;
use notecal_core::generate::{OllamaClient, OllamaConfig};

use crate::cli::{Cli, OutputFormat};
use crate::commands::context::VaultContext;

/// Execute the models command
pub fn execute(cli: &Cli, ctx: &VaultContext) -> Result<()> {
    let client = OllamaClient::new(OllamaConfig::from(&ctx.settings));
    let models = client.list_models()?;
    let configured: &str = &client.config().model;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({"configured": configured, "models": models});
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for model in &models {
                let marker = if model == configured || model.split(':').next() == Some(configured)
                {
                    "*"
                } else {
                    " "
                };
                println!("{} {}", marker, model);
            }
        }
    }
    Ok(())
}
