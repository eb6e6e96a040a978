//! Command dispatch logic for notecal

use crate::cli::{CacheCommands, Cli, Commands};
use crate::commands;
use crate::commands::context::VaultContext;
use notecal_core::error::Result;

pub fn run(cli: &Cli) -> Result<()> {
    // `parse` reads stdin only; every other command needs the vault
    let open = || VaultContext::open(cli);

    match &cli.command {
        Commands::Parse { date } => commands::parse::execute(cli, date),
        Commands::List { limit } => commands::list::execute(cli, &open()?, *limit),
        Commands::Title { date, force } => commands::title::execute(cli, &open()?, date, *force),
        Commands::Rename { date, text } => commands::rename::execute(cli, &open()?, date, text),
        Commands::Color { key, color, clear } => {
            let ctx = open()?;
            match key {
                Some(key) => commands::color::execute(cli, &ctx, key, color.as_deref(), *clear),
                None => commands::color::list(cli, &ctx),
            }
        }
        Commands::Cache(CacheCommands::Show) => commands::cache::show(cli, &open()?),
        Commands::Cache(CacheCommands::Prune) => commands::cache::prune(cli, &open()?),
        Commands::Cache(CacheCommands::Clear) => commands::cache::clear(cli, &open()?),
        Commands::Models => commands::models::execute(cli, &open()?),
    }
}
