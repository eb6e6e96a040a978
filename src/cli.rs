//! CLI argument parsing for notecal
//!
//! Global flags: --vault, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use notecal_core::format::OutputFormat;

/// Notecal - daily-note calendar list with locally generated titles
#[derive(Parser, Debug)]
#[command(name = "notecal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault root directory (defaults to the current directory)
    #[arg(long, global = true, env = "NOTECAL_VAULT")]
    pub vault: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "notecal_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List daily notes with their labels
    List {
        /// Show at most this many notes
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Generate a title for a daily note with the local model
    Title {
        /// Date of the daily note (YYYY-MM-DD)
        date: String,

        /// Regenerate even when a fresh cached title exists
        #[arg(long, short)]
        force: bool,
    },

    /// Turn a raw model response read from stdin into a label
    Parse {
        /// Date the label is for (YYYY-MM-DD)
        date: String,
    },

    /// Set or clear the custom title of a day
    Rename {
        /// Date of the daily note (YYYY-MM-DD)
        date: String,

        /// New title; omit to clear
        text: Vec<String>,
    },

    /// List, show, set or clear color tags
    Color {
        /// Tag key: a date, day:YYYY-MM-DD or file:<path>; omit to list all tags
        key: Option<String>,

        /// Color as #rgb or #rrggbb
        color: Option<String>,

        /// Remove the tag
        #[arg(long, conflicts_with = "color", requires = "key")]
        clear: bool,
    },

    /// Inspect or maintain the generated-title cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// List models available on the inference server
    Models,
}

#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cached titles
    Show,

    /// Apply the configured size bound now
    Prune,

    /// Remove every cached title
    Clear,
}
