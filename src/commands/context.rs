//! Vault context shared by the commands

use std::env;
use std::path::PathBuf;

use notecal_core::config::Settings;
use notecal_core::error::Result;
use notecal_core::store::{paths, PluginData};

use crate::cli::Cli;

/// Resolved vault root with its settings and sanitized data
pub struct VaultContext {
    pub root: PathBuf,
    pub settings: Settings,
    pub data: PluginData,
}

impl VaultContext {
    /// Resolve the vault root and load settings and persisted data
    pub fn open(cli: &Cli) -> Result<Self> {
        let root = cli
            .vault
            .clone()
            .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let settings = Settings::load_with_env(&paths::config_path(&root))?;
        let data = PluginData::load(&paths::data_path(&root), &settings)?;
        tracing::debug!(vault = %root.display(), "opened vault");

        Ok(Self {
            root,
            settings,
            data,
        })
    }

    /// Persist a new data snapshot
    pub fn save(&self, data: &PluginData) -> Result<()> {
        data.save(&paths::data_path(&self.root), &self.settings)
    }
}
