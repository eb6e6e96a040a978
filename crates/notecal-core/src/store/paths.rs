//! Locations of notecal's files inside a vault

use std::path::{Path, PathBuf};

/// Directory holding notecal state, relative to the vault root
pub const DATA_DIR: &str = ".notecal";

/// Settings file name
pub const CONFIG_FILE: &str = "config.toml";

/// Persisted data file name
pub const DATA_FILE: &str = "data.json";

pub fn data_dir(vault: &Path) -> PathBuf {
    vault.join(DATA_DIR)
}

pub fn config_path(vault: &Path) -> PathBuf {
    data_dir(vault).join(CONFIG_FILE)
}

pub fn data_path(vault: &Path) -> PathBuf {
    data_dir(vault).join(DATA_FILE)
}
