use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Get a Command for notecal with ambient overrides cleared
pub fn notecal() -> Command {
    let mut cmd = cargo_bin_cmd!("notecal");
    for var in [
        "NOTECAL_VAULT",
        "NOTECAL_OLLAMA_URL",
        "NOTECAL_MODEL",
        "NOTECAL_TIMEOUT",
        "NOTECAL_LOG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Write a note and pin its modification time to `mtime_ms`
#[allow(dead_code)]
pub fn write_note(vault: &Path, rel: &str, text: &str, mtime_ms: u64) {
    let path = vault.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, text).unwrap();
    let modified: SystemTime = UNIX_EPOCH + Duration::from_millis(mtime_ms);
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(modified)
        .unwrap();
}

/// Write `.notecal/data.json`
#[allow(dead_code)]
pub fn write_data(vault: &Path, document: &serde_json::Value) {
    let dir = vault.join(".notecal");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("data.json"), document.to_string()).unwrap();
}

/// Read back `.notecal/data.json`
#[allow(dead_code)]
pub fn read_data(vault: &Path) -> serde_json::Value {
    let content = fs::read_to_string(vault.join(".notecal").join("data.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}
