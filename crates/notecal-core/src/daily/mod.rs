//! Daily note discovery and the derived list view

use std::path::{Path, PathBuf};
use std::time::{Instant, UNIX_EPOCH};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::Settings;
use crate::error::{NotecalError, Result};
use crate::store::paths::DATA_DIR;
use crate::store::PluginData;
use crate::title::format_custom_list_title;
use crate::trace_time;

/// Canonical date string used in labels and keys
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A daily note found in the vault
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyNote {
    pub date: NaiveDate,
    /// Vault-relative path with `/` separators
    pub path: String,
    /// Modification time in epoch milliseconds
    pub mtime: f64,
}

impl DailyNote {
    /// `YYYY-MM-DD` form of the note's date
    pub fn date_str(&self) -> String {
        self.date.format(DATE_KEY_FORMAT).to_string()
    }
}

/// How a list item's label was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSource {
    Custom,
    Generated,
    Date,
}

/// One row of the list view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub date: String,
    pub path: String,
    pub label: String,
    pub source: LabelSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Date of a daily note from its file stem, if the stem matches `date_format`
pub fn parse_daily_date(stem: &str, date_format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(stem, date_format).ok()
}

fn mtime_millis(path: &Path) -> Result<f64> {
    let modified = path
        .metadata()
        .and_then(|meta| meta.modified())
        .map_err(|e| NotecalError::io_operation("stat", path.display(), e))?;
    Ok(modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0))
}

fn relative_path(vault: &Path, path: &Path) -> String {
    path.strip_prefix(vault)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Find daily notes under the configured folder, newest date first
pub fn scan_daily_notes(vault: &Path, settings: &Settings) -> Result<Vec<DailyNote>> {
    let start = Instant::now();
    let root: PathBuf = vault.join(&settings.daily_folder);
    if !root.is_dir() {
        return Err(NotecalError::not_found("daily notes folder", root.display()));
    }

    let mut notes = Vec::new();
    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != DATA_DIR);

    for entry in walker {
        let entry = entry.map_err(|e| NotecalError::Other(e.to_string()))?;
        let path = entry.path();
        let is_markdown = path.extension().and_then(|ext| ext.to_str()) == Some("md");
        if !entry.file_type().is_file() || !is_markdown {
            continue;
        }
        let Some(date) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| parse_daily_date(stem, &settings.date_format))
        else {
            continue;
        };

        notes.push(DailyNote {
            date,
            path: relative_path(vault, path),
            mtime: mtime_millis(path)?,
        });
    }

    notes.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.path.cmp(&b.path)));
    trace_time!(start, "scan_daily_notes");
    debug!(count = notes.len(), root = %root.display(), "scanned daily notes");
    Ok(notes)
}

/// The daily note for `date`, if one was scanned
pub fn find_by_date(notes: &[DailyNote], date: NaiveDate) -> Option<&DailyNote> {
    notes.iter().find(|note| note.date == date)
}

/// Label for one note: custom title, then a fresh generated title, then the
/// plain date
pub fn resolve_label(
    note: &DailyNote,
    data: &PluginData,
    ai_titles: bool,
) -> (String, LabelSource) {
    let date_str = note.date_str();

    if let Some(suffix) = data.custom_titles.title_for(&date_str) {
        return (format_custom_list_title(&date_str, suffix), LabelSource::Custom);
    }

    if ai_titles {
        if let Some(title) = data.title_cache.fresh_title(&note.path, note.mtime) {
            return (title.to_string(), LabelSource::Generated);
        }
    }

    (date_str, LabelSource::Date)
}

/// Derive the list view from scanned notes and persisted decorations
pub fn build_list(notes: &[DailyNote], data: &PluginData, settings: &Settings) -> Vec<ListItem> {
    notes
        .iter()
        .map(|note| {
            let date = note.date_str();
            let (label, source) = resolve_label(note, data, settings.ai_titles);
            let color = data
                .color_tags
                .color_for(&date, &note.path)
                .map(str::to_string);
            ListItem {
                date,
                path: note.path.clone(),
                label,
                source,
                color,
            }
        })
        .collect()
}
