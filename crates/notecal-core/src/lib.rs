//! Notecal Core Library
//!
//! Pure logic behind the notecal daily-note calendar: text sanitizers, note
//! preparation, validation of generated titles, the bounded title cache and
//! the color-tag / custom-title stores, plus the thin collaborators (settings,
//! persistence, vault scanning, inference client) that feed them.

pub mod cache;
pub mod config;
pub mod daily;
pub mod error;
pub mod format;
pub mod generate;
pub mod logging;
pub mod note;
pub mod store;
pub mod tags;
pub mod text;
pub mod title;
