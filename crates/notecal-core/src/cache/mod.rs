//! Bounded, mtime-validated cache of generated note titles
//!
//! Keys are vault-relative file paths. An entry is only shown while the file's
//! current modification time equals the one the title was generated against.
//! Every operation returns a new snapshot; nothing mutates the receiver.


use std::borrow::Cow;
use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Default bound on cached titles
pub const DEFAULT_MAX_ENTRIES: usize = 500;

/// One generated title for one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleCacheEntry {
    /// Modification time the title was generated against (epoch ms)
    pub mtime: f64,
    /// Display label
    pub title: String,
    /// Last write timestamp, drives eviction order
    #[serde(rename = "lastUsed", default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<f64>,
}

impl TitleCacheEntry {
    /// Validate one untrusted persisted record
    fn from_untrusted(raw: &Value) -> Option<Self> {
        let record = raw.as_object()?;

        let title = record.get("title")?.as_str()?;
        if title.trim().is_empty() {
            return None;
        }

        let mtime = record.get("mtime")?.as_f64()?;
        if !mtime.is_finite() || mtime < 0.0 {
            return None;
        }

        let last_used = record
            .get("lastUsed")
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite());

        Some(Self {
            mtime,
            title: title.to_string(),
            last_used,
        })
    }

    fn to_value(&self) -> Value {
        let mut record = Map::new();
        record.insert("mtime".into(), Value::from(self.mtime));
        record.insert("title".into(), Value::from(self.title.as_str()));
        if let Some(last_used) = self.last_used {
            record.insert("lastUsed".into(), Value::from(last_used));
        }
        Value::Object(record)
    }

    /// Eviction rank: smaller is evicted first. A missing `lastUsed` sorts
    /// before every numeric value, negative ones included.
    fn eviction_rank(&self) -> (bool, f64) {
        (self.last_used.is_some(), self.last_used.unwrap_or(0.0))
    }
}

/// Mapping from file path to its cached title, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleCache {
    entries: IndexMap<String, TitleCacheEntry>,
}

impl TitleCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cache from untrusted persisted data.
    ///
    /// Non-object input yields an empty cache. Entries with an empty key, a
    /// non-object value, a blank title or a negative / non-numeric `mtime`
    /// are dropped; a non-numeric `lastUsed` is omitted rather than rejected.
    pub fn sanitize(raw: &Value) -> Self {
        let Some(map) = raw.as_object() else {
            if !raw.is_null() {
                debug!("title cache payload is not an object, starting empty");
            }
            return Self::default();
        };

        let entries: IndexMap<String, TitleCacheEntry> = map
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .filter_map(|(key, value)| {
                TitleCacheEntry::from_untrusted(value).map(|entry| (key.clone(), entry))
            })
            .collect();

        let dropped = map.len() - entries.len();
        if dropped > 0 {
            debug!(dropped, kept = entries.len(), "dropped invalid title cache entries");
        }

        Self { entries }
    }

    /// Enforce `max_entries`, evicting the least recently used entries.
    ///
    /// `None` or `Some(0)` means unbounded. When nothing has to go, the
    /// receiver is handed back borrowed so callers can detect the no-op.
    /// Ties in `lastUsed` keep insertion order (stable sort).
    pub fn prune(&self, max_entries: Option<usize>) -> Cow<'_, TitleCache> {
        match self.eviction_set(max_entries) {
            None => Cow::Borrowed(self),
            Some(evicted) => Cow::Owned(Self {
                entries: self
                    .entries
                    .iter()
                    .filter(|(key, _)| !evicted.contains(key.as_str()))
                    .map(|(key, entry)| (key.clone(), entry.clone()))
                    .collect(),
            }),
        }
    }

    /// Record a freshly generated title for `key` and re-apply the bound.
    ///
    /// Any previous entry at `key` is replaced, including its `lastUsed`,
    /// which becomes `now` (current wall-clock milliseconds when `None`).
    pub fn upsert(
        &self,
        key: &str,
        mtime: f64,
        title: &str,
        max_entries: Option<usize>,
        now: Option<f64>,
    ) -> TitleCache {
        let mut next = self.clone();
        next.entries.insert(
            key.to_string(),
            TitleCacheEntry {
                mtime,
                title: title.to_string(),
                last_used: Some(now.unwrap_or_else(now_millis)),
            },
        );
        next.into_pruned(max_entries)
    }

    /// Cached title for `path`, only when generated against `mtime`
    pub fn fresh_title(&self, path: &str, mtime: f64) -> Option<&str> {
        self.entries
            .get(path)
            .filter(|entry| entry.mtime == mtime)
            .map(|entry| entry.title.as_str())
    }

    pub fn get(&self, path: &str) -> Option<&TitleCacheEntry> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TitleCacheEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Plain JSON map, the shape written to disk
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(key, entry)| (key.clone(), entry.to_value()))
                .collect(),
        )
    }

    fn into_pruned(mut self, max_entries: Option<usize>) -> TitleCache {
        let evicted: Option<HashSet<String>> = self
            .eviction_set(max_entries)
            .map(|keys| keys.into_iter().map(str::to_string).collect());
        if let Some(evicted) = evicted {
            self.entries.retain(|key, _| !evicted.contains(key));
        }
        self
    }

    /// Keys to drop to get down to `max_entries`, or `None` when within bounds
    fn eviction_set(&self, max_entries: Option<usize>) -> Option<HashSet<&str>> {
        let max = max_entries.filter(|max| *max > 0)?;
        if self.entries.len() <= max {
            return None;
        }

        let mut ranked: Vec<(&str, (bool, f64))> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.eviction_rank()))
            .collect();
        ranked.sort_by(|(_, a), (_, b)| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

        let excess = self.entries.len() - max;
        debug!(excess, max, "evicting least recently used titles");
        Some(ranked.into_iter().take(excess).map(|(key, _)| key).collect())
    }
}

impl FromIterator<(String, TitleCacheEntry)> for TitleCache {
    fn from_iter<I: IntoIterator<Item = (String, TitleCacheEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}
