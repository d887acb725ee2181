//! Winery directory: resolves producer names from wine labels to winery
//! records and renders those records as prose.
//!
//! Matching is first-match substring containment over the directory's
//! insertion order. A short key that happens to occur inside an unrelated,
//! longer producer name matches it. Label data is messy and this tolerance is
//! relied upon, so lookups stay first-match rather than best-match.

use std::collections::HashSet;
use std::path::Path;

use strsim::jaro_winkler;
use tracing::{debug, info};

use crate::models::winery::WineryRecord;

/// Winery table compiled into the binary.
const BUILTIN_WINERIES: &str = include_str!("../../data/wineries.json");

/// Minimum Jaro-Winkler similarity for a did-you-mean suggestion.
const SUGGEST_THRESHOLD: f64 = 0.80;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to read winery table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse winery table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate winery key {key:?} (from {name:?})")]
    DuplicateKey { key: String, name: String },

    #[error("Winery name {0:?} normalizes to an empty key")]
    EmptyKey(String),
}

/// Canonical form of a producer name for comparison.
///
/// Uppercases, strips `*`, `(` and `)`, trims, and collapses whitespace runs
/// to a single space. Absent input yields an empty string.
pub fn normalize(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };
    let stripped: String = name
        .to_uppercase()
        .chars()
        .filter(|c| !matches!(c, '*' | '(' | ')'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Bidirectional containment between two normalized names.
fn overlaps(input: &str, candidate: &str) -> bool {
    !candidate.is_empty() && (input.contains(candidate) || candidate.contains(input))
}

struct Entry {
    key: String,
    aliases: Vec<String>,
    record: WineryRecord,
}

/// Read-only table of winery records keyed by normalized name.
pub struct WineryDirectory {
    entries: Vec<Entry>,
}

impl WineryDirectory {
    /// Build a directory from records in lookup order.
    ///
    /// Fails if two records share a normalized name or a name normalizes to
    /// nothing.
    pub fn new(records: Vec<WineryRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            let key = normalize(Some(&record.name));
            if key.is_empty() {
                return Err(DirectoryError::EmptyKey(record.name));
            }
            if !seen.insert(key.clone()) {
                return Err(DirectoryError::DuplicateKey {
                    key,
                    name: record.name,
                });
            }
            let aliases = record
                .aliases
                .iter()
                .map(|alias| normalize(Some(alias)))
                .filter(|alias| !alias.is_empty())
                .collect();
            entries.push(Entry {
                key,
                aliases,
                record,
            });
        }

        Ok(Self { entries })
    }

    /// Parse a JSON array of winery records.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<WineryRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a JSON winery table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let directory = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            wineries = directory.len(),
            "Loaded winery directory"
        );
        Ok(directory)
    }

    /// The winery table shipped with the binary.
    pub fn builtin() -> Result<Self, DirectoryError> {
        Self::from_json(BUILTIN_WINERIES)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in lookup order.
    pub fn records(&self) -> impl Iterator<Item = &WineryRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Resolve a producer name to a winery record.
    ///
    /// In order, first match wins: exact key; any key contained in the input
    /// or containing it; any alias contained in the input or containing it.
    ///
    /// Only an empty `producer` short-circuits. Input such as `"**"` normalizes
    /// to an empty string, which every key contains, so it resolves to the
    /// first record.
    pub fn find(&self, producer: &str) -> Option<&WineryRecord> {
        if producer.is_empty() {
            return None;
        }
        let input = normalize(Some(producer));

        if let Some(entry) = self.entries.iter().find(|e| e.key == input) {
            return Some(&entry.record);
        }

        if let Some(entry) = self.entries.iter().find(|e| overlaps(&input, &e.key)) {
            debug!(producer, key = %entry.key, "Producer matched by key containment");
            return Some(&entry.record);
        }

        for entry in &self.entries {
            if let Some(alias) = entry.aliases.iter().find(|a| overlaps(&input, a)) {
                debug!(producer, key = %entry.key, alias = %alias, "Producer matched by alias");
                return Some(&entry.record);
            }
        }

        debug!(producer, "No winery record for producer");
        None
    }

    /// Did-you-mean candidates for a producer name, best first.
    ///
    /// Scores every key and alias by Jaro-Winkler similarity and keeps records
    /// scoring at least 0.80. Ties keep directory order.
    pub fn suggest(&self, producer: &str, limit: usize) -> Vec<&WineryRecord> {
        let input = normalize(Some(producer));
        if input.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f64, usize)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let best = std::iter::once(&entry.key)
                    .chain(entry.aliases.iter())
                    .map(|name| jaro_winkler(&input, name))
                    .fold(0.0_f64, f64::max);
                (best >= SUGGEST_THRESHOLD).then_some((best, idx))
            })
            .collect();

        // Stable sort keeps directory order among equal scores.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, idx)| &self.entries[idx].record)
            .collect()
    }
}

/// Present, non-empty field text.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Render a winery record as a short paragraph of prose.
///
/// Sentences appear in a fixed order, only for fields that are present:
/// history, location, founding year, philosophy, ownership, grapes, main
/// wines, notes. A missing record renders as an empty string.
pub fn describe(record: Option<&WineryRecord>) -> String {
    let Some(record) = record else {
        return String::new();
    };

    let mut sentences: Vec<String> = Vec::new();

    if let Some(history) = present(&record.history) {
        sentences.push(history.to_string());
    }

    match (present(&record.region), present(&record.location)) {
        (Some(region), Some(location)) => {
            sentences.push(format!("Located in {location}, {region}."))
        }
        (Some(region), None) => sentences.push(format!("Located in {region}.")),
        (None, Some(location)) => sentences.push(format!("Located in {location}.")),
        (None, None) => {}
    }

    if let Some(year) = present(&record.year) {
        sentences.push(format!("Founded in {year}."));
    }
    if let Some(philosophy) = present(&record.philosophy) {
        sentences.push(philosophy.to_string());
    }
    if let Some(ownership) = present(&record.ownership) {
        sentences.push(format!("Ownership: {ownership}."));
    }
    if let Some(grapes) = present(&record.grapes) {
        sentences.push(format!("Main grapes: {grapes}."));
    }
    if let Some(main_wines) = present(&record.main_wines) {
        sentences.push(format!("Main wines: {main_wines}."));
    }
    if let Some(notes) = present(&record.notes) {
        sentences.push(notes.to_string());
    }

    sentences.join(" ")
}
