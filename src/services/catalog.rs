use std::path::Path;

use tracing::info;

use crate::models::wine::{RegionSummary, WineRecord, WineType};
use crate::services::winery_directory::normalize;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read wine list: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse wine list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Criteria for narrowing the wine list. Absent fields match everything.
#[derive(Debug, Clone, Default)]
pub struct WineFilter {
    pub region: Option<String>,
    pub wine_type: Option<String>,
    /// Free text matched against wine name and producer.
    pub query: Option<String>,
}

/// The wine list, loaded once and read-only afterwards.
pub struct WineCatalog {
    wines: Vec<WineRecord>,
}

impl WineCatalog {
    pub fn new(wines: Vec<WineRecord>) -> Self {
        Self { wines }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let catalog = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(path = %path.display(), wines = catalog.len(), "Loaded wine list");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.wines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wines.is_empty()
    }

    /// Wine at position `id` in the list.
    pub fn get(&self, id: usize) -> Option<&WineRecord> {
        self.wines.get(id)
    }

    /// Wines matching every given criterion, in list order, with their ids.
    pub fn filter(&self, filter: &WineFilter) -> Vec<(usize, &WineRecord)> {
        let region = filter
            .region
            .as_deref()
            .map(|r| normalize(Some(r)))
            .filter(|r| !r.is_empty());
        let wine_type = filter
            .wine_type
            .as_deref()
            .map(|t| (normalize(Some(t)), WineType::parse(t)))
            .filter(|(t, _)| !t.is_empty());
        let query = filter
            .query
            .as_deref()
            .map(|q| normalize(Some(q)))
            .filter(|q| !q.is_empty());

        self.wines
            .iter()
            .enumerate()
            .filter(|(_, wine)| {
                region
                    .as_deref()
                    .map_or(true, |r| normalize(wine.region.as_deref()) == r)
                    && wine_type
                        .as_ref()
                        .map_or(true, |(text, style)| type_matches(wine, text, *style))
                    && query.as_deref().map_or(true, |q| {
                        normalize(wine.wine_name.as_deref()).contains(q)
                            || normalize(Some(&wine.wine_producer)).contains(q)
                    })
            })
            .collect()
    }

    /// Distinct regions with wine counts, in order of first appearance.
    ///
    /// Spellings that normalize alike are grouped under the first one seen.
    pub fn regions(&self) -> Vec<RegionSummary> {
        let mut keys: Vec<String> = Vec::new();
        let mut summaries: Vec<RegionSummary> = Vec::new();

        for region in self.wines.iter().filter_map(|w| w.region.as_deref()) {
            let key = normalize(Some(region));
            if key.is_empty() {
                continue;
            }
            match keys.iter().position(|k| *k == key) {
                Some(idx) => summaries[idx].wine_count += 1,
                None => {
                    keys.push(key);
                    summaries.push(RegionSummary {
                        region: region.trim().to_string(),
                        wine_count: 1,
                    });
                }
            }
        }

        summaries
    }
}

/// Type filter: same normalized text, or both sides name the same style.
fn type_matches(wine: &WineRecord, wanted: &str, wanted_style: Option<WineType>) -> bool {
    if normalize(wine.wine_type.as_deref()) == wanted {
        return true;
    }
    match (wine.style(), wanted_style) {
        (Some(have), Some(want)) => have == want,
        _ => false,
    }
}
