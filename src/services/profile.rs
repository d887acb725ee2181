use tracing::debug;

use crate::models::profile::{ProducerProfile, ProfileSource};
use crate::models::wine::WineRecord;
use crate::services::winery_directory::{describe, WineryDirectory};

/// Build the producer panel text for a wine.
///
/// Unregistered producers are common; they get a sentence built from the
/// wine's own type and region instead.
pub fn producer_profile(wine: &WineRecord, directory: &WineryDirectory) -> ProducerProfile {
    let winery = directory.find(&wine.wine_producer);
    let description = describe(winery);

    let profile = match winery {
        Some(record) if !description.is_empty() => ProducerProfile {
            producer: wine.wine_producer.clone(),
            winery: Some(record.name.clone()),
            description,
            source: ProfileSource::Directory,
        },
        _ => {
            debug!(producer = %wine.wine_producer, "Falling back to generic producer description");
            ProducerProfile {
                producer: wine.wine_producer.clone(),
                winery: winery.map(|r| r.name.clone()),
                description: generic_description(wine),
                source: ProfileSource::Generic,
            }
        }
    };

    metrics::counter!("producer_profiles_total", "source" => profile.source.to_string())
        .increment(1);
    profile
}

/// One sentence from the wine's type and region, or empty if it has neither.
pub fn generic_description(wine: &WineRecord) -> String {
    let region = wine
        .region
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());
    let style = match wine.style() {
        Some(style) => Some(style.to_string()),
        None => wine
            .wine_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase),
    };

    match (style, region) {
        (Some(style), Some(region)) => format!("A {style} wine from {region}."),
        (None, Some(region)) => format!("A wine from {region}."),
        (Some(style), None) => format!("A {style} wine."),
        (None, None) => String::new(),
    }
}
