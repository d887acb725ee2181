use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::wine::WineEntry;

/// Where a producer description came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProfileSource {
    /// The producer resolved to a directory record with something to say.
    Directory,
    /// Built from the wine's own type and region.
    Generic,
}

/// Text for the "Producer" panel of a wine detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProducerProfile {
    pub producer: String,
    /// Display name of the matched directory record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winery: Option<String>,
    pub description: String,
    pub source: ProfileSource,
}

/// Response body for a single wine.
#[derive(Debug, Serialize)]
pub struct WineDetailResponse {
    #[serde(flatten)]
    pub entry: WineEntry,
    pub producer: ProducerProfile,
}
