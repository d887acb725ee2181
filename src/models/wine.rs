use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::text_or_number;

/// Broad wine styles used for filtering and generic descriptions.
///
/// Parses the English names and the Italian terms found on wine lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum WineType {
    #[strum(to_string = "red", serialize = "rosso")]
    Red,
    #[strum(to_string = "white", serialize = "bianco")]
    White,
    #[strum(to_string = "rosé", serialize = "rose", serialize = "rosato")]
    Rose,
    #[strum(
        to_string = "sparkling",
        serialize = "spumante",
        serialize = "bollicine"
    )]
    Sparkling,
    #[strum(to_string = "dessert", serialize = "passito")]
    Dessert,
    #[strum(to_string = "fortified", serialize = "fortificato")]
    Fortified,
}

impl WineType {
    /// Parse a free-text `wine_type`; unknown styles yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

/// One wine from the wine list document.
///
/// Only the fields the catalog reads are typed; every other key is kept
/// verbatim in `extra` and handed back to the client unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WineRecord {
    #[serde(default)]
    pub wine_producer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wine_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wine_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub wine_price: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WineRecord {
    /// Parsed style of this wine, if `wine_type` names a known one.
    pub fn style(&self) -> Option<WineType> {
        self.wine_type.as_deref().and_then(WineType::parse)
    }
}

/// A wine together with its position in the list.
#[derive(Debug, Clone, Serialize)]
pub struct WineEntry {
    pub id: usize,
    #[serde(flatten)]
    pub wine: WineRecord,
}

/// Response body for a filtered wine listing.
#[derive(Debug, Serialize)]
pub struct WineListResponse {
    /// Matches before `limit` was applied.
    pub total: usize,
    pub wines: Vec<WineEntry>,
}

/// Number of wines listed under one region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub wine_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wine_type_parses_italian_terms() {
        assert_eq!(WineType::parse("Rosso"), Some(WineType::Red));
        assert_eq!(WineType::parse("BIANCO"), Some(WineType::White));
        assert_eq!(WineType::parse(" rosato "), Some(WineType::Rose));
        assert_eq!(WineType::parse("Bollicine"), Some(WineType::Sparkling));
        assert_eq!(WineType::parse("Frizzante"), None);
    }

    #[test]
    fn test_wine_type_display() {
        assert_eq!(WineType::Rose.to_string(), "rosé");
        assert_eq!(WineType::Red.to_string(), "red");
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let wine: WineRecord = serde_json::from_str(
            r#"{"wine_producer": "Gaja", "wine_price": 280, "vintage": 2019}"#,
        )
        .unwrap();
        assert_eq!(wine.wine_price.as_deref(), Some("280"));
        assert_eq!(wine.extra["vintage"], 2019);

        let entry = WineEntry { id: 3, wine };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["vintage"], 2019);
        assert_eq!(json["wine_producer"], "Gaja");
    }
}
