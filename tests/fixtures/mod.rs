//! Test fixtures: a small wine list and winery table

use winelist::models::wine::WineRecord;
use winelist::models::winery::WineryRecord;

/// Test fixture describing one wine on the list
#[derive(Debug, Clone)]
pub struct TestWineFixture {
    pub name: &'static str,
    pub producer: &'static str,
    pub region: &'static str,
    pub wine_type: &'static str,
}

pub const TEST_WINES: &[TestWineFixture] = &[
    TestWineFixture {
        name: "Tignanello",
        producer: "Antinori",
        region: "Tuscany",
        wine_type: "Red",
    },
    TestWineFixture {
        name: "Guado al Tasso",
        producer: "Guado al Tasso by Antinori",
        region: "Tuscany",
        wine_type: "Rosso",
    },
    TestWineFixture {
        name: "Sassicaia",
        producer: "Sassicaia",
        region: "Tuscany",
        wine_type: "Red",
    },
    TestWineFixture {
        name: "Franciacorta Brut",
        producer: "Bellavista",
        region: "Lombardy",
        wine_type: "Sparkling",
    },
    TestWineFixture {
        name: "Vin Santo",
        producer: "Fattoria Sconosciuta",
        region: "Tuscany",
        wine_type: "Passito",
    },
];

pub fn wine_records() -> Vec<WineRecord> {
    TEST_WINES
        .iter()
        .map(|f| WineRecord {
            wine_producer: f.producer.to_string(),
            wine_name: Some(f.name.to_string()),
            region: Some(f.region.to_string()),
            wine_type: Some(f.wine_type.to_string()),
            ..WineRecord::default()
        })
        .collect()
}

pub fn winery_records() -> Vec<WineryRecord> {
    vec![
        WineryRecord {
            aliases: vec!["Marchesi Antinori".to_string()],
            region: Some("Tuscany".to_string()),
            location: Some("Florence".to_string()),
            year: Some("1385".to_string()),
            ..WineryRecord::named("Antinori")
        },
        WineryRecord {
            aliases: vec!["Sassicaia".to_string()],
            region: Some("Tuscany".to_string()),
            location: Some("Bolgheri".to_string()),
            founder: Some("Mario Incisa della Rocchetta".to_string()),
            ..WineryRecord::named("Tenuta San Guido")
        },
        WineryRecord {
            notes: Some("Producer profile coming soon.".to_string()),
            ..WineryRecord::named("Bellavista")
        },
    ]
}
