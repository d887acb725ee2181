use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::app_state::AppState;
use crate::models::winery::{LookupResponse, WineryRecord};
use crate::services::winery_directory::{describe, normalize};

const DEFAULT_SUGGESTIONS: usize = 3;

/// Query string for GET /api/v1/wineries/lookup.
#[derive(Debug, Deserialize, Validate)]
pub struct LookupQuery {
    #[garde(length(chars, max = 200))]
    pub producer: String,

    /// Maximum did-you-mean candidates when nothing matches.
    #[garde(range(max = 10))]
    pub suggest: Option<usize>,
}

/// GET /api/v1/wineries — every winery record in lookup order.
pub async fn list_wineries(State(state): State<AppState>) -> Json<Vec<WineryRecord>> {
    Json(state.wineries.records().cloned().collect())
}

/// GET /api/v1/wineries/lookup — resolve a producer name and describe it.
///
/// Not-found is a normal answer (`found: false`), never an error status.
pub async fn lookup_winery(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Result<Json<LookupResponse>, StatusCode> {
    let Query(query) = query.map_err(|rejection| {
        warn!(error = %rejection, "Malformed winery lookup query");
        StatusCode::UNPROCESSABLE_ENTITY
    })?;
    if let Err(report) = query.validate() {
        warn!(error = %report, "Rejected winery lookup query");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let winery = state.wineries.find(&query.producer);
    let outcome = if winery.is_some() { "matched" } else { "not_found" };
    metrics::counter!("winery_lookups_total", "outcome" => outcome).increment(1);
    debug!(producer = %query.producer, outcome, "Winery lookup");

    let suggestions = match winery {
        Some(_) => Vec::new(),
        None => state
            .wineries
            .suggest(&query.producer, query.suggest.unwrap_or(DEFAULT_SUGGESTIONS))
            .into_iter()
            .map(|r| r.name.clone())
            .collect(),
    };

    Ok(Json(LookupResponse {
        key: normalize(Some(&query.producer)),
        found: winery.is_some(),
        description: describe(winery),
        winery: winery.cloned(),
        suggestions,
        query: query.producer,
    }))
}
