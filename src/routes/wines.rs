use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use serde::Deserialize;
use tracing::warn;

use crate::app_state::AppState;
use crate::models::profile::WineDetailResponse;
use crate::models::wine::{RegionSummary, WineEntry, WineListResponse};
use crate::services::catalog::WineFilter;
use crate::services::profile::producer_profile;

/// Query string for GET /api/v1/wines.
#[derive(Debug, Deserialize, Validate)]
pub struct WineQuery {
    #[garde(length(chars, max = 100))]
    pub region: Option<String>,

    #[serde(rename = "type")]
    #[garde(length(chars, max = 100))]
    pub wine_type: Option<String>,

    #[garde(length(chars, max = 100))]
    pub q: Option<String>,

    #[garde(range(min = 1, max = 500))]
    pub limit: Option<usize>,
}

/// GET /api/v1/wines — wine list filtered by region, type and free text.
pub async fn list_wines(
    State(state): State<AppState>,
    query: Result<Query<WineQuery>, QueryRejection>,
) -> Result<Json<WineListResponse>, StatusCode> {
    let Query(query) = query.map_err(|rejection| {
        warn!(error = %rejection, "Malformed wine list query");
        StatusCode::UNPROCESSABLE_ENTITY
    })?;
    if let Err(report) = query.validate() {
        warn!(error = %report, "Rejected wine list query");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let filter = WineFilter {
        region: query.region,
        wine_type: query.wine_type,
        query: query.q,
    };
    let matches = state.catalog.filter(&filter);
    let total = matches.len();

    metrics::counter!("wine_queries_total").increment(1);

    let wines = matches
        .into_iter()
        .take(query.limit.unwrap_or(usize::MAX))
        .map(|(id, wine)| WineEntry {
            id,
            wine: wine.clone(),
        })
        .collect();

    Ok(Json(WineListResponse { total, wines }))
}

/// GET /api/v1/wines/:id — one wine with its producer description.
pub async fn get_wine(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> Result<Json<WineDetailResponse>, StatusCode> {
    let wine = state.catalog.get(id).ok_or(StatusCode::NOT_FOUND)?;
    let producer = producer_profile(wine, &state.wineries);

    Ok(Json(WineDetailResponse {
        entry: WineEntry {
            id,
            wine: wine.clone(),
        },
        producer,
    }))
}

/// GET /api/v1/regions — regions on the wine list with wine counts.
pub async fn list_regions(State(state): State<AppState>) -> Json<Vec<RegionSummary>> {
    Json(state.catalog.regions())
}
