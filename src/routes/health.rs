use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub catalog: ComponentHealth,
    pub wineries: ComponentHealth,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: String,
    pub records: usize,
}

impl ComponentHealth {
    fn from_count(records: usize) -> Self {
        Self {
            status: if records > 0 { "ok" } else { "empty" }.to_string(),
            records,
        }
    }
}

/// GET /health — data set sizes. An empty wine list marks the service degraded.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = ComponentHealth::from_count(state.catalog.len());
    // An empty directory only means every producer gets a generic description.
    let wineries = ComponentHealth::from_count(state.wineries.len());

    let healthy = catalog.status == "ok";
    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { catalog, wineries },
    };

    (status_code, Json(response))
}
