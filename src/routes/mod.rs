pub mod health;
pub mod metrics;
pub mod wineries;
pub mod wines;

use axum::{routing::get, Router};

use crate::app_state::AppState;

/// API routes over the shared wine list and winery directory.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/wines", get(wines::list_wines))
        .route("/api/v1/wines/{id}", get(wines::get_wine))
        .route("/api/v1/regions", get(wines::list_regions))
        .route("/api/v1/wineries", get(wineries::list_wineries))
        .route("/api/v1/wineries/lookup", get(wineries::lookup_winery))
        .with_state(state)
}
