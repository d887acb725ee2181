//! Test helper utilities for driving the router in-process

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use winelist::app_state::AppState;
use winelist::routes;
use winelist::services::{catalog::WineCatalog, winery_directory::WineryDirectory};

use crate::fixtures::{wine_records, winery_records};

/// Router over the fixture wine list and winery table
pub fn test_app() -> Router {
    let catalog = WineCatalog::new(wine_records());
    let wineries = WineryDirectory::new(winery_records()).expect("Fixture wineries are valid");
    routes::router(AppState::new(catalog, wineries))
}

/// Router with nothing loaded
pub fn empty_app() -> Router {
    let wineries = WineryDirectory::new(Vec::new()).expect("Empty directory is valid");
    routes::router(AppState::new(WineCatalog::new(Vec::new()), wineries))
}

/// Send a GET request and return the status with the JSON body, if any
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Option<Value>) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, serde_json::from_slice(&bytes).ok())
}
