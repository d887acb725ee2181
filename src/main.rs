use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use winelist::app_state::AppState;
use winelist::config::AppConfig;
use winelist::routes;
use winelist::services::{catalog::WineCatalog, winery_directory::WineryDirectory};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing winelist server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!(
        "winery_lookups_total",
        "Producer lookups against the winery directory, by outcome"
    );
    metrics::describe_counter!("wine_queries_total", "Filtered wine list queries served");
    metrics::describe_counter!(
        "producer_profiles_total",
        "Producer descriptions built, by source"
    );

    // Load the wine list
    let catalog = WineCatalog::from_path(&config.wines_path).expect("Failed to load wine list");

    // Load the winery directory
    let wineries = match &config.wineries_path {
        Some(path) => WineryDirectory::from_path(path),
        None => {
            tracing::info!("Using built-in winery directory");
            WineryDirectory::builtin()
        }
    }
    .expect("Failed to load winery directory");

    let state = AppState::new(catalog, wineries);

    let app = routes::router(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting winelist on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
