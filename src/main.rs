//! Gate Pass Backend
//!
//! A REST backend for submitting, approving and scanning student gate passes,
//! persisted to a single JSON document.

mod api;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Gate Pass Backend");

    // Initialize storage
    let store = db::init_store(&config.db_path).await?;
    tracing::info!("Database file: {}", store.path().display());

    let state = AppState {
        repo: Repository::new(Arc::new(store)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);
    tracing::info!("Available API endpoints:");
    tracing::info!("  GET    /api/requests       - Get all requests");
    tracing::info!("  POST   /api/requests       - Create new request");
    tracing::info!("  PUT    /api/requests/{{id}}  - Update request status");
    tracing::info!("  POST   /api/scan/{{id}}      - Scan gate pass");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        .route("/requests", get(api::list_requests))
        .route("/requests", post(api::create_request))
        .route("/requests/{id}", put(api::update_request_status))
        .route("/scan/{id}", post(api::scan_gate_pass));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
