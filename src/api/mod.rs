use axum::{Router, routing::get};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::result_generator::ResultGenerator;

pub mod handlers;
pub mod models;

/// Shared, read-only request context.
#[derive(Clone)]
pub struct AppState {
    pub generator: ResultGenerator,
    pub results_per_page: u64,
    pub simulated_latency: Duration,
    pub static_dir: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            generator: ResultGenerator::default(),
            results_per_page: config.results_per_page,
            simulated_latency: config.simulated_latency,
            static_dir: config.static_dir.clone(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Pages
        .route("/", get(handlers::landing_handler))
        .route("/search", get(handlers::search_page_handler))
        // API routes
        .route("/api/search", get(handlers::search_api_handler))
        .route("/health", get(handlers::health_handler))
        .with_state(state)
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
