//! API Routes
//!
//! Configures the Axum router with all catalog service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    characteristic_handler, get_pokemon_handler, health_handler, list_pokemon_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /pokemon` - Full catalog listing (built and memoized on first request)
/// - `GET /pokemon/:identifier` - Detail view by numeric id or name
/// - `GET /characteristic/:id` - Uncached pass-through to the upstream
/// - `GET /stats` - Cache statistics and catalog readiness
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/pokemon", get(list_pokemon_handler))
        .route("/pokemon/:identifier", get(get_pokemon_handler))
        .route("/characteristic/:id", get(characteristic_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
