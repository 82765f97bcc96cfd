//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.
//!
//! # Endpoints
//! - `POST /auth/login` - Exchange demo credentials for a bearer token
//! - `GET /pokemon` - Paginated/searchable list (bearer-protected)
//! - `GET /pokemon/:id` - Detail lookup (bearer-protected)
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    get_pokemon_handler, health_handler, list_pokemon_handler, login_handler, stats_handler,
    AppState,
};
use crate::auth::require_auth;

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Bearer auth on the /pokemon routes only
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Catalog routes sit behind the bearer-token middleware
    let protected = Router::new()
        .route("/pokemon", get(list_pokemon_handler))
        .route("/pokemon/:id", get(get_pokemon_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
