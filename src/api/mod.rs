//! API Module
//!
//! HTTP handlers and routing for the proxy REST API.
//!
//! # Endpoints
//! - `POST /auth/login` - Exchange demo credentials for a bearer token
//! - `GET /pokemon` - Paginated/searchable creature list (bearer-protected)
//! - `GET /pokemon/:id` - Creature detail lookup (bearer-protected)
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
