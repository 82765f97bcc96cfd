//! Auth Module
//!
//! JWT issuance/verification and the bearer-token middleware protecting
//! the catalog routes.

mod middleware;
mod service;

// Re-export public types
pub use middleware::require_auth;
pub use service::{AuthService, Claims};
