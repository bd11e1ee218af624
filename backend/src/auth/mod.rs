//! Authentication module for teacher credentials, tokens and access control.
//!
//! This module provides the public interface for teacher authentication:
//! the credential store, token issuance and verification, the `/token`
//! endpoint, and the extractor that guards roster-changing routes.

pub mod routes;
pub mod handlers;
pub mod models;
pub mod middleware;
pub mod service;
pub mod errors;

// Re-exports for convenience
pub use handlers::*;
pub use models::*;
pub use middleware::*;
pub use routes::*;
pub use service::*;
pub use errors::*;
