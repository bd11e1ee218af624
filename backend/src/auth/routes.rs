//! Defines the HTTP routes specifically for authentication.
//!
//! Designed to be merged into the main Axum router.

use axum::{routing::post, Router};

use super::handlers::login_for_access_token;
use crate::state::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new().route("/token", post(login_for_access_token))
}
