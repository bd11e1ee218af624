//! Mergington High School activities backend.
//!
//! Lists extracurricular activities and lets authenticated teachers add
//! students to or remove them from an activity's roster.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{response::Redirect, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(auth::auth_router())
        .merge(api::activities::activities_router())
        .nest_service("/static", static_files)
        .with_state(state);

    middleware::with_common_layers(app)
}

async fn root_handler() -> Redirect {
    Redirect::temporary("/static/index.html")
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
