//! Handler functions for the activity roster API.
//!
//! Roster changes require an authenticated teacher. The `AuthTeacher`
//! extractor is listed before the path and query extractors so an invalid
//! token is reported before anything about the activity is.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::auth::AuthTeacher;
use crate::errors::AppError;
use crate::services::Activity;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /activities
pub async fn list_activities(State(state): State<AppState>) -> Json<IndexMap<String, Activity>> {
    Json(state.registry.list_all().await)
}

/// POST /activities/{activity_name}/signup
#[tracing::instrument(skip(state, teacher), fields(teacher = %teacher.username))]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    teacher: AuthTeacher,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    state.registry.signup(&activity_name, &email).await?;

    tracing::info!("Signed up student");
    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    }))
}

/// DELETE /activities/{activity_name}/unregister
#[tracing::instrument(skip(state, teacher), fields(teacher = %teacher.username))]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    teacher: AuthTeacher,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    state.registry.unregister(&activity_name, &email).await?;

    tracing::info!("Unregistered student");
    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity_name),
    }))
}
