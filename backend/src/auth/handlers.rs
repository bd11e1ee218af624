//! Handler functions for authentication-related API endpoints.
//!
//! Teachers exchange a username and password for a bearer token here. The
//! checks themselves live in `auth::service`.

use axum::{extract::State, Json};

use super::models::{LoginForm, TokenResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /token
#[tracing::instrument(skip_all)]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    form: LoginForm,
) -> Result<Json<TokenResponse>, AppError> {
    let LoginForm { username, password } = form;
    let tokens = state.tokens.clone();
    let credentials = state.credentials.clone();

    // argon2 verification is CPU-bound; keep it off the async workers
    let (username, result) = tokio::task::spawn_blocking(move || {
        let result = tokens.authenticate(&credentials, &username, &password);
        (username, result)
    })
    .await
    .map_err(|e| AppError::Internal(format!("login task failed: {}", e)))?;
    let access_token = result?;

    tracing::info!(username = %username, "Issued access token");
    Ok(Json(TokenResponse::bearer(access_token)))
}
