//! Global application error types and handlers.
//!
//! `AppError` is what every handler returns. Layer-specific errors convert
//! into it with `?`, and its `IntoResponse` impl turns each failure into a
//! status code plus a `{"detail": "..."}` body.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::services::RegistryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid form body: {0}")]
    InvalidForm(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(e) if e.is_unauthenticated() => StatusCode::UNAUTHORIZED,
            AppError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Registry(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message returned to the caller.
    pub fn detail(&self) -> String {
        let detail = match self {
            AppError::InvalidForm(reason) => return reason.clone(),
            AppError::Auth(AuthError::InvalidCredentials) => "Incorrect username or password",
            AppError::Auth(AuthError::MissingToken) => "Not authenticated",
            AppError::Auth(AuthError::InvalidToken) => "Invalid authentication credentials",
            AppError::Auth(_) | AppError::Internal(_) => "Internal server error",
            AppError::Registry(RegistryError::NotFound(_)) => "Activity not found",
            AppError::Registry(RegistryError::AlreadyRegistered { .. }) => {
                "Student is already signed up"
            }
            AppError::Registry(RegistryError::NotRegistered { .. }) => {
                "Student is not signed up for this activity"
            }
            AppError::Registry(RegistryError::ActivityFull { .. }) => "Activity is full",
        };
        detail.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({ "detail": self.detail() }));
        if status == StatusCode::UNAUTHORIZED {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }
        (status, body).into_response()
    }
}
