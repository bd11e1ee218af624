//! Middleware for protecting authenticated routes.
//!
//! `AuthTeacher` is an axum extractor: adding it to a handler's arguments
//! makes the route require a valid `Authorization: Bearer <token>` header.
//! It runs before the handler body, so token problems are reported ahead of
//! anything the handler itself would check.
//!
//! `LoginForm` is extracted from either an urlencoded or a multipart body,
//! matching what browsers send for a plain form and for `FormData`.

use axum::{
    extract::{FromRequest, FromRequestParts, Multipart, Request},
    http::{header, request::Parts, HeaderMap},
    Form,
};

use super::errors::AuthError;
use super::models::{AuthTeacher, LoginForm};
use crate::errors::AppError;
use crate::state::AppState;

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let (scheme, token) = value.trim().split_once(' ').ok_or(AuthError::MissingToken)?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

impl FromRequestParts<AppState> for AuthTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let username = state.tokens.verify(token)?;
        Ok(AuthTeacher { username })
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

impl<S> FromRequest<S> for LoginForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(req.headers()) {
            let Form(form) = Form::<LoginForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::InvalidForm(e.body_text()))?;
            return Ok(form);
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidForm(e.body_text()))?;

        let mut username = None;
        let mut password = None;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidForm(e.body_text()))?
        {
            let name = field.name().map(str::to_owned);
            let slot = match name.as_deref() {
                Some("username") => &mut username,
                Some("password") => &mut password,
                _ => continue,
            };
            *slot = Some(
                field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidForm(e.body_text()))?,
            );
        }

        match (username, password) {
            (Some(username), Some(password)) => Ok(LoginForm { username, password }),
            (None, _) => Err(AppError::InvalidForm("missing field `username`".to_string())),
            (_, None) => Err(AppError::InvalidForm("missing field `password`".to_string())),
        }
    }
}
