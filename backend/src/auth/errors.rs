//! Custom error types specific to authentication failures.
//!
//! Covers the three ways a caller can fail to authenticate (bad credentials,
//! missing token, invalid token) as well as the startup failures that come
//! from loading the teacher credential file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("incorrect username or password")]
    InvalidCredentials,

    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("failed to sign access token: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("cannot read credential file {path}: {source}")]
    CredentialFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed credential file {path}: {source}")]
    CredentialFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored hash for teacher '{username}' is not a valid password hash")]
    InvalidStoredHash { username: String },
}

impl AuthError {
    /// True for failures the caller caused and can fix by re-authenticating.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::MissingToken | AuthError::InvalidToken
        )
    }
}
