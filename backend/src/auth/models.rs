//! Data structures for authentication-related entities.
//!
//! Teacher credentials as loaded from disk, the JWT claims carried by access
//! tokens, and the request/response bodies of the token endpoint.

use serde::{Deserialize, Serialize};

/// A teacher allowed to manage activity rosters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherCredential {
    pub username: String,
    /// PHC-formatted argon2 hash
    pub password_hash: String,
}

impl TeacherCredential {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// JWT claims for teacher access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Teacher username
    pub sub: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// OAuth2 password-grant style form posted to `/token`.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// The authenticated caller, derived fresh from the bearer token on each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTeacher {
    pub username: String,
}
