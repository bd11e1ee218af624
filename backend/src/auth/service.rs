//! Core business logic for the authentication system.
//!
//! This service handles loading teacher credentials, password hashing and
//! verification, and the issuance and validation of signed access tokens.
//! Handlers and the bearer-token extractor only ever talk to the types here.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::errors::AuthError;
use super::models::{Claims, TeacherCredential};

/// Tokens are always signed and verified with this algorithm, whatever the
/// token header claims.
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Hash a password using argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verify a password against a stored PHC hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Hash checked against when the username is unknown, so that a miss costs
/// the same as a wrong password.
fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| hash_password("not-a-real-teacher-password").ok())
        .as_deref()
}

/// Read-only mapping of teacher username to password hash.
#[derive(Debug, Default)]
pub struct CredentialStore {
    teachers: HashMap<String, String>,
}

impl CredentialStore {
    /// Load credentials from a JSON object of `{ "username": "<argon2 hash>" }`.
    ///
    /// Every hash is parsed up front so a bad entry fails startup rather than
    /// the first login attempt.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AuthError::CredentialFile {
            path: path.to_path_buf(),
            source,
        })?;
        let teachers: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|source| AuthError::CredentialFormat {
                path: path.to_path_buf(),
                source,
            })?;

        for (username, hash) in &teachers {
            if PasswordHash::new(hash).is_err() {
                return Err(AuthError::InvalidStoredHash {
                    username: username.clone(),
                });
            }
        }

        tracing::debug!(path = %path.display(), count = teachers.len(), "Loaded teacher credentials");
        Ok(Self { teachers })
    }

    pub fn from_credentials(credentials: impl IntoIterator<Item = TeacherCredential>) -> Self {
        Self {
            teachers: credentials
                .into_iter()
                .map(|c| (c.username, c.password_hash))
                .collect(),
        }
    }

    pub fn lookup(&self, username: &str) -> Option<&str> {
        self.teachers.get(username).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }
}

/// Issues and verifies HS256 access tokens for teachers.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Check a username/password pair and issue a token for it.
    pub fn authenticate(
        &self,
        store: &CredentialStore,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let matched = match store.lookup(username) {
            Some(hash) => verify_password(password, hash)?,
            None => {
                if let Some(hash) = dummy_hash() {
                    let _ = verify_password(password, hash);
                }
                false
            }
        };

        if !matched {
            tracing::warn!(username, "Rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        self.issue(username)
    }

    /// Sign a token for `username` expiring after the configured TTL.
    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.encoding)
            .map_err(AuthError::TokenCreation)
    }

    /// Validate a token and return the teacher username it was issued for.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AuthError::InvalidToken
            })?;

        if data.claims.sub.is_empty() {
            tracing::debug!("Token rejected: empty subject");
            return Err(AuthError::InvalidToken);
        }
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SECRET: &str = "test-signing-secret";

    fn store_with(username: &str, password: &str) -> CredentialStore {
        let hash = hash_password(password).unwrap();
        CredentialStore::from_credentials([TeacherCredential::new(username, hash)])
    }

    fn service() -> TokenService {
        TokenService::new(SECRET, Duration::minutes(30))
    }

    fn sign(claims: &serde_json::Value, alg: Algorithm, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(alg),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("chalkboard").unwrap();
        assert!(verify_password("chalkboard", &hash).unwrap());
        assert!(!verify_password("whiteboard", &hash).unwrap());
    }

    #[test]
    fn test_password_hashes_are_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("pw", "not-a-hash"),
            Err(AuthError::PasswordHash(_))
        ));
    }

    #[test]
    fn test_authenticate_issues_token_for_subject() {
        let store = store_with("mrodriguez", "art-teacher-pw");
        let tokens = service();

        let token = tokens
            .authenticate(&store, "mrodriguez", "art-teacher-pw")
            .unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), "mrodriguez");
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let store = store_with("mrodriguez", "art-teacher-pw");
        let result = service().authenticate(&store, "mrodriguez", "guess");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let store = store_with("mrodriguez", "art-teacher-pw");
        let result = service().authenticate(&store, "nobody", "art-teacher-pw");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_issued_token_carries_expiry() {
        let tokens = service();
        let token = tokens.issue("mchen").unwrap();
        let data = jsonwebtoken::decode::<Claims>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::new(TOKEN_ALGORITHM),
        )
        .unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, 30 * 60);
    }

    #[test]
    fn test_verify_wrong_secret_fails() {
        let token = TokenService::new("other-secret", Duration::minutes(30))
            .issue("mchen")
            .unwrap();
        assert!(matches!(service().verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_other_algorithm() {
        let exp = Utc::now().timestamp() + 600;
        let token = sign(&json!({"sub": "mchen", "exp": exp}), Algorithm::HS384, SECRET);
        assert!(matches!(service().verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_unsigned_token() {
        // {"alg":"none","typ":"JWT"} . {"sub":"mchen","exp":9999999999} . <empty>
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJzdWIiOiJtY2hlbiIsImV4cCI6OTk5OTk5OTk5OX0.";
        assert!(service().verify(token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let now = Utc::now().timestamp();
        let token = sign(
            &json!({"sub": "mchen", "iat": now - 7200, "exp": now - 3600}),
            TOKEN_ALGORITHM,
            SECRET,
        );
        assert!(matches!(service().verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_missing_or_empty_subject() {
        let exp = Utc::now().timestamp() + 600;
        let missing = sign(&json!({"exp": exp}), TOKEN_ALGORITHM, SECRET);
        let empty = sign(
            &json!({"sub": "", "iat": exp - 600, "exp": exp}),
            TOKEN_ALGORITHM,
            SECRET,
        );
        assert!(matches!(service().verify(&missing), Err(AuthError::InvalidToken)));
        assert!(matches!(service().verify(&empty), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_garbage() {
        assert!(matches!(
            service().verify("definitely.not.ajwt"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(service().verify(""), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_load_credentials_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("teachers.json");
        let hash = hash_password("pw").unwrap();
        std::fs::write(&path, json!({ "mrodriguez": hash }).to_string()).unwrap();

        let store = CredentialStore::load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.lookup("mrodriguez").is_some());
        assert!(store.lookup("mchen").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = CredentialStore::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(AuthError::CredentialFile { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("teachers.json");
        std::fs::write(&path, "[\"not\", \"a\", \"map\"]").unwrap();
        assert!(matches!(
            CredentialStore::load(&path),
            Err(AuthError::CredentialFormat { .. })
        ));
    }

    #[test]
    fn test_load_rejects_plaintext_password() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("teachers.json");
        std::fs::write(&path, r#"{"mchen": "hunter2"}"#).unwrap();
        match CredentialStore::load(&path) {
            Err(AuthError::InvalidStoredHash { username }) => assert_eq!(username, "mchen"),
            other => panic!("expected InvalidStoredHash, got {:?}", other),
        }
    }
}
