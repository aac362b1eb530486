//! Authentication ports.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Session, UserId};
use crate::error::RepoError;

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub session_id: Uuid,
    pub user_id: UserId,
    pub exp: i64,
}

/// Signs and verifies the token handed to the browser for a session.
pub trait TokenService: Send + Sync {
    /// Issue a token naming `session`.
    fn issue(&self, session: &Session) -> Result<String, AuthError>;

    /// Verify a token and return its claims.
    fn decode(&self, token: &str) -> Result<SessionClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a fresh random salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Server-side session registry.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Session);

    /// Look up a live session. Expired sessions are never returned.
    async fn get(&self, id: Uuid) -> Option<Session>;

    /// Remove a session; removing an unknown id is not an error.
    async fn remove(&self, id: Uuid);
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailExists,

    #[error("No account with that email")]
    NoSuchEmail,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}
