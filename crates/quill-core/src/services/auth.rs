//! Registration, login, logout and per-request identity resolution.

use std::sync::Arc;

use chrono::TimeDelta;

use crate::domain::{CurrentUser, NewUser, Session, User, mask_email};
use crate::ports::{AuthError, PasswordService, SessionStore, TokenService, UserRepository};

/// Registration input.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// A freshly started session: the user and the token to hand to the browser.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: User,
    pub token: String,
}

/// Session and credential manager.
pub struct AuthManager {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
    sessions: Arc<dyn SessionStore>,
    session_ttl: TimeDelta,
}

impl AuthManager {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
        sessions: Arc<dyn SessionStore>,
        session_ttl: TimeDelta,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
            sessions,
            session_ttl,
        }
    }

    /// Create an account and sign it in.
    ///
    /// The email is matched exactly as typed. A taken email is rejected
    /// before any hashing happens; a concurrent registration that slips past
    /// that check is still caught by the store's unique constraint.
    pub async fn register(&self, input: RegisterUser) -> Result<Authenticated, AuthError> {
        let masked = mask_email(&input.email);

        if self.users.find_by_email(&input.email).await?.is_some() {
            tracing::info!(user_email = %masked, "Registration rejected: email exists");
            return Err(AuthError::EmailExists);
        }

        let password_hash = self.passwords.hash(&input.password)?;

        let user = self
            .users
            .create(NewUser {
                email: input.email,
                name: input.name,
                password_hash,
            })
            .await
            .map_err(|e| {
                if e.is_constraint_on("email") {
                    AuthError::EmailExists
                } else {
                    AuthError::Repository(e)
                }
            })?;

        tracing::info!(user_id = user.id, user_email = %masked, "User registered");
        self.start_session(user).await
    }

    /// Verify credentials and start a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Authenticated, AuthError> {
        let masked = mask_email(email);

        let Some(user) = self.users.find_by_email(email).await? else {
            tracing::info!(user_email = %masked, "Login failed: no such email");
            return Err(AuthError::NoSuchEmail);
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            tracing::info!(user_id = user.id, "Login failed: wrong password");
            return Err(AuthError::WrongPassword);
        }

        tracing::info!(user_id = user.id, "User logged in");
        self.start_session(user).await
    }

    /// End the session named by `token`, if any. Always succeeds.
    pub async fn logout(&self, token: Option<&str>) {
        let Some(token) = token else {
            return;
        };

        match self.tokens.decode(token) {
            Ok(claims) => {
                self.sessions.remove(claims.session_id).await;
                tracing::info!(user_id = claims.user_id, "User logged out");
            }
            Err(e) => tracing::debug!(error = %e, "Logout with unusable token"),
        }
    }

    /// Resolve the acting identity for a request.
    ///
    /// Never fails: a missing, forged, expired or revoked token, or a session
    /// whose user no longer resolves, all yield `CurrentUser::Anonymous`.
    pub async fn current_user(&self, token: Option<&str>) -> CurrentUser {
        let Some(token) = token else {
            return CurrentUser::Anonymous;
        };

        let claims = match self.tokens.decode(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring session token");
                return CurrentUser::Anonymous;
            }
        };

        let Some(session) = self.sessions.get(claims.session_id).await else {
            return CurrentUser::Anonymous;
        };

        if session.user_id != claims.user_id {
            tracing::warn!(
                session_id = %session.id,
                "Session token names a different user than the stored session"
            );
            return CurrentUser::Anonymous;
        }

        match self.users.find_by_id(session.user_id).await {
            Ok(Some(user)) => CurrentUser::Authenticated(user),
            Ok(None) => CurrentUser::Anonymous,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load session user");
                CurrentUser::Anonymous
            }
        }
    }

    async fn start_session(&self, user: User) -> Result<Authenticated, AuthError> {
        let session = Session::start(user.id, self.session_ttl);
        let token = self.tokens.issue(&session)?;
        self.sessions.insert(session).await;

        Ok(Authenticated { user, token })
    }
}
