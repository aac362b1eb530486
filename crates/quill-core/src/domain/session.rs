use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use super::UserId;

/// Server-tracked login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a new session for `user_id` that lives for `ttl`.
    pub fn start(user_id: UserId, ttl: TimeDelta) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
