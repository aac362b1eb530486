//! In-memory session store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Session;
use quill_core::ports::SessionStore;

/// Sessions kept in a HashMap behind an async RwLock.
///
/// Sessions are lost on process restart, which signs every visitor out.
pub struct InMemorySessionStore {
    store: RwLock<HashMap<Uuid, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Drop every expired session. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|_, session| !session.is_expired());
        before - store.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) {
        let mut store = self.store.write().await;
        store.insert(session.id, session);
    }

    async fn get(&self, id: Uuid) -> Option<Session> {
        let store = self.store.read().await;
        let session = store.get(&id)?;

        if session.is_expired() {
            drop(store);
            self.store.write().await.remove(&id);
            return None;
        }

        Some(session.clone())
    }

    async fn remove(&self, id: Uuid) {
        self.store.write().await.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemorySessionStore::new();
        let session = Session::start(1, TimeDelta::hours(1));
        store.insert(session.clone()).await;

        assert_eq!(store.get(session.id).await, Some(session));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemorySessionStore::new();
        let session = Session::start(1, TimeDelta::hours(1));
        store.insert(session.clone()).await;
        store.remove(session.id).await;

        assert_eq!(store.get(session.id).await, None);
        // Removing twice is fine.
        store.remove(session.id).await;
    }

    #[tokio::test]
    async fn test_expired_session_not_returned() {
        let store = InMemorySessionStore::new();
        let session = Session::start(1, TimeDelta::seconds(-1));
        store.insert(session.clone()).await;

        assert_eq!(store.get(session.id).await, None);
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let store = InMemorySessionStore::new();
        store.insert(Session::start(1, TimeDelta::seconds(-1))).await;
        store.insert(Session::start(2, TimeDelta::hours(1))).await;

        assert_eq!(store.purge_expired().await, 1);
    }
}
