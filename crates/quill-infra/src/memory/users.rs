use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewUser, User, UserId};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, UserRepository};

struct Table {
    rows: Vec<User>,
    next_id: UserId,
}

/// User store with store-assigned ids starting at 1.
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, UserId> for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn delete(&self, id: UserId) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|u| u.id != id);

        if table.rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        // Check and insert under one write lock so the email constraint holds
        // for concurrent registrations.
        let mut table = self.table.write().await;

        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("email".to_string()));
        }

        let created = User {
            id: table.next_id,
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
        };
        table.next_id += 1;
        table.rows.push(created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.email == email).cloned())
    }
}
