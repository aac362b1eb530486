use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, PostId, User, UserId};
use crate::error::RepoError;

/// Generic repository trait shared by every entity store.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` when
    /// nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository. Email uniqueness is enforced by the store and reported
/// as `RepoError::Constraint("email")`.
#[async_trait]
pub trait UserRepository: BaseRepository<User, UserId> {
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    /// Find a user by exact (case-sensitive) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository. Title uniqueness is enforced by the store and reported
/// as `RepoError::Constraint("title")`.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// All posts, in id order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Overwrite the stored post with the same id.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;
}
