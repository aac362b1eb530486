use async_trait::async_trait;

use crate::domain::{Comment, ContactMessage};
use crate::error::RepoError;

/// Destination for reader submissions that the blog does not store itself.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn contact(&self, message: ContactMessage) -> Result<(), RepoError>;

    async fn comment(&self, comment: Comment) -> Result<(), RepoError>;
}
