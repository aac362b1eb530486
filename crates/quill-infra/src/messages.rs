//! Message sink that records submissions in the log.

use async_trait::async_trait;

use quill_core::domain::{Comment, ContactMessage, mask_email};
use quill_core::error::RepoError;
use quill_core::ports::MessageSink;

/// Writes contact messages and comments to the tracing log and keeps
/// nothing.
#[derive(Debug, Default)]
pub struct LogMessageSink;

#[async_trait]
impl MessageSink for LogMessageSink {
    async fn contact(&self, message: ContactMessage) -> Result<(), RepoError> {
        tracing::info!(
            from = %message.name,
            email = %mask_email(&message.email),
            length = message.message.len(),
            "Contact message received"
        );
        Ok(())
    }

    async fn comment(&self, comment: Comment) -> Result<(), RepoError> {
        tracing::info!(
            post_id = comment.post_id,
            author_id = comment.author_id,
            length = comment.body.len(),
            "Comment received"
        );
        Ok(())
    }
}
