//! Contact-form messages and reader comments.

use std::sync::Arc;

use crate::domain::{Comment, ContactMessage, CurrentUser, PostId};
use crate::error::DomainError;
use crate::ports::{HtmlSanitizer, MessageSink, PostRepository};

pub struct InboxService {
    sink: Arc<dyn MessageSink>,
    posts: Arc<dyn PostRepository>,
    sanitizer: Arc<dyn HtmlSanitizer>,
}

impl InboxService {
    pub fn new(
        sink: Arc<dyn MessageSink>,
        posts: Arc<dyn PostRepository>,
        sanitizer: Arc<dyn HtmlSanitizer>,
    ) -> Self {
        Self {
            sink,
            posts,
            sanitizer,
        }
    }

    pub async fn contact(&self, message: ContactMessage) -> Result<(), DomainError> {
        Ok(self.sink.contact(message).await?)
    }

    /// Leave a comment on a post. Requires a signed-in reader.
    pub async fn comment(
        &self,
        actor: &CurrentUser,
        post_id: PostId,
        body: &str,
    ) -> Result<(), DomainError> {
        let author = actor.user().ok_or(DomainError::Unauthorized)?;

        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity_type: "Post",
                id: post_id,
            });
        }

        let body = self.sanitizer.sanitize(body);
        if body.trim().is_empty() {
            return Err(DomainError::Validation("Comment cannot be empty".to_string()));
        }

        self.sink
            .comment(Comment {
                post_id,
                author_id: author.id,
                body,
            })
            .await?;
        Ok(())
    }
}
