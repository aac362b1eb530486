//! Post lifecycle: read for everyone, write for the admin.

use std::sync::Arc;

use chrono::Local;

use super::gate::require_admin;
use crate::domain::{CurrentUser, NewPost, Post, PostDraft, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::{HtmlSanitizer, PostRepository};

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    sanitizer: Arc<dyn HtmlSanitizer>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, sanitizer: Arc<dyn HtmlSanitizer>) -> Self {
        Self { posts, sanitizer }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list().await?)
    }

    pub async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// Publish a new post dated today.
    pub async fn create(&self, actor: &CurrentUser, draft: PostDraft) -> Result<Post, DomainError> {
        require_admin(actor)?;
        check_required(&draft)?;

        let title = draft.title.clone();
        let post = self
            .posts
            .create(NewPost {
                title: draft.title,
                subtitle: draft.subtitle,
                author: draft.author,
                date: Local::now().date_naive(),
                body: self.sanitizer.sanitize(&draft.body),
                img_url: draft.img_url,
            })
            .await
            .map_err(|e| duplicate_title(e, &title))?;

        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Fetch a post for the edit form.
    pub async fn load_for_edit(&self, actor: &CurrentUser, id: PostId) -> Result<Post, DomainError> {
        require_admin(actor)?;
        self.get(id).await
    }

    /// Replace every field except the id and the publication date.
    pub async fn edit(
        &self,
        actor: &CurrentUser,
        id: PostId,
        draft: PostDraft,
    ) -> Result<Post, DomainError> {
        require_admin(actor)?;
        let existing = self.get(id).await?;
        check_required(&draft)?;

        let title = draft.title.clone();
        let post = self
            .posts
            .update(Post {
                id: existing.id,
                title: draft.title,
                subtitle: draft.subtitle,
                author: draft.author,
                date: existing.date,
                body: self.sanitizer.sanitize(&draft.body),
                img_url: draft.img_url,
            })
            .await
            .map_err(|e| match e {
                RepoError::NotFound => DomainError::NotFound {
                    entity_type: "Post",
                    id,
                },
                other => duplicate_title(other, &title),
            })?;

        tracing::info!(post_id = post.id, "Post updated");
        Ok(post)
    }

    /// Permanently delete a post.
    pub async fn delete(&self, actor: &CurrentUser, id: PostId) -> Result<(), DomainError> {
        require_admin(actor)?;

        self.posts.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Post",
                id,
            },
            other => other.into(),
        })?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}

fn check_required(draft: &PostDraft) -> Result<(), DomainError> {
    let missing = draft.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "Required fields missing: {}",
            missing.join(", ")
        )))
    }
}

fn duplicate_title(err: RepoError, title: &str) -> DomainError {
    if err.is_constraint_on("title") {
        DomainError::Validation(format!("A post titled \"{title}\" already exists."))
    } else {
        err.into()
    }
}
