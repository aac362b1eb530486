use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post, PostId};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

struct Table {
    rows: Vec<Post>,
    next_id: PostId,
}

/// Post store enforcing unique titles.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn title_taken(rows: &[Post], title: &str, except: Option<PostId>) -> bool {
    rows.iter()
        .any(|p| p.title == title && Some(p.id) != except)
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);

        if table.rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        if title_taken(&table.rows, &post.title, None) {
            return Err(RepoError::Constraint("title".to_string()));
        }

        let created = Post {
            id: table.next_id,
            title: post.title,
            subtitle: post.subtitle,
            author: post.author,
            date: post.date,
            body: post.body,
            img_url: post.img_url,
        };
        table.next_id += 1;
        table.rows.push(created.clone());

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        if title_taken(&table.rows, &post.title, Some(post.id)) {
            return Err(RepoError::Constraint("title".to_string()));
        }

        let slot = table
            .rows
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;
        *slot = post.clone();

        Ok(post)
    }
}
