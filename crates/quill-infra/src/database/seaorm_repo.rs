//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use quill_core::domain::{NewPost, NewUser, Post, User, mask_email};
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::errors::{query_error, write_error};
use super::seaorm_base::SeaOrmBaseRepository;

/// SeaORM user repository.
pub type SeaOrmUserRepository = SeaOrmBaseRepository<UserEntity>;

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(new_user)
            .insert(self.db.as_ref())
            .await
            .map_err(|e| write_error(e, &["email"]))?;

        Ok(model.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(new_post)
            .insert(self.db.as_ref())
            .await
            .map_err(|e| write_error(e, &["title"]))?;

        Ok(model.into())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, updated: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(updated)
            .update(self.db.as_ref())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                other => write_error(other, &["title"]),
            })?;

        Ok(model.into())
    }
}
