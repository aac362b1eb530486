//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub subtitle: String,
    pub date: Date,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author: String,
    pub img_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            author: model.author,
            date: model.date,
            body: model.body,
            img_url: model.img_url,
        }
    }
}

/// Full-row model used for updates.
impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            subtitle: Set(post.subtitle),
            date: Set(post.date),
            body: Set(post.body),
            author: Set(post.author),
            img_url: Set(post.img_url),
        }
    }
}

/// Insert model; the id is left to the database sequence.
impl From<quill_core::domain::NewPost> for ActiveModel {
    fn from(post: quill_core::domain::NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            subtitle: Set(post.subtitle),
            date: Set(post.date),
            body: Set(post.body),
            author: Set(post.author),
            img_url: Set(post.img_url),
        }
    }
}
