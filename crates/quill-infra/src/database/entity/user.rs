//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for quill_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
        }
    }
}

/// Insert model; the id is left to the database sequence.
impl From<quill_core::domain::NewUser> for ActiveModel {
    fn from(user: quill_core::domain::NewUser) -> Self {
        Self {
            id: NotSet,
            email: Set(user.email),
            name: Set(user.name),
            password_hash: Set(user.password_hash),
        }
    }
}
