//! Schema migrations for the blog database.

pub use sea_orm_migration::prelude::*;

mod m20240405_000001_create_users;
mod m20240405_000002_create_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240405_000001_create_users::Migration),
            Box::new(m20240405_000002_create_posts::Migration),
        ]
    }
}
