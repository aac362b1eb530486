use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(pk_auto(Posts::Id))
                    .col(string_len_uniq(Posts::Title, 250))
                    .col(string_len(Posts::Subtitle, 250))
                    .col(date(Posts::Date))
                    .col(text(Posts::Body))
                    .col(string_len(Posts::Author, 250))
                    .col(string_len(Posts::ImgUrl, 250))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Subtitle,
    Date,
    Body,
    Author,
    ImgUrl,
}
