//! Create `song` table.
//! Ids are backend-assigned; clients never supply them on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(pk_auto(Song::Id))
                    .col(string_len(Song::Title, 256).not_null())
                    .col(string_len(Song::Artist, 256).not_null())
                    .col(timestamp_with_time_zone(Song::ReleaseDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Song::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Song {
    Table,
    Id,
    Title,
    Artist,
    ReleaseDate,
}
