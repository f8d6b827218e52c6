//! Migration: Create job_offers table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobOffers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobOffers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobOffers::UserId).string().not_null())
                    .col(ColumnDef::new(JobOffers::Title).string_len(80).not_null())
                    .col(ColumnDef::new(JobOffers::Description).text().not_null())
                    .col(ColumnDef::new(JobOffers::ModifiedDate).date_time().not_null())
                    .col(ColumnDef::new(JobOffers::Mode).string_len(16).not_null())
                    .col(ColumnDef::new(JobOffers::Region).string_len(80).not_null())
                    .col(ColumnDef::new(JobOffers::City).string_len(80).not_null())
                    .col(ColumnDef::new(JobOffers::Types).json().not_null())
                    .col(ColumnDef::new(JobOffers::Languages).json().not_null())
                    .to_owned(),
            )
            .await?;

        // Ownership lookups filter by user
        manager
            .create_index(
                Index::create()
                    .name("idx_job_offers_user_id")
                    .table(JobOffers::Table)
                    .col(JobOffers::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobOffers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum JobOffers {
    Table,
    Id,
    UserId,
    Title,
    Description,
    ModifiedDate,
    Mode,
    Region,
    City,
    Types,
    Languages,
}
