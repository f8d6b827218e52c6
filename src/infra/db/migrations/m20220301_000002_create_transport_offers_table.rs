//! Migration: Create transport_offers table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransportOffers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TransportOffers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TransportOffers::UserId).string().not_null())
                    .col(ColumnDef::new(TransportOffers::Title).string_len(80).not_null())
                    .col(ColumnDef::new(TransportOffers::Description).text().not_null())
                    .col(ColumnDef::new(TransportOffers::ModifiedDate).date_time().not_null())
                    .col(ColumnDef::new(TransportOffers::OriginRegion).string_len(80).not_null())
                    .col(ColumnDef::new(TransportOffers::OriginCity).string_len(80).not_null())
                    .col(ColumnDef::new(TransportOffers::DestinationRegion).string_len(80).not_null())
                    .col(ColumnDef::new(TransportOffers::DestinationCity).string_len(80).not_null())
                    .col(ColumnDef::new(TransportOffers::Capacity).integer().not_null())
                    .col(ColumnDef::new(TransportOffers::TransportDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transport_offers_user_id")
                    .table(TransportOffers::Table)
                    .col(TransportOffers::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransportOffers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TransportOffers {
    Table,
    Id,
    UserId,
    Title,
    Description,
    ModifiedDate,
    OriginRegion,
    OriginCity,
    DestinationRegion,
    DestinationCity,
    Capacity,
    TransportDate,
}
