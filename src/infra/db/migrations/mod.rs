//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20220301_000001_create_job_offers_table;
mod m20220301_000002_create_transport_offers_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220301_000001_create_job_offers_table::Migration),
            Box::new(m20220301_000002_create_transport_offers_table::Migration),
        ]
    }
}
