//! Schema for the catalog service.
//!
//! Tables are created `IF NOT EXISTS`; there is no data migration.

pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_users;
mod m20260105_000002_create_products;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_users::Migration),
            Box::new(m20260105_000002_create_products::Migration),
        ]
    }
}
