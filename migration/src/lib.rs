//! Database migrations for the storefront seeders.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_01_10_000001_create_access_control;
mod m2025_01_10_000002_create_users;
mod m2025_01_10_000003_create_catalog;
mod m2025_01_10_000004_create_customers;
mod m2025_01_10_000005_create_providers;
mod m2025_01_10_000006_create_workforce;
mod m2025_01_10_000007_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_01_10_000001_create_access_control::Migration),
            Box::new(m2025_01_10_000002_create_users::Migration),
            Box::new(m2025_01_10_000003_create_catalog::Migration),
            Box::new(m2025_01_10_000004_create_customers::Migration),
            Box::new(m2025_01_10_000005_create_providers::Migration),
            Box::new(m2025_01_10_000006_create_workforce::Migration),
            Box::new(m2025_01_10_000007_create_orders::Migration),
        ]
    }
}
