//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied, and seed contexts that are reproducible and do
//! not share the process-wide cache.

use anyhow::Result;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    Set, Statement,
};
use seeders::cache::CacheStore;
use seeders::config::SeedConfig;
use seeders::models::{customer, role};
use seeders::repositories::DEFAULT_GUARD;
use seeders::seeds::SeedContext;
use std::sync::Arc;

/// Sets up an in-memory SQLite database with all migrations applied.
///
/// # Returns
///
/// Returns a Result containing the database connection
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    // Create in-memory SQLite database
    let db = Database::connect("sqlite::memory:").await?;

    // Run all migrations
    Migrator::up(&db, None).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_string(),
    ))
    .await?;

    Ok(db)
}

/// Sets up an in-memory SQLite database with all migrations applied and returns an Arc.
#[allow(dead_code)]
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Small, fixed-seed volumes so full runs stay fast and deterministic.
#[allow(dead_code)]
pub fn test_seed_config() -> SeedConfig {
    SeedConfig {
        rng_seed: Some(42),
        customers: 12,
        products: 15,
        orders: 20,
        employees: 6,
        max_items_per_order: 4,
        notes_per_employee: 2,
        ..SeedConfig::default()
    }
}

/// A seed context over `db` with its own cache store.
#[allow(dead_code)]
pub fn test_context(db: Arc<DatabaseConnection>) -> SeedContext {
    SeedContext::new(db, test_seed_config()).with_cache(Arc::new(CacheStore::new(16)))
}

/// Fresh database plus a context over it.
#[allow(dead_code)]
pub async fn setup_test_context() -> Result<SeedContext> {
    let db = setup_test_db_arc().await?;
    Ok(test_context(db))
}

/// Inserts a role row directly for testing.
#[allow(dead_code)]
pub async fn insert_role(db: &DatabaseConnection, name: &str) -> Result<role::Model> {
    let now = Utc::now();
    let model = role::ActiveModel {
        name: Set(name.to_string()),
        guard_name: Set(DEFAULT_GUARD.to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Inserts a customer row directly for testing.
#[allow(dead_code)]
pub async fn insert_customer(db: &DatabaseConnection, email: &str) -> Result<customer::Model> {
    let model = customer::ActiveModel {
        public_id: Set(uuid::Uuid::new_v4()),
        first_name: Set("Test".to_string()),
        last_name: Set("Customer".to_string()),
        email: Set(email.to_string()),
        phone: Set(None),
        customer_type: Set("individual".to_string()),
        status: Set("active".to_string()),
        loyalty_points: Set(0),
        registered_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Row count of an entity's table.
#[allow(dead_code)]
pub async fn count<E>(db: &DatabaseConnection) -> Result<u64>
where
    E: EntityTrait,
    E::Model: Sync,
{
    Ok(E::find().count(db).await?)
}
