//! Permission repository for database operations
//!
//! Encapsulates SeaORM operations for the permissions table.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;

use crate::error::{SeedError, SeedResult, is_unique_violation};
use crate::models::permission::{self, Entity as Permission};

/// Guard every seeded permission and role is registered under
pub const DEFAULT_GUARD: &str = "web";

/// Repository for permission database operations
#[derive(Debug, Clone)]
pub struct PermissionRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl PermissionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds a permission by its unique name
    pub async fn find_by_name(&self, name: &str) -> SeedResult<Option<permission::Model>> {
        let found = Permission::find()
            .filter(permission::Column::Name.eq(name))
            .one(&*self.db)
            .await?;
        Ok(found)
    }

    /// Returns the permission named `name`, creating it if absent.
    ///
    /// The boolean is true when a row was inserted. A unique violation on
    /// insert means another writer created the row first; it is re-read.
    pub async fn first_or_create(&self, name: &str) -> SeedResult<(permission::Model, bool)> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok((existing, false));
        }

        let now = Utc::now();
        let am = permission::ActiveModel {
            name: Set(name.to_string()),
            guard_name: Set(DEFAULT_GUARD.to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        match am.insert(&*self.db).await {
            Ok(created) => Ok((created, true)),
            Err(err) if is_unique_violation(&err) => {
                log::debug!("Permission '{}' created concurrently, re-reading", name);
                let existing =
                    self.find_by_name(name)
                        .await?
                        .ok_or_else(|| SeedError::NotPersisted {
                            entity: "permission",
                            key: name.to_string(),
                        })?;
                Ok((existing, false))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Lists permissions whose name starts with `{noun}.`
    pub async fn list_for_noun(&self, noun: &str) -> SeedResult<Vec<permission::Model>> {
        let permissions = Permission::find()
            .filter(permission::Column::Name.starts_with(format!("{noun}.")))
            .order_by_asc(permission::Column::Name)
            .all(&*self.db)
            .await?;
        Ok(permissions)
    }
}
