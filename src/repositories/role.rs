//! Role repository for database operations
//!
//! Encapsulates SeaORM operations for roles, their permission sets and
//! their assignment to users.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use super::permission::DEFAULT_GUARD;
use crate::error::{SeedError, SeedResult, is_unique_violation};
use crate::models::permission::{self, Entity as Permission};
use crate::models::role::{self, Entity as Role};
use crate::models::role_permission::{self, Entity as RolePermission};
use crate::models::user_role::{self, Entity as UserRole};

/// Repository for role database operations
#[derive(Debug, Clone)]
pub struct RoleRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl RoleRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds a role by its unique name
    pub async fn find_by_name(&self, name: &str) -> SeedResult<Option<role::Model>> {
        let found = Role::find()
            .filter(role::Column::Name.eq(name))
            .one(&*self.db)
            .await?;
        Ok(found)
    }

    /// Returns the role named `name`, creating it if absent.
    ///
    /// The boolean is true when a row was inserted.
    pub async fn first_or_create(&self, name: &str) -> SeedResult<(role::Model, bool)> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok((existing, false));
        }

        let now = Utc::now();
        let am = role::ActiveModel {
            name: Set(name.to_string()),
            guard_name: Set(DEFAULT_GUARD.to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        match am.insert(&*self.db).await {
            Ok(created) => Ok((created, true)),
            Err(err) if is_unique_violation(&err) => {
                let existing =
                    self.find_by_name(name)
                        .await?
                        .ok_or_else(|| SeedError::NotPersisted {
                            entity: "role",
                            key: name.to_string(),
                        })?;
                Ok((existing, false))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Names of the permissions currently granted to the role
    pub async fn permission_names(&self, role_id: i32) -> SeedResult<BTreeSet<String>> {
        let ids: Vec<i32> = RolePermission::find()
            .filter(role_permission::Column::RoleId.eq(role_id))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|link| link.permission_id)
            .collect();

        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }

        let names = Permission::find()
            .filter(permission::Column::Id.is_in(ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();
        Ok(names)
    }

    /// Replaces the role's permission set with exactly `permission_ids`.
    ///
    /// Runs in one transaction and only touches links that differ: stale
    /// ones are deleted and missing ones inserted. Returns the number of
    /// links newly inserted, so an unchanged role reports 0.
    pub async fn sync_permissions(&self, role_id: i32, permission_ids: &[i32]) -> SeedResult<u64> {
        let wanted: BTreeSet<i32> = permission_ids.iter().copied().collect();

        let txn = self.db.begin().await?;

        let current: HashSet<i32> = RolePermission::find()
            .filter(role_permission::Column::RoleId.eq(role_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|link| link.permission_id)
            .collect();

        if current.iter().any(|id| !wanted.contains(id)) {
            let removed = RolePermission::delete_many()
                .filter(role_permission::Column::RoleId.eq(role_id))
                .filter(role_permission::Column::PermissionId.is_not_in(wanted.iter().copied()))
                .exec(&txn)
                .await?;
            log::debug!(
                "Removed {} stale permissions from role {}",
                removed.rows_affected,
                role_id
            );
        }

        let links: Vec<role_permission::ActiveModel> = wanted
            .iter()
            .filter(|id| !current.contains(id))
            .map(|permission_id| role_permission::ActiveModel {
                role_id: Set(role_id),
                permission_id: Set(*permission_id),
            })
            .collect();

        let written = if links.is_empty() {
            0
        } else {
            RolePermission::insert_many(links)
                .exec_without_returning(&txn)
                .await?
        };

        txn.commit().await?;
        Ok(written)
    }

    /// Adds `permission_ids` to the role, keeping whatever it already holds.
    ///
    /// Returns the number of links that were newly written.
    pub async fn give_permissions(&self, role_id: i32, permission_ids: &[i32]) -> SeedResult<u64> {
        let existing: HashSet<i32> = RolePermission::find()
            .filter(role_permission::Column::RoleId.eq(role_id))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|link| link.permission_id)
            .collect();

        let missing: BTreeSet<i32> = permission_ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();

        if missing.is_empty() {
            return Ok(0);
        }

        let links: Vec<role_permission::ActiveModel> = missing
            .into_iter()
            .map(|permission_id| role_permission::ActiveModel {
                role_id: Set(role_id),
                permission_id: Set(permission_id),
            })
            .collect();

        let written = RolePermission::insert_many(links)
            .exec_without_returning(&*self.db)
            .await?;
        Ok(written)
    }

    /// Assigns the role to a user unless the user already holds it.
    ///
    /// Returns true when a new assignment was written.
    pub async fn assign_to_user(&self, user_id: i32, role_id: i32) -> SeedResult<bool> {
        let existing = UserRole::find_by_id((user_id, role_id))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        UserRole::insert(user_role::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
        })
        .exec_without_returning(&*self.db)
        .await?;
        Ok(true)
    }

    /// Ids of the users holding the role
    pub async fn user_ids_with_role(&self, role_id: i32) -> SeedResult<Vec<i32>> {
        let ids = UserRole::find()
            .filter(user_role::Column::RoleId.eq(role_id))
            .order_by_asc(user_role::Column::UserId)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|link| link.user_id)
            .collect();
        Ok(ids)
    }

    /// Names of the roles assigned to a user
    pub async fn role_names_for_user(&self, user_id: i32) -> SeedResult<BTreeSet<String>> {
        let ids: Vec<i32> = UserRole::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|link| link.role_id)
            .collect();

        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }

        let names = Role::find()
            .filter(role::Column::Id.is_in(ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|r| r.name)
            .collect();
        Ok(names)
    }
}
