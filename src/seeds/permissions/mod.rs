//! RBAC permission matrices
//!
//! Each submodule declares one [`PermissionMatrix`]: the dotted permission
//! names for a domain noun and the roles that receive subsets of them.
//! Applying a matrix upserts the permissions and roles, then assigns each
//! role its subset either destructively ([`Assignment::Sync`]) or additively
//! ([`Assignment::Give`]).

pub mod address;
pub mod brand;
pub mod category;
pub mod customer;
pub mod customer_preference;
pub mod employee;
pub mod employee_benefit;
pub mod employee_note;
pub mod order;
pub mod order_item;
pub mod product;
pub mod provider;
pub mod provider_contract;
pub mod user;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use super::{SeedContext, SeedOutcome, Seeder};
use crate::error::{SeedError, SeedResult};
use crate::repositories::{PermissionRepository, RoleRepository};

pub const SUPER_ADMIN: &str = "super-admin";
pub const ADMIN: &str = "admin";
pub const STAFF: &str = "staff";
pub const CUSTOMER: &str = "customer";

/// Roles created by the core role seeder and shared by every matrix
pub const SHARED_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, STAFF, CUSTOMER];

static PERMISSION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z-]*(\.[a-z][a-z-]*){1,2}$").expect("permission name pattern is valid")
});

/// Every matrix shipped with the crate, in seeding order
pub static MATRICES: &[&PermissionMatrix] = &[
    &user::MATRIX,
    &category::MATRIX,
    &brand::MATRIX,
    &product::MATRIX,
    &customer::MATRIX,
    &address::MATRIX,
    &customer_preference::MATRIX,
    &provider::MATRIX,
    &provider_contract::MATRIX,
    &employee::MATRIX,
    &employee_note::MATRIX,
    &employee_benefit::MATRIX,
    &order::MATRIX,
    &order_item::MATRIX,
];

/// How a role's permission subset is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// Replace the role's permissions with exactly the subset
    Sync,
    /// Add the subset, keeping permissions granted elsewhere
    Give,
}

/// What to do when the role row does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTarget {
    Upsert,
    /// Skip the grant with a warning; the role is owned by another seeder
    ExistingOnly,
}

/// Subset of the matrix's permissions granted to a role
#[derive(Debug, Clone, Copy)]
pub enum Grant {
    All,
    Only(&'static [&'static str]),
    AllExcept(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct RoleGrant {
    pub role: &'static str,
    pub assignment: Assignment,
    pub target: RoleTarget,
    pub grant: Grant,
}

impl RoleGrant {
    pub const fn sync(role: &'static str, grant: Grant) -> Self {
        Self {
            role,
            assignment: Assignment::Sync,
            target: RoleTarget::Upsert,
            grant,
        }
    }

    pub const fn give(role: &'static str, grant: Grant) -> Self {
        Self {
            role,
            assignment: Assignment::Give,
            target: RoleTarget::Upsert,
            grant,
        }
    }

    /// Every permission of the matrix, if `super-admin` has been created.
    pub const fn super_admin() -> Self {
        Self {
            role: SUPER_ADMIN,
            assignment: Assignment::Give,
            target: RoleTarget::ExistingOnly,
            grant: Grant::All,
        }
    }

    pub const fn admin(grant: Grant) -> Self {
        Self {
            role: ADMIN,
            assignment: Assignment::Give,
            target: RoleTarget::ExistingOnly,
            grant,
        }
    }
}

/// Permissions for one domain noun and the roles built from them
#[derive(Debug)]
pub struct PermissionMatrix {
    /// Seeder name, e.g. `address-permissions`
    pub seeder: &'static str,
    pub noun: &'static str,
    pub permissions: &'static [&'static str],
    pub roles: &'static [RoleGrant],
}

/// Row counts produced by applying a matrix
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatrixSummary {
    pub permissions_created: u64,
    pub roles_created: u64,
    pub links_written: u64,
    pub roles_skipped: Vec<&'static str>,
}

impl MatrixSummary {
    pub fn inserted(&self) -> u64 {
        self.permissions_created + self.roles_created + self.links_written
    }
}

impl PermissionMatrix {
    /// Checks names, duplicates and role subsets before anything is written.
    pub fn validate(&self) -> SeedResult<()> {
        let prefix = format!("{}.", self.noun);
        let mut seen = HashSet::with_capacity(self.permissions.len());

        for permission in self.permissions {
            if !PERMISSION_NAME.is_match(permission) || !permission.starts_with(&prefix) {
                return Err(SeedError::InvalidPermissionName {
                    noun: self.noun.to_string(),
                    permission: permission.to_string(),
                });
            }
            if !seen.insert(*permission) {
                return Err(SeedError::DuplicatePermission {
                    permission: permission.to_string(),
                });
            }
        }

        for grant in self.roles {
            let listed = match grant.grant {
                Grant::All => continue,
                Grant::Only(listed) | Grant::AllExcept(listed) => listed,
            };
            if let Some(unknown) = listed.iter().find(|name| !seen.contains(*name)) {
                return Err(SeedError::UndeclaredPermission {
                    role: grant.role.to_string(),
                    permission: unknown.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Resolves a grant to permission names, in declaration order.
    pub fn permissions_for(&self, grant: &RoleGrant) -> Vec<&'static str> {
        match grant.grant {
            Grant::All => self.permissions.to_vec(),
            Grant::Only(listed) => self
                .permissions
                .iter()
                .copied()
                .filter(|name| listed.contains(name))
                .collect(),
            Grant::AllExcept(excluded) => self
                .permissions
                .iter()
                .copied()
                .filter(|name| !excluded.contains(name))
                .collect(),
        }
    }

    /// Roles in this matrix that are assigned with [`Assignment::Sync`]
    pub fn synced_roles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.roles
            .iter()
            .filter(|grant| grant.assignment == Assignment::Sync)
            .map(|grant| grant.role)
    }

    /// Upserts the permissions and roles and assigns every grant.
    pub async fn apply(&self, ctx: &SeedContext) -> SeedResult<MatrixSummary> {
        self.validate()?;

        let permissions = PermissionRepository::new(ctx.db.clone());
        let roles = RoleRepository::new(ctx.db.clone());
        let mut summary = MatrixSummary::default();

        let mut ids: HashMap<&'static str, i32> = HashMap::with_capacity(self.permissions.len());
        for &name in self.permissions {
            let (permission, created) = permissions.first_or_create(name).await?;
            if created {
                summary.permissions_created += 1;
            }
            ids.insert(name, permission.id);
        }

        for grant in self.roles {
            let role = match grant.target {
                RoleTarget::Upsert => {
                    let (role, created) = roles.first_or_create(grant.role).await?;
                    if created {
                        summary.roles_created += 1;
                    }
                    role
                }
                RoleTarget::ExistingOnly => match roles.find_by_name(grant.role).await? {
                    Some(role) => role,
                    None => {
                        warn!(
                            "Role '{}' not found, skipping {} permissions",
                            grant.role, self.noun
                        );
                        summary.roles_skipped.push(grant.role);
                        continue;
                    }
                },
            };

            let wanted = self
                .permissions_for(grant)
                .into_iter()
                .map(|name| {
                    ids.get(name).copied().ok_or_else(|| SeedError::NotPersisted {
                        entity: "permission",
                        key: name.to_string(),
                    })
                })
                .collect::<SeedResult<Vec<i32>>>()?;

            let written = match grant.assignment {
                Assignment::Sync => roles.sync_permissions(role.id, &wanted).await?,
                Assignment::Give => roles.give_permissions(role.id, &wanted).await?,
            };
            debug!(
                role = grant.role,
                assignment = ?grant.assignment,
                permissions = wanted.len(),
                written,
                "assigned role permissions"
            );
            summary.links_written += written;
        }

        Ok(summary)
    }
}

/// Seeder wrapper around a static matrix
#[derive(Debug, Clone, Copy)]
pub struct PermissionSeeder {
    matrix: &'static PermissionMatrix,
}

impl PermissionSeeder {
    pub fn new(matrix: &'static PermissionMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &'static PermissionMatrix {
        self.matrix
    }
}

#[async_trait]
impl Seeder for PermissionSeeder {
    fn name(&self) -> &'static str {
        self.matrix.seeder
    }

    fn prerequisites(&self) -> &'static [&'static str] {
        &["roles"]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let summary = self.matrix.apply(ctx).await?;
        Ok(SeedOutcome::seeded(summary.inserted()))
    }
}

/// One seeder per shipped matrix
pub fn permission_seeders() -> Vec<Box<dyn Seeder>> {
    MATRICES
        .iter()
        .map(|&matrix| Box::new(PermissionSeeder::new(matrix)) as Box<dyn Seeder>)
        .collect()
}
