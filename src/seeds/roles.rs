//! Core role seeding
//!
//! Creates the roles shared by every permission matrix. Matrices only add
//! permissions to `super-admin` and `admin` when those roles already exist,
//! so this seeder runs first.

use async_trait::async_trait;

use super::permissions::SHARED_ROLES;
use super::{SeedContext, SeedOutcome, Seeder};
use crate::error::SeedResult;
use crate::repositories::RoleRepository;

pub struct RoleSeeder;

#[async_trait]
impl Seeder for RoleSeeder {
    fn name(&self) -> &'static str {
        "roles"
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let repo = RoleRepository::new(ctx.db.clone());
        let mut created = 0;

        for name in SHARED_ROLES {
            let (_, inserted) = repo.first_or_create(name).await?;
            if inserted {
                log::info!("Created role: {}", name);
                created += 1;
            } else {
                log::debug!("Role '{}' already exists, skipping", name);
            }
        }

        Ok(SeedOutcome::seeded(created))
    }
}
