//! Back-office user seeding
//!
//! Creates the owner, admin and staff accounts from [`USERS`] by email and
//! assigns their roles. A role that has not been seeded yet is skipped with a
//! warning instead of being created here.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use super::fixtures::USERS;
use super::{SeedContext, SeedOutcome, Seeder};
use crate::error::{SeedError, SeedResult, is_unique_violation};
use crate::models::user::{self, Entity as User};
use crate::repositories::RoleRepository;

pub struct UserSeeder;

async fn first_or_create_user(
    ctx: &SeedContext,
    name: &str,
    email: &str,
) -> SeedResult<(user::Model, bool)> {
    let find = || User::find().filter(user::Column::Email.eq(email)).one(&*ctx.db);

    if let Some(existing) = find().await? {
        return Ok((existing, false));
    }

    let am = user::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    match am.insert(&*ctx.db).await {
        Ok(created) => Ok((created, true)),
        Err(err) if is_unique_violation(&err) => {
            let existing = find().await?.ok_or_else(|| SeedError::NotPersisted {
                entity: "user",
                key: email.to_string(),
            })?;
            Ok((existing, false))
        }
        Err(err) => Err(err.into()),
    }
}

#[async_trait]
impl Seeder for UserSeeder {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let roles = RoleRepository::new(ctx.db.clone());
        let mut inserted = 0;

        for (name, email, role_names) in USERS {
            let (user, created) = first_or_create_user(ctx, name, email).await?;
            if created {
                log::info!("Created user: {}", email);
                inserted += 1;
            }

            for role_name in role_names.iter() {
                match roles.find_by_name(role_name).await? {
                    Some(role) => {
                        if roles.assign_to_user(user.id, role.id).await? {
                            inserted += 1;
                        }
                    }
                    None => {
                        log::warn!(
                            "Role '{}' not found, skipping assignment for {}",
                            role_name,
                            email
                        );
                    }
                }
            }
        }

        Ok(SeedOutcome::seeded(inserted))
    }
}
