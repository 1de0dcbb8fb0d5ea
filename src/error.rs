//! # Error Handling
//!
//! Errors raised while validating seed data or writing it to the database.
//! Missing prerequisite rows are not errors: seeders report them as a
//! skipped outcome instead.

use thiserror::Error;

use crate::cache::CacheError;

/// Convenience alias used throughout the seeders.
pub type SeedResult<T> = Result<T, SeedError>;

/// Errors that abort a seed run
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("permission '{permission}' is not a valid `{noun}.<action>[.<scope>]` name")]
    InvalidPermissionName { noun: String, permission: String },

    #[error("permission '{permission}' is declared more than once")]
    DuplicatePermission { permission: String },

    #[error("role '{role}' references undeclared permission '{permission}'")]
    UndeclaredPermission { role: String, permission: String },

    #[error("weighted table '{table}' is empty or has a zero total weight")]
    EmptyWeightTable { table: &'static str },

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("unknown seeder '{0}'")]
    UnknownSeeder(String),

    #[error("refusing to seed profile '{profile}'; set STOREFRONT_ALLOW_PRODUCTION=true")]
    ProductionGuard { profile: String },

    #[error("{entity} '{key}' was not persisted")]
    NotPersisted { entity: &'static str, key: String },
}

/// Returns true when the database rejected a write because of a unique
/// constraint.
pub fn is_unique_violation(error: &sea_orm::DbErr) -> bool {
    use sea_orm::RuntimeErr;

    const PG_UNIQUE: &str = "23505";
    const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];

    let runtime_err = match error {
        sea_orm::DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | sea_orm::DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_unique_violation() {
        return true;
    }

    if let Some(code) = db_error.code() {
        let code_str = code.as_ref();
        return code_str == PG_UNIQUE || SQLITE_DUPLICATE_CODES.contains(&code_str);
    }

    false
}
