//! Provider entity model
//!
//! This module contains the SeaORM entity model for the providers table,
//! the suppliers the storefront buys catalog goods from.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Provider entity representing a supplier
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "providers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Short unique supplier code, e.g. `PRV-ACME`
    #[sea_orm(unique)]
    pub code: String,

    pub name: String,

    pub contact_email: String,

    pub phone: Option<String>,

    pub country: String,

    /// Supplier rating between 1.0 and 5.0
    pub rating: f64,

    /// active | on-hold | inactive
    pub status: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
