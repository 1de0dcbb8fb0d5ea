//! Permission entity model
//!
//! A permission is a named capability string of the form
//! `{noun}.{action}[.{scope}]`, e.g. `address.update.own`.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Dotted permission name (unique)
    #[sea_orm(unique)]
    pub name: String,

    /// Authentication guard the permission applies to
    pub guard_name: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
