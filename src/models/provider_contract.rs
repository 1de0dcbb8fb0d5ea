//! Provider contract entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "provider_contracts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub provider_id: i32,

    #[sea_orm(unique)]
    pub contract_number: String,

    pub starts_on: Date,

    pub ends_on: Date,

    pub value_cents: i64,

    /// net-15 | net-30 | net-60 | prepaid
    pub payment_terms: String,

    /// pending | active | expired
    pub status: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::provider::Entity",
        from = "Column::ProviderId",
        to = "super::provider::Column::Id",
        on_delete = "Cascade"
    )]
    Provider,
}

impl Related<super::provider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
