//! Customer entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Externally visible identifier
    pub public_id: Uuid,

    pub first_name: String,

    pub last_name: String,

    #[sea_orm(unique)]
    pub email: String,

    pub phone: Option<String>,

    /// individual | business | wholesale | vip
    pub customer_type: String,

    /// active | inactive | suspended
    pub status: String,

    pub loyalty_points: i32,

    pub registered_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
