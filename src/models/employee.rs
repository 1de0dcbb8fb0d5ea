//! Employee entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Linked back-office account, if the employee has one
    pub user_id: Option<i32>,

    #[sea_orm(unique)]
    pub employee_number: String,

    pub first_name: String,

    pub last_name: String,

    #[sea_orm(unique)]
    pub email: String,

    pub department: String,

    pub position: String,

    /// full-time | part-time | contractor | intern
    pub employment_type: String,

    pub hired_on: Date,

    /// Annual salary in cents
    pub salary_cents: i64,

    /// active | on-leave | terminated
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
