//! Employee benefit enrolment entity model
//!
//! Monthly cost is split into employer and employee contributions which
//! always add up to the cost.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employee_benefits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub employee_id: i32,

    pub benefit_type: String,

    pub provider_name: String,

    pub coverage_level: String,

    pub status: String,

    pub monthly_cost_cents: i64,

    pub employer_contribution_cents: i64,

    pub employee_contribution_cents: i64,

    pub starts_on: Date,

    pub ends_on: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_delete = "Cascade"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
