//! Migration to create the workforce tables.
//!
//! Creates `employees`, `employee_notes` and `employee_benefits`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::UserId).integer().null())
                    .col(
                        ColumnDef::new(Employees::EmployeeNumber)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::FirstName).text().not_null())
                    .col(ColumnDef::new(Employees::LastName).text().not_null())
                    .col(
                        ColumnDef::new(Employees::Email)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::Department).text().not_null())
                    .col(ColumnDef::new(Employees::Position).text().not_null())
                    .col(ColumnDef::new(Employees::EmploymentType).text().not_null())
                    .col(ColumnDef::new(Employees::HiredOn).date().not_null())
                    .col(
                        ColumnDef::new(Employees::SalaryCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::Status).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_user_id")
                            .from(Employees::Table, Employees::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeNotes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmployeeNotes::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(EmployeeNotes::AuthorId).integer().null())
                    .col(ColumnDef::new(EmployeeNotes::NoteType).text().not_null())
                    .col(ColumnDef::new(EmployeeNotes::Body).text().not_null())
                    .col(
                        ColumnDef::new(EmployeeNotes::IsPrivate)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(EmployeeNotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_notes_employee_id")
                            .from(EmployeeNotes::Table, EmployeeNotes::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_notes_author_id")
                            .from(EmployeeNotes::Table, EmployeeNotes::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeBenefits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeBenefits::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmployeeBenefits::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeBenefits::BenefitType)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeBenefits::ProviderName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeBenefits::CoverageLevel)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmployeeBenefits::Status).text().not_null())
                    .col(
                        ColumnDef::new(EmployeeBenefits::MonthlyCostCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeBenefits::EmployerContributionCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeBenefits::EmployeeContributionCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmployeeBenefits::StartsOn).date().not_null())
                    .col(ColumnDef::new(EmployeeBenefits::EndsOn).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_benefits_employee_id")
                            .from(EmployeeBenefits::Table, EmployeeBenefits::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeBenefits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeeNotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    UserId,
    EmployeeNumber,
    FirstName,
    LastName,
    Email,
    Department,
    Position,
    EmploymentType,
    HiredOn,
    SalaryCents,
    Status,
}

#[derive(DeriveIden)]
enum EmployeeNotes {
    Table,
    Id,
    EmployeeId,
    AuthorId,
    NoteType,
    Body,
    IsPrivate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EmployeeBenefits {
    Table,
    Id,
    EmployeeId,
    BenefitType,
    ProviderName,
    CoverageLevel,
    Status,
    MonthlyCostCents,
    EmployerContributionCents,
    EmployeeContributionCents,
    StartsOn,
    EndsOn,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
