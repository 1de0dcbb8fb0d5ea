//! Migration to create the customer tables.
//!
//! Creates `customers`, their `addresses` and per-customer
//! `customer_preferences` (one row per preference key).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::PublicId).uuid().not_null())
                    .col(ColumnDef::new(Customers::FirstName).text().not_null())
                    .col(ColumnDef::new(Customers::LastName).text().not_null())
                    .col(
                        ColumnDef::new(Customers::Email)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Customers::Phone).text().null())
                    .col(ColumnDef::new(Customers::CustomerType).text().not_null())
                    .col(ColumnDef::new(Customers::Status).text().not_null())
                    .col(
                        ColumnDef::new(Customers::LoyaltyPoints)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Customers::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Addresses::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Addresses::Kind).text().not_null())
                    .col(ColumnDef::new(Addresses::Line1).text().not_null())
                    .col(ColumnDef::new(Addresses::Line2).text().null())
                    .col(ColumnDef::new(Addresses::City).text().not_null())
                    .col(ColumnDef::new(Addresses::Region).text().not_null())
                    .col(ColumnDef::new(Addresses::PostalCode).text().not_null())
                    .col(ColumnDef::new(Addresses::Country).text().not_null())
                    .col(
                        ColumnDef::new(Addresses::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_customer_id")
                            .from(Addresses::Table, Addresses::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CustomerPreferences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerPreferences::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CustomerPreferences::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerPreferences::Category)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CustomerPreferences::Key).text().not_null())
                    .col(ColumnDef::new(CustomerPreferences::Value).json().not_null())
                    .col(
                        ColumnDef::new(CustomerPreferences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_preferences_customer_id")
                            .from(CustomerPreferences::Table, CustomerPreferences::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customer_preferences_customer_key")
                    .table(CustomerPreferences::Table)
                    .col(CustomerPreferences::CustomerId)
                    .col(CustomerPreferences::Key)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_customer_preferences_customer_key")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CustomerPreferences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    PublicId,
    FirstName,
    LastName,
    Email,
    Phone,
    CustomerType,
    Status,
    LoyaltyPoints,
    RegisteredAt,
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    CustomerId,
    Kind,
    Line1,
    Line2,
    City,
    Region,
    PostalCode,
    Country,
    IsDefault,
}

#[derive(DeriveIden)]
enum CustomerPreferences {
    Table,
    Id,
    CustomerId,
    Category,
    Key,
    Value,
    UpdatedAt,
}
