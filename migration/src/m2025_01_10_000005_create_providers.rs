//! Migration to create the supplier tables.
//!
//! Creates `providers` (suppliers of catalog goods) and their
//! `provider_contracts`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Providers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Providers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Providers::Code).text().not_null().unique_key())
                    .col(ColumnDef::new(Providers::Name).text().not_null())
                    .col(ColumnDef::new(Providers::ContactEmail).text().not_null())
                    .col(ColumnDef::new(Providers::Phone).text().null())
                    .col(ColumnDef::new(Providers::Country).text().not_null())
                    .col(ColumnDef::new(Providers::Rating).double().not_null())
                    .col(
                        ColumnDef::new(Providers::Status)
                            .text()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Providers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProviderContracts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProviderContracts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProviderContracts::ProviderId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProviderContracts::ContractNumber)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ProviderContracts::StartsOn).date().not_null())
                    .col(ColumnDef::new(ProviderContracts::EndsOn).date().not_null())
                    .col(
                        ColumnDef::new(ProviderContracts::ValueCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProviderContracts::PaymentTerms)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProviderContracts::Status).text().not_null())
                    .col(
                        ColumnDef::new(ProviderContracts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_contracts_provider_id")
                            .from(ProviderContracts::Table, ProviderContracts::ProviderId)
                            .to(Providers::Table, Providers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProviderContracts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Providers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Providers {
    Table,
    Id,
    Code,
    Name,
    ContactEmail,
    Phone,
    Country,
    Rating,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProviderContracts {
    Table,
    Id,
    ProviderId,
    ContractNumber,
    StartsOn,
    EndsOn,
    ValueCents,
    PaymentTerms,
    Status,
    CreatedAt,
}
