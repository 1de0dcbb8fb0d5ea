//! Supplier seeding
//!
//! Providers are first-or-created by code from [`PROVIDERS`]. Their
//! contracts are written inside a single transaction: on any error the whole
//! batch is rolled back, logged and re-raised.

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use super::fixtures::{PAYMENT_TERMS_WEIGHTS, PROVIDERS};
use super::sampling::{self, WeightedTable};
use super::{
    SeedContext, SeedOutcome, Seeder, already_seeded, insert_batched, missing_prerequisite,
    table_is_empty,
};
use crate::error::SeedResult;
use crate::models::provider::{self, Entity as Provider};
use crate::models::provider_contract::{self, Entity as ProviderContract};

/// Contract lengths in months
const CONTRACT_TERMS: &[i64] = &[6, 12, 24, 36];

pub struct ProviderSeeder;

#[async_trait]
impl Seeder for ProviderSeeder {
    fn name(&self) -> &'static str {
        "providers"
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let mut inserted = 0;

        for (code, name, email, phone, country, rating) in PROVIDERS {
            let existing = Provider::find()
                .filter(provider::Column::Code.eq(*code))
                .one(&*ctx.db)
                .await?;
            if existing.is_some() {
                log::info!("Provider '{}' already exists, skipping", code);
                continue;
            }

            log::info!("Creating provider: {}", code);
            provider::ActiveModel {
                code: Set(code.to_string()),
                name: Set(name.to_string()),
                contact_email: Set(email.to_string()),
                phone: Set(Some(phone.to_string())),
                country: Set(country.to_string()),
                rating: Set(*rating),
                status: Set("active".to_string()),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            }
            .insert(&*ctx.db)
            .await?;
            inserted += 1;
        }

        Ok(SeedOutcome::seeded(inserted))
    }
}

/// Status implied by where `today` falls relative to the contract dates
pub fn contract_status(starts_on: NaiveDate, ends_on: NaiveDate, today: NaiveDate) -> &'static str {
    if today < starts_on {
        "pending"
    } else if today > ends_on {
        "expired"
    } else {
        "active"
    }
}

/// Writes `rows` in one transaction, rolling everything back on failure.
pub async fn insert_contracts_atomically(
    db: &DatabaseConnection,
    rows: Vec<provider_contract::ActiveModel>,
) -> SeedResult<u64> {
    let txn = db.begin().await?;

    match insert_batched(&txn, rows).await {
        Ok(inserted) => {
            txn.commit().await?;
            Ok(inserted)
        }
        Err(err) => {
            log::error!("Provider contract seeding failed, rolling back: {}", err);
            txn.rollback().await?;
            Err(err)
        }
    }
}

pub struct ProviderContractSeeder;

#[async_trait]
impl Seeder for ProviderContractSeeder {
    fn name(&self) -> &'static str {
        "provider-contracts"
    }

    fn prerequisites(&self) -> &'static [&'static str] {
        &["providers"]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let providers = Provider::find().all(&*ctx.db).await?;
        if providers.is_empty() {
            return Ok(missing_prerequisite("providers"));
        }
        if !table_is_empty::<ProviderContract>(&ctx.db).await? {
            return Ok(already_seeded("provider contracts"));
        }

        let terms = WeightedTable::new("payment terms", PAYMENT_TERMS_WEIGHTS)?;
        let now = Utc::now();
        let today = now.date_naive();
        let window_start = today - Duration::days(730);

        let rows: Vec<provider_contract::ActiveModel> = ctx.with_rng(|rng| {
            let mut rows = Vec::new();
            for provider in &providers {
                for sequence in 1..=rng.gen_range(1..=3) {
                    let starts_on = sampling::random_date_between(rng, window_start, today);
                    let months = sampling::pick(rng, CONTRACT_TERMS).copied().unwrap_or(12);
                    let ends_on = starts_on + Duration::days(months * 30);

                    rows.push(provider_contract::ActiveModel {
                        provider_id: Set(provider.id),
                        contract_number: Set(format!(
                            "PC-{}-{:04}-{}",
                            starts_on.year(),
                            provider.id,
                            sequence
                        )),
                        starts_on: Set(starts_on),
                        ends_on: Set(ends_on),
                        value_cents: Set(rng.gen_range(5_000..=250_000) * 100),
                        payment_terms: Set(terms.pick(rng).to_string()),
                        status: Set(contract_status(starts_on, ends_on, today).to_string()),
                        created_at: Set(now.into()),
                        ..Default::default()
                    });
                }
            }
            rows
        });

        let inserted = insert_contracts_atomically(&ctx.db, rows).await?;
        Ok(SeedOutcome::seeded(inserted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_the_contract_window() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        assert_eq!(
            contract_status(start, end, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            "pending"
        );
        assert_eq!(
            contract_status(start, end, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            "active"
        );
        assert_eq!(
            contract_status(start, end, NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()),
            "expired"
        );
    }
}
