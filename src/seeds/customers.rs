//! Customer and address seeding

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use sea_orm::{EntityTrait, Set};
use uuid::Builder;

use super::fixtures::{
    CITIES, CUSTOMER_STATUS_WEIGHTS, CUSTOMER_TYPE_WEIGHTS, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES,
    STREETS, UNIT_PREFIXES,
};
use super::sampling::{self, WeightedTable};
use super::{
    SeedContext, SeedOutcome, Seeder, already_seeded, insert_batched, missing_prerequisite,
    table_is_empty,
};
use crate::error::SeedResult;
use crate::models::address::{self, Entity as Address};
use crate::models::customer::{self, Entity as Customer};

/// Customers registered within this many days
const REGISTRATION_WINDOW_DAYS: i64 = 730;

pub struct CustomerSeeder;

#[async_trait]
impl Seeder for CustomerSeeder {
    fn name(&self) -> &'static str {
        "customers"
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        if !table_is_empty::<Customer>(&ctx.db).await? {
            return Ok(already_seeded("customers"));
        }

        let types = WeightedTable::new("customer types", CUSTOMER_TYPE_WEIGHTS)?;
        let statuses = WeightedTable::new("customer statuses", CUSTOMER_STATUS_WEIGHTS)?;
        let count = ctx.config.customers;
        let now = Utc::now();

        let rows: Vec<customer::ActiveModel> = ctx.with_rng(|rng| {
            (1..=count)
                .map(|n| {
                    let first = sampling::pick(rng, FIRST_NAMES).unwrap_or(&"Alex");
                    let last = sampling::pick(rng, LAST_NAMES).unwrap_or(&"Taylor");
                    let domain = sampling::pick(rng, EMAIL_DOMAINS).unwrap_or(&"example.com");
                    let customer_type = *types.pick(rng);
                    let loyalty_points = match customer_type {
                        "vip" => rng.gen_range(5_000..=20_000),
                        _ => rng.gen_range(0..=2_500),
                    };
                    let phone = rng.gen_bool(0.8).then(|| {
                        format!(
                            "+1-555-{:03}-{:04}",
                            rng.gen_range(100..1_000),
                            rng.gen_range(0..10_000)
                        )
                    });
                    let mut id_bytes = [0u8; 16];
                    rng.fill(&mut id_bytes);

                    customer::ActiveModel {
                        public_id: Set(Builder::from_random_bytes(id_bytes).into_uuid()),
                        first_name: Set(first.to_string()),
                        last_name: Set(last.to_string()),
                        email: Set(format!(
                            "{}.{}{}@{}",
                            first.to_lowercase(),
                            last.to_lowercase(),
                            n,
                            domain
                        )),
                        phone: Set(phone),
                        customer_type: Set(customer_type.to_string()),
                        status: Set(statuses.pick(rng).to_string()),
                        loyalty_points: Set(loyalty_points),
                        registered_at: Set(sampling::random_timestamp_within_days(
                            rng,
                            now,
                            REGISTRATION_WINDOW_DAYS,
                        )
                        .into()),
                        ..Default::default()
                    }
                })
                .collect()
        });

        let inserted = insert_batched(&*ctx.db, rows).await?;
        Ok(SeedOutcome::seeded(inserted))
    }
}

fn random_address(
    rng: &mut impl Rng,
    customer_id: i32,
    kind: &str,
    is_default: bool,
) -> address::ActiveModel {
    let (city, region, postal_prefix) = *sampling::pick(rng, CITIES).unwrap_or(&CITIES[0]);
    let street = sampling::pick(rng, STREETS).unwrap_or(&"Main Street");
    let line2 = rng.gen_bool(0.25).then(|| {
        let unit = sampling::pick(rng, UNIT_PREFIXES).unwrap_or(&"Apt");
        format!("{} {}", unit, rng.gen_range(1..=40))
    });

    address::ActiveModel {
        customer_id: Set(customer_id),
        kind: Set(kind.to_string()),
        line1: Set(format!("{} {}", rng.gen_range(1..=9_999), street)),
        line2: Set(line2),
        city: Set(city.to_string()),
        region: Set(region.to_string()),
        postal_code: Set(format!("{}{:02}", postal_prefix, rng.gen_range(0..100))),
        country: Set("US".to_string()),
        is_default: Set(is_default),
        ..Default::default()
    }
}

pub struct AddressSeeder;

#[async_trait]
impl Seeder for AddressSeeder {
    fn name(&self) -> &'static str {
        "addresses"
    }

    fn prerequisites(&self) -> &'static [&'static str] {
        &["customers"]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let customers = Customer::find().all(&*ctx.db).await?;
        if customers.is_empty() {
            return Ok(missing_prerequisite("customers"));
        }
        if !table_is_empty::<Address>(&ctx.db).await? {
            return Ok(already_seeded("addresses"));
        }

        // Every customer gets exactly one default shipping address.
        let rows: Vec<address::ActiveModel> = ctx.with_rng(|rng| {
            let mut rows = Vec::with_capacity(customers.len() * 2);
            for customer in &customers {
                rows.push(random_address(rng, customer.id, "shipping", true));
                if rng.gen_bool(0.5) {
                    rows.push(random_address(rng, customer.id, "billing", false));
                }
            }
            rows
        });

        let inserted = insert_batched(&*ctx.db, rows).await?;
        Ok(SeedOutcome::seeded(inserted))
    }
}
