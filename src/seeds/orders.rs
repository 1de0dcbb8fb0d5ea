//! Order and order item seeding

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::{EntityTrait, Set};

use super::fixtures::{ORDER_STATUS_WEIGHTS, PAYMENT_METHOD_WEIGHTS};
use super::sampling::{self, WeightedTable};
use super::{
    SeedContext, SeedOutcome, Seeder, already_seeded, insert_batched, missing_prerequisite,
    table_is_empty,
};
use crate::error::{SeedError, SeedResult};
use crate::models::customer::Entity as Customer;
use crate::models::order::{self, Entity as Order};
use crate::models::order_item;
use crate::models::product::{self, Entity as Product};

/// Sales tax applied to every order, in percent
pub const TAX_PERCENT: i64 = 8;

/// Tax in cents on `subtotal_cents`, rounded half up
pub fn tax_cents(subtotal_cents: i64) -> i64 {
    (subtotal_cents * TAX_PERCENT + 50) / 100
}

/// Totals for one order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

/// Sums `(unit price, quantity)` lines and applies tax.
pub fn order_totals(lines: &[(i64, i32)]) -> OrderTotals {
    let subtotal_cents = lines
        .iter()
        .map(|(unit, quantity)| unit * i64::from(*quantity))
        .sum();
    let tax = tax_cents(subtotal_cents);
    OrderTotals {
        subtotal_cents,
        tax_cents: tax,
        total_cents: subtotal_cents + tax,
    }
}

struct PlannedLine {
    product_id: i32,
    quantity: i32,
    unit_price_cents: i64,
}

struct PlannedOrder {
    order_number: String,
    customer_id: i32,
    status: &'static str,
    payment_method: &'static str,
    placed_at: DateTime<Utc>,
    lines: Vec<PlannedLine>,
}

impl PlannedOrder {
    fn totals(&self) -> OrderTotals {
        let lines: Vec<(i64, i32)> = self
            .lines
            .iter()
            .map(|line| (line.unit_price_cents, line.quantity))
            .collect();
        order_totals(&lines)
    }
}

pub struct OrderSeeder;

#[async_trait]
impl Seeder for OrderSeeder {
    fn name(&self) -> &'static str {
        "orders"
    }

    fn prerequisites(&self) -> &'static [&'static str] {
        &["customers", "products"]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let customers = Customer::find().all(&*ctx.db).await?;
        if customers.is_empty() {
            return Ok(missing_prerequisite("customers"));
        }
        let products = Product::find().all(&*ctx.db).await?;
        if products.is_empty() {
            return Ok(missing_prerequisite("products"));
        }
        if !table_is_empty::<Order>(&ctx.db).await? {
            return Ok(already_seeded("orders"));
        }

        let sellable: Vec<&product::Model> = {
            let active: Vec<&product::Model> =
                products.iter().filter(|p| p.status == "active").collect();
            if active.is_empty() {
                products.iter().collect()
            } else {
                active
            }
        };

        let statuses = WeightedTable::new("order statuses", ORDER_STATUS_WEIGHTS)?;
        let payment_methods = WeightedTable::new("payment methods", PAYMENT_METHOD_WEIGHTS)?;
        let count = ctx.config.orders;
        let max_items = ctx.config.max_items_per_order.max(1) as usize;
        let now = Utc::now();

        let planned: Vec<PlannedOrder> = ctx.with_rng(|rng| {
            (1..=count)
                .map(|n| {
                    let placed_at = sampling::random_timestamp_within_days(rng, now, 365);
                    let customer_id =
                        sampling::pick(rng, &customers).map_or(customers[0].id, |c| c.id);
                    let item_count = rng.gen_range(1..=max_items.min(sellable.len()));
                    let lines = sellable
                        .choose_multiple(rng, item_count)
                        .map(|product| PlannedLine {
                            product_id: product.id,
                            quantity: rng.gen_range(1..=3),
                            unit_price_cents: product.price_cents,
                        })
                        .collect();

                    PlannedOrder {
                        order_number: format!("ORD-{}-{:06}", placed_at.format("%Y%m%d"), n),
                        customer_id,
                        status: *statuses.pick(rng),
                        payment_method: *payment_methods.pick(rng),
                        placed_at,
                        lines,
                    }
                })
                .collect()
        });

        let orders: Vec<order::ActiveModel> = planned
            .iter()
            .map(|plan| {
                let totals = plan.totals();
                order::ActiveModel {
                    order_number: Set(plan.order_number.clone()),
                    customer_id: Set(plan.customer_id),
                    status: Set(plan.status.to_string()),
                    payment_method: Set(plan.payment_method.to_string()),
                    subtotal_cents: Set(totals.subtotal_cents),
                    tax_cents: Set(totals.tax_cents),
                    total_cents: Set(totals.total_cents),
                    placed_at: Set(plan.placed_at.into()),
                    ..Default::default()
                }
            })
            .collect();
        let mut inserted = insert_batched(&*ctx.db, orders).await?;

        // The table was empty, so every stored order is one of ours.
        let ids: HashMap<String, i32> = Order::find()
            .all(&*ctx.db)
            .await?
            .into_iter()
            .map(|order| (order.order_number, order.id))
            .collect();

        let mut items = Vec::new();
        for plan in &planned {
            let order_id =
                ids.get(&plan.order_number)
                    .copied()
                    .ok_or_else(|| SeedError::NotPersisted {
                        entity: "order",
                        key: plan.order_number.clone(),
                    })?;
            for line in &plan.lines {
                items.push(order_item::ActiveModel {
                    order_id: Set(order_id),
                    product_id: Set(line.product_id),
                    quantity: Set(line.quantity),
                    unit_price_cents: Set(line.unit_price_cents),
                    line_total_cents: Set(line.unit_price_cents * i64::from(line.quantity)),
                    ..Default::default()
                });
            }
        }
        inserted += insert_batched(&*ctx.db, items).await?;

        Ok(SeedOutcome::seeded(inserted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_rounds_half_up() {
        assert_eq!(tax_cents(10_000), 800);
        assert_eq!(tax_cents(1_999), 160);
        assert_eq!(tax_cents(6), 0);
        assert_eq!(tax_cents(7), 1);
    }

    #[test]
    fn totals_add_lines_and_tax() {
        let totals = order_totals(&[(2_499, 2), (1_099, 1)]);
        assert_eq!(totals.subtotal_cents, 6_097);
        assert_eq!(totals.tax_cents, 488);
        assert_eq!(totals.total_cents, 6_585);
    }
}
