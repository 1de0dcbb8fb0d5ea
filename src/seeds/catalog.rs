//! Catalog seeding: categories, brands and products

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use super::fixtures::{
    BRANDS, CATEGORIES, CATEGORY_WEIGHTS, PRODUCT_ADJECTIVES, PRODUCT_NOUNS, PRODUCT_STATUS_WEIGHTS,
};
use super::sampling::{self, WeightedTable};
use super::{
    SeedContext, SeedOutcome, Seeder, already_seeded, insert_batched, missing_prerequisite,
    table_is_empty,
};
use crate::error::SeedResult;
use crate::models::brand::{self, Entity as Brand};
use crate::models::category::{self, Entity as Category};
use crate::models::product::{self, Entity as Product};

/// Share of products that carry a brand
const BRANDED_RATIO: f64 = 0.85;

pub struct CategorySeeder;

#[async_trait]
impl Seeder for CategorySeeder {
    fn name(&self) -> &'static str {
        "categories"
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let mut inserted = 0;

        for (name, slug, description, _) in CATEGORIES {
            let existing = Category::find()
                .filter(category::Column::Slug.eq(*slug))
                .one(&*ctx.db)
                .await?;
            if existing.is_some() {
                log::debug!("Category '{}' already exists, skipping", slug);
                continue;
            }

            category::ActiveModel {
                name: Set(name.to_string()),
                slug: Set(slug.to_string()),
                description: Set(Some(description.to_string())),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            }
            .insert(&*ctx.db)
            .await?;
            log::info!("Created category: {}", slug);
            inserted += 1;
        }

        Ok(SeedOutcome::seeded(inserted))
    }
}

pub struct BrandSeeder;

#[async_trait]
impl Seeder for BrandSeeder {
    fn name(&self) -> &'static str {
        "brands"
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let mut inserted = 0;

        for (name, slug, country) in BRANDS {
            let existing = Brand::find()
                .filter(brand::Column::Slug.eq(*slug))
                .one(&*ctx.db)
                .await?;
            if existing.is_some() {
                log::debug!("Brand '{}' already exists, skipping", slug);
                continue;
            }

            brand::ActiveModel {
                name: Set(name.to_string()),
                slug: Set(slug.to_string()),
                country: Set(country.to_string()),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            }
            .insert(&*ctx.db)
            .await?;
            log::info!("Created brand: {}", slug);
            inserted += 1;
        }

        Ok(SeedOutcome::seeded(inserted))
    }
}

/// Typical price range for a category slug, in whole currency units
fn price_range(slug: &str) -> (i64, i64) {
    CATEGORIES
        .iter()
        .find(|(_, candidate, _, _)| *candidate == slug)
        .map(|(_, _, _, range)| *range)
        .unwrap_or((5, 100))
}

fn product_nouns(slug: &str) -> &'static [&'static str] {
    PRODUCT_NOUNS
        .iter()
        .find(|(candidate, _)| *candidate == slug)
        .map(|(_, nouns)| *nouns)
        .unwrap_or(&["Item"])
}

fn sku_prefix(slug: &str) -> String {
    slug.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .collect::<String>()
        .to_ascii_uppercase()
}

pub struct ProductSeeder;

#[async_trait]
impl Seeder for ProductSeeder {
    fn name(&self) -> &'static str {
        "products"
    }

    fn prerequisites(&self) -> &'static [&'static str] {
        &["categories", "brands"]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        if !table_is_empty::<Product>(&ctx.db).await? {
            return Ok(already_seeded("products"));
        }

        let categories = Category::find().all(&*ctx.db).await?;
        if categories.is_empty() {
            return Ok(missing_prerequisite("categories"));
        }
        let brands = Brand::find().all(&*ctx.db).await?;
        let by_slug: HashMap<&str, &category::Model> =
            categories.iter().map(|c| (c.slug.as_str(), c)).collect();

        let category_table = WeightedTable::new("product categories", CATEGORY_WEIGHTS)?;
        let status_table = WeightedTable::new("product statuses", PRODUCT_STATUS_WEIGHTS)?;
        let count = ctx.config.products;

        let rows: Vec<product::ActiveModel> = ctx.with_rng(|rng| {
            (1..=count)
                .map(|n| {
                    // Fall back to any stored category when the weighted slug was never seeded.
                    let category = by_slug
                        .get(category_table.pick(rng))
                        .copied()
                        .or_else(|| sampling::pick(rng, &categories))
                        .unwrap_or(&categories[0]);

                    let (min, max) = price_range(&category.slug);
                    let adjective = sampling::pick(rng, PRODUCT_ADJECTIVES).unwrap_or(&"Classic");
                    let noun =
                        sampling::pick(rng, product_nouns(&category.slug)).unwrap_or(&"Item");
                    let brand_id = if rng.gen_bool(BRANDED_RATIO) {
                        sampling::pick(rng, &brands).map(|b| b.id)
                    } else {
                        None
                    };

                    product::ActiveModel {
                        sku: Set(format!("{}-{:05}", sku_prefix(&category.slug), n)),
                        name: Set(format!("{adjective} {noun}")),
                        category_id: Set(category.id),
                        brand_id: Set(brand_id),
                        price_cents: Set(sampling::random_price_cents(rng, min, max)),
                        stock: Set(rng.gen_range(0..=500)),
                        status: Set(status_table.pick(rng).to_string()),
                        created_at: Set(
                            sampling::random_timestamp_within_days(rng, Utc::now(), 365).into(),
                        ),
                        ..Default::default()
                    }
                })
                .collect()
        });

        let inserted = insert_batched(&*ctx.db, rows).await?;
        Ok(SeedOutcome::seeded(inserted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sku_prefix_uses_first_letters() {
        assert_eq!(sku_prefix("home-kitchen"), "HOM");
        assert_eq!(sku_prefix("books"), "BOO");
    }

    #[test]
    fn every_weighted_category_has_a_price_range_and_nouns() {
        for (slug, _) in CATEGORY_WEIGHTS {
            assert!(CATEGORIES.iter().any(|(_, s, _, _)| s == slug), "{slug}");
            assert_ne!(product_nouns(slug), &["Item"], "{slug}");
            let (min, max) = price_range(slug);
            assert!(min < max);
        }
    }
}
