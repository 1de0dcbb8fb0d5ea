//! Customer preference seeding
//!
//! The default preference table is published to the cache store under
//! [`DEFAULTS_CACHE_KEY`] so other code can read it back without touching
//! the database. The lookup helpers rebuild the table from the literals and
//! re-cache it whenever the entry is missing or expired.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use super::sampling;
use super::{
    SeedContext, SeedOutcome, Seeder, already_seeded, insert_batched, missing_prerequisite,
    table_is_empty,
};
use crate::cache::CacheStore;
use crate::error::SeedResult;
use crate::models::customer::Entity as Customer;
use crate::models::customer_preference::{self, Entity as CustomerPreference};

pub const DEFAULTS_CACHE_KEY: &str = "customer_preferences.defaults";

/// Lifetime used when a lookup helper has to rebuild the cached table
pub const DEFAULTS_TTL_DAYS: i64 = 30;

/// Share of customer preferences that deviate from the default
const CUSTOMISED_RATIO: f64 = 0.3;

/// One entry of the default preference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultPreference {
    pub category: String,
    pub key: String,
    pub value: JsonValue,
    pub description: String,
}

fn preference(category: &str, key: &str, value: JsonValue, description: &str) -> DefaultPreference {
    DefaultPreference {
        category: category.to_string(),
        key: key.to_string(),
        value,
        description: description.to_string(),
    }
}

/// The literal default preference table
pub fn default_preferences() -> Vec<DefaultPreference> {
    vec![
        preference("communication", "email_marketing", json!(true), "Receive promotional emails"),
        preference("communication", "sms_notifications", json!(false), "Receive SMS updates"),
        preference(
            "communication",
            "newsletter_frequency",
            json!("weekly"),
            "How often the newsletter is sent",
        ),
        preference(
            "communication",
            "preferred_contact_method",
            json!("email"),
            "Channel used for support follow-ups",
        ),
        preference("notifications", "order_updates", json!(true), "Notify on order status changes"),
        preference(
            "notifications",
            "price_drop_alerts",
            json!(false),
            "Notify when a wishlist item gets cheaper",
        ),
        preference(
            "notifications",
            "back_in_stock_alerts",
            json!(true),
            "Notify when a watched item is restocked",
        ),
        preference("display", "language", json!("en"), "Storefront language"),
        preference("display", "currency", json!("USD"), "Currency prices are shown in"),
        preference("display", "theme", json!("light"), "Storefront colour theme"),
        preference("display", "items_per_page", json!(24), "Products per listing page"),
        preference(
            "shopping",
            "default_shipping_speed",
            json!("standard"),
            "Shipping option preselected at checkout",
        ),
        preference(
            "shopping",
            "save_payment_methods",
            json!(false),
            "Remember cards for future orders",
        ),
        preference(
            "shopping",
            "one_click_checkout",
            json!(false),
            "Skip the review step at checkout",
        ),
        preference(
            "shopping",
            "wishlist_public",
            json!(false),
            "Allow others to view the wishlist",
        ),
        preference(
            "privacy",
            "share_purchase_history",
            json!(false),
            "Share purchase history with partners",
        ),
        preference(
            "privacy",
            "personalized_recommendations",
            json!(true),
            "Use browsing history for recommendations",
        ),
        preference(
            "privacy",
            "data_retention_months",
            json!(24),
            "Months before inactive data is purged",
        ),
    ]
}

/// Values a customer may pick instead of the default
fn alternatives(default: &DefaultPreference) -> Vec<JsonValue> {
    match default.key.as_str() {
        "newsletter_frequency" => vec![json!("daily"), json!("monthly"), json!("never")],
        "preferred_contact_method" => vec![json!("sms"), json!("phone")],
        "language" => vec![json!("es"), json!("fr"), json!("de")],
        "currency" => vec![json!("EUR"), json!("GBP"), json!("CAD")],
        "theme" => vec![json!("dark"), json!("system")],
        "items_per_page" => vec![json!(12), json!(48), json!(96)],
        "default_shipping_speed" => vec![json!("express"), json!("overnight")],
        "data_retention_months" => vec![json!(6), json!(12), json!(60)],
        _ => match default.value.as_bool() {
            Some(flag) => vec![json!(!flag)],
            None => Vec::new(),
        },
    }
}

/// Every default preference, rebuilt and re-cached when the entry is gone.
pub fn get_all_defaults(cache: &CacheStore) -> SeedResult<Vec<DefaultPreference>> {
    let defaults = cache.remember(
        DEFAULTS_CACHE_KEY,
        Duration::days(DEFAULTS_TTL_DAYS),
        default_preferences,
    )?;
    Ok(defaults)
}

pub fn get_defaults_by_category(
    cache: &CacheStore,
    category: &str,
) -> SeedResult<Vec<DefaultPreference>> {
    Ok(get_all_defaults(cache)?
        .into_iter()
        .filter(|preference| preference.category == category)
        .collect())
}

pub fn get_default_by_key(cache: &CacheStore, key: &str) -> SeedResult<Option<DefaultPreference>> {
    Ok(get_all_defaults(cache)?
        .into_iter()
        .find(|preference| preference.key == key))
}

/// Publishes the default preference table to the cache store
pub struct DefaultCustomerPreferencesSeeder;

#[async_trait]
impl Seeder for DefaultCustomerPreferencesSeeder {
    fn name(&self) -> &'static str {
        "default-customer-preferences"
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let defaults = default_preferences();
        let ttl = Duration::days(ctx.config.preferences_cache_ttl_days);
        ctx.cache.put(DEFAULTS_CACHE_KEY, &defaults, ttl)?;

        tracing::info!(
            key = DEFAULTS_CACHE_KEY,
            entries = defaults.len(),
            ttl_days = ctx.config.preferences_cache_ttl_days,
            "Cached default customer preferences"
        );
        Ok(SeedOutcome::seeded(0))
    }
}

pub struct CustomerPreferenceSeeder;

#[async_trait]
impl Seeder for CustomerPreferenceSeeder {
    fn name(&self) -> &'static str {
        "customer-preferences"
    }

    fn prerequisites(&self) -> &'static [&'static str] {
        &["customers", "default-customer-preferences"]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome> {
        let customers = Customer::find().all(&*ctx.db).await?;
        if customers.is_empty() {
            return Ok(missing_prerequisite("customers"));
        }
        if !table_is_empty::<CustomerPreference>(&ctx.db).await? {
            return Ok(already_seeded("customer preferences"));
        }

        let defaults = get_all_defaults(&ctx.cache)?;
        let now = Utc::now();

        let rows: Vec<customer_preference::ActiveModel> = ctx.with_rng(|rng| {
            let mut rows = Vec::with_capacity(customers.len() * defaults.len());
            for customer in &customers {
                for default in &defaults {
                    let options = alternatives(default);
                    let value = if rng.gen_bool(CUSTOMISED_RATIO) {
                        sampling::pick(rng, &options)
                            .cloned()
                            .unwrap_or_else(|| default.value.clone())
                    } else {
                        default.value.clone()
                    };

                    rows.push(customer_preference::ActiveModel {
                        customer_id: Set(customer.id),
                        category: Set(default.category.clone()),
                        key: Set(default.key.clone()),
                        value: Set(value),
                        updated_at: Set(now.into()),
                        ..Default::default()
                    });
                }
            }
            rows
        });

        let inserted = insert_batched(&*ctx.db, rows).await?;
        Ok(SeedOutcome::seeded(inserted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_keys_are_unique() {
        let defaults = default_preferences();
        let keys: HashSet<_> = defaults.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys.len(), defaults.len());
    }

    #[test]
    fn every_default_has_an_alternative() {
        for default in default_preferences() {
            let options = alternatives(&default);
            assert!(!options.is_empty(), "{}", default.key);
            assert!(!options.contains(&default.value), "{}", default.key);
        }
    }

    #[test]
    fn lookups_filter_the_cached_table() {
        let cache = CacheStore::new(4);
        let display = get_defaults_by_category(&cache, "display").unwrap();
        assert_eq!(display.len(), 4);
        assert!(display.iter().all(|p| p.category == "display"));

        let currency = get_default_by_key(&cache, "currency").unwrap().unwrap();
        assert_eq!(currency.value, json!("USD"));
        assert!(get_default_by_key(&cache, "missing").unwrap().is_none());
    }

    #[test]
    fn lookups_rebuild_an_expired_entry() {
        let cache = CacheStore::new(4);
        cache
            .put(DEFAULTS_CACHE_KEY, &Vec::<DefaultPreference>::new(), Duration::seconds(-1))
            .unwrap();

        assert_eq!(get_all_defaults(&cache).unwrap(), default_preferences());
        assert!(cache.expires_at(DEFAULTS_CACHE_KEY).unwrap() > Utc::now() + Duration::days(29));
    }
}
