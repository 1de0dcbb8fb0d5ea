//! Tests for the cached default customer preference table.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, Utc};
use seeders::cache::CacheStore;
use seeders::models::CustomerPreference;
use seeders::seeds::preferences::{
    DEFAULTS_CACHE_KEY, DefaultCustomerPreferencesSeeder, DefaultPreference, default_preferences,
    get_all_defaults, get_default_by_key, get_defaults_by_category,
};
use seeders::seeds::{Seeder, run_seeders, select_seeders};

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{count, setup_test_db_arc, test_context, test_seed_config};

#[tokio::test]
async fn seeder_publishes_defaults_with_configured_ttl() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let cache = Arc::new(CacheStore::new(4));
    let ctx = test_context(db).with_cache(cache.clone());

    let outcome = DefaultCustomerPreferencesSeeder.run(&ctx).await?;
    assert_eq!(outcome.inserted(), 0);
    assert!(!outcome.is_skipped());

    let cached: Vec<DefaultPreference> = cache.get(DEFAULTS_CACHE_KEY)?.expect("defaults cached");
    assert_eq!(cached, default_preferences());

    let ttl_days = test_seed_config().preferences_cache_ttl_days;
    let expires_at = cache.expires_at(DEFAULTS_CACHE_KEY).expect("expiry recorded");
    let expected = Utc::now() + Duration::days(ttl_days);
    assert!((expires_at - expected).num_seconds().abs() < 60);
    Ok(())
}

#[test]
fn lookups_work_on_a_cold_cache() {
    let cache = CacheStore::new(4);

    let display = get_defaults_by_category(&cache, "display").unwrap();
    assert_eq!(display.len(), 4);
    assert!(display.iter().all(|p| p.category == "display"));

    let currency = get_default_by_key(&cache, "currency").unwrap().expect("currency default");
    assert_eq!(currency.value, serde_json::json!("USD"));
    assert!(get_default_by_key(&cache, "no_such_key").unwrap().is_none());

    // The lookup re-cached the table
    assert!(cache.expires_at(DEFAULTS_CACHE_KEY).is_some());
}

#[test]
fn forgotten_entry_is_rebuilt() {
    let cache = CacheStore::new(4);
    let first = get_all_defaults(&cache).unwrap();
    assert!(cache.forget(DEFAULTS_CACHE_KEY));

    let rebuilt = get_all_defaults(&cache).unwrap();
    assert_eq!(first, rebuilt);
}

#[tokio::test]
async fn customer_preferences_cover_every_default_key() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let ctx = test_context(db);
    let only: Vec<String> = ["customers", "default-customer-preferences", "customer-preferences"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    run_seeders(&ctx, &select_seeders(&only)?).await?;

    let expected = u64::from(test_seed_config().customers) * default_preferences().len() as u64;
    assert_eq!(count::<CustomerPreference>(&ctx.db).await?, expected);
    Ok(())
}
