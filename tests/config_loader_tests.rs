use seeders::config::{ConfigError, ConfigLoader};
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        env::remove_var("STOREFRONT_PROFILE");
        env::remove_var("STOREFRONT_DATABASE_URL");
        env::remove_var("STOREFRONT_LOG_LEVEL");
        env::remove_var("STOREFRONT_SEED_CUSTOMERS");
        env::remove_var("STOREFRONT_SEED_RNG_SEED");
        env::remove_var("STOREFRONT_SEED_MAX_ITEMS_PER_ORDER");
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.seed.customers, 50);
    assert_eq!(cfg.seed.rng_seed, None);
    assert_eq!(cfg.seed.preferences_cache_ttl_days, 30);
    assert!(!cfg.is_production());
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "STOREFRONT_SEED_CUSTOMERS=10\n");
    write_env_file(&temp_dir, ".env.test", "STOREFRONT_SEED_CUSTOMERS=20\n");
    write_env_file(&temp_dir, ".env.test.local", "STOREFRONT_SEED_CUSTOMERS=30\n");

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "STOREFRONT_PROFILE=test\nSTOREFRONT_SEED_CUSTOMERS=15\nSTOREFRONT_SEED_RNG_SEED=7\n",
    );

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with layered env files");

    assert_eq!(cfg.profile, "test");
    assert_eq!(cfg.seed.customers, 30);
    assert_eq!(cfg.seed.rng_seed, Some(7));
    clear_env();
}

#[test]
fn os_environment_has_highest_precedence() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "STOREFRONT_SEED_CUSTOMERS=10\n");

    unsafe {
        env::set_var("STOREFRONT_SEED_CUSTOMERS", "99");
    }

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with env override");
    assert_eq!(cfg.seed.customers, 99);

    clear_env();
}

#[test]
fn out_of_range_values_return_error() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    unsafe {
        env::set_var("STOREFRONT_SEED_MAX_ITEMS_PER_ORDER", "0");
    }
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader.load().expect_err("zero items per order should fail");
    assert!(matches!(err, ConfigError::InvalidMaxItemsPerOrder { value: 0 }));

    unsafe {
        env::remove_var("STOREFRONT_SEED_MAX_ITEMS_PER_ORDER");
        env::set_var("STOREFRONT_SEED_RNG_SEED", "not-a-number");
    }
    let err = loader.load().expect_err("garbage seed should fail");
    assert!(format!("{}", err).contains("STOREFRONT_SEED_RNG_SEED"));

    clear_env();
}
