//! Database seeding functionality
//!
//! Every seeder implements [`Seeder`] and is driven by the runner in
//! [`registry`]. Seeders come in two shapes: permission matrices that declare
//! RBAC permissions and roles, and sample-data generators that fill domain
//! tables from literal pools and weighted tables.

pub mod benefits;
pub mod catalog;
pub mod customers;
pub mod employees;
pub mod fixtures;
pub mod orders;
pub mod permissions;
pub mod preferences;
pub mod providers;
pub mod registry;
pub mod roles;
pub mod sampling;
pub mod users;

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait,
};

use crate::cache::CacheStore;
use crate::config::SeedConfig;
use crate::error::SeedResult;

pub use registry::{
    SeedReport, SeedReportEntry, default_seeders, guard_profile, run_seeders, select_seeders,
};

/// Shared state handed to every seeder during a run
pub struct SeedContext {
    pub db: Arc<DatabaseConnection>,
    pub config: SeedConfig,
    pub cache: Arc<CacheStore>,
    rng: Mutex<StdRng>,
}

impl SeedContext {
    /// Builds a context backed by the process-wide cache store.
    ///
    /// The random number generator is seeded from `config.rng_seed` when set
    /// so that runs are reproducible.
    pub fn new(db: Arc<DatabaseConnection>, config: SeedConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            db,
            config,
            cache: CacheStore::global(),
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the cache store, mostly useful to isolate tests.
    pub fn with_cache(mut self, cache: Arc<CacheStore>) -> Self {
        self.cache = cache;
        self
    }

    /// Runs `f` with exclusive access to the context's generator.
    ///
    /// Never hold the borrowed generator across an `.await`; draw what is
    /// needed inside the closure and return it.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

/// Rows per multi-row INSERT, kept under SQLite's bound-parameter limit
const INSERT_BATCH: usize = 100;

/// Result of a single seeder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Rows were written (possibly zero when everything already existed)
    Seeded { inserted: u64 },
    /// The seeder returned early without writing
    Skipped { reason: String },
}

impl SeedOutcome {
    pub fn seeded(inserted: u64) -> Self {
        Self::Seeded { inserted }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn inserted(&self) -> u64 {
        match self {
            Self::Seeded { inserted } => *inserted,
            Self::Skipped { .. } => 0,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// A unit that populates the database with initial or sample data
#[async_trait]
pub trait Seeder: Send + Sync {
    /// Stable name used by the CLI and in progress output
    fn name(&self) -> &'static str;

    /// Seeders whose rows this one reads; they must come earlier in the run
    fn prerequisites(&self) -> &'static [&'static str] {
        &[]
    }

    async fn run(&self, ctx: &SeedContext) -> SeedResult<SeedOutcome>;
}

/// Returns true when the entity's table holds no rows.
pub async fn table_is_empty<E>(db: &DatabaseConnection) -> SeedResult<bool>
where
    E: EntityTrait,
    E::Model: Sync,
{
    Ok(E::find().count(db).await? == 0)
}

/// Inserts `rows` in fixed-size multi-row statements and returns the row count.
pub async fn insert_batched<A, C>(db: &C, rows: Vec<A>) -> SeedResult<u64>
where
    A: ActiveModelTrait + Send,
    C: ConnectionTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let mut inserted = 0;
    let mut rows = rows.into_iter().peekable();
    while rows.peek().is_some() {
        let batch: Vec<A> = rows.by_ref().take(INSERT_BATCH).collect();
        inserted += <A::Entity as EntityTrait>::insert_many(batch)
            .exec_without_returning(db)
            .await?;
    }
    Ok(inserted)
}

/// Logs and builds the outcome for a seeder whose prerequisite table is empty.
pub(crate) fn missing_prerequisite(what: &str) -> SeedOutcome {
    tracing::warn!("No {what} found. Skipping seeding.");
    SeedOutcome::skipped(format!("no {what} found"))
}

/// Logs and builds the outcome for a seeder whose target table is populated.
pub(crate) fn already_seeded(what: &str) -> SeedOutcome {
    tracing::info!("Skipping seeder: {what} already exist");
    SeedOutcome::skipped(format!("{what} already exist"))
}
