//! Seeder registry and runner
//!
//! [`default_seeders`] lists every seeder in an order that satisfies each
//! one's prerequisites. [`run_seeders`] executes a list sequentially and
//! aborts on the first error.

use std::time::{Duration, Instant};

use metrics::counter;
use tracing::{error, info};

use super::benefits::EmployeeBenefitSeeder;
use super::catalog::{BrandSeeder, CategorySeeder, ProductSeeder};
use super::customers::{AddressSeeder, CustomerSeeder};
use super::employees::{EmployeeNoteSeeder, EmployeeSeeder};
use super::orders::OrderSeeder;
use super::permissions::permission_seeders;
use super::preferences::{CustomerPreferenceSeeder, DefaultCustomerPreferencesSeeder};
use super::providers::{ProviderContractSeeder, ProviderSeeder};
use super::roles::RoleSeeder;
use super::users::UserSeeder;
use super::{SeedContext, SeedOutcome, Seeder};
use crate::config::AppConfig;
use crate::error::{SeedError, SeedResult};

/// Every seeder, roles and permission matrices first, then sample data.
pub fn default_seeders() -> Vec<Box<dyn Seeder>> {
    let mut seeders: Vec<Box<dyn Seeder>> = vec![Box::new(RoleSeeder)];
    seeders.extend(permission_seeders());
    seeders.extend([
        Box::new(UserSeeder) as Box<dyn Seeder>,
        Box::new(CategorySeeder),
        Box::new(BrandSeeder),
        Box::new(ProductSeeder),
        Box::new(CustomerSeeder),
        Box::new(AddressSeeder),
        Box::new(DefaultCustomerPreferencesSeeder),
        Box::new(CustomerPreferenceSeeder),
        Box::new(ProviderSeeder),
        Box::new(ProviderContractSeeder),
        Box::new(EmployeeSeeder),
        Box::new(EmployeeNoteSeeder),
        Box::new(EmployeeBenefitSeeder),
        Box::new(OrderSeeder),
    ]);
    seeders
}

/// The default seeders restricted to `only`, keeping registry order.
///
/// An empty `only` selects everything. Unknown names are an error.
pub fn select_seeders(only: &[String]) -> SeedResult<Vec<Box<dyn Seeder>>> {
    let all = default_seeders();
    if only.is_empty() {
        return Ok(all);
    }

    if let Some(unknown) = only
        .iter()
        .find(|name| !all.iter().any(|seeder| seeder.name() == name.as_str()))
    {
        return Err(SeedError::UnknownSeeder(unknown.clone()));
    }

    Ok(all
        .into_iter()
        .filter(|seeder| only.iter().any(|name| name == seeder.name()))
        .collect())
}

/// Refuses to seed a production profile unless explicitly allowed.
pub fn guard_profile(config: &AppConfig) -> SeedResult<()> {
    if config.is_production() && !config.allow_production {
        return Err(SeedError::ProductionGuard {
            profile: config.profile.clone(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct SeedReportEntry {
    pub name: &'static str,
    pub outcome: SeedOutcome,
    pub elapsed: Duration,
}

/// What a run did, seeder by seeder
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub entries: Vec<SeedReportEntry>,
}

impl SeedReport {
    pub fn total_inserted(&self) -> u64 {
        self.entries.iter().map(|entry| entry.outcome.inserted()).sum()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SeedReportEntry> {
        self.entries.iter().filter(|entry| entry.outcome.is_skipped())
    }

    pub fn outcome(&self, name: &str) -> Option<&SeedOutcome> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.outcome)
    }
}

/// Runs `seeders` in order, stopping at the first failure.
pub async fn run_seeders(ctx: &SeedContext, seeders: &[Box<dyn Seeder>]) -> SeedResult<SeedReport> {
    let mut report = SeedReport::default();

    for seeder in seeders {
        let name = seeder.name();
        info!("Seeding: {}", name);
        let started = Instant::now();

        let outcome = match seeder.run(ctx).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(seeder = name, error = %err, "Seeder failed");
                return Err(err);
            }
        };
        let elapsed = started.elapsed();

        match &outcome {
            SeedOutcome::Seeded { inserted } => {
                counter!("seeder_rows_inserted_total", "seeder" => name).increment(*inserted);
                info!(
                    "Seeded: {} ({} rows, {} ms)",
                    name,
                    inserted,
                    elapsed.as_millis()
                );
            }
            SeedOutcome::Skipped { reason } => {
                info!("Skipped: {} ({})", name, reason);
            }
        }

        report.entries.push(SeedReportEntry {
            name,
            outcome,
            elapsed,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_order_satisfies_prerequisites() {
        let mut seen = HashSet::new();
        for seeder in default_seeders() {
            for prerequisite in seeder.prerequisites() {
                assert!(
                    seen.contains(prerequisite),
                    "{} runs before its prerequisite {}",
                    seeder.name(),
                    prerequisite
                );
            }
            assert!(seen.insert(seeder.name()), "duplicate seeder {}", seeder.name());
        }
    }

    #[test]
    fn select_keeps_registry_order() {
        let picked = select_seeders(&["orders".to_string(), "customers".to_string()]).unwrap();
        let names: Vec<_> = picked.iter().map(|seeder| seeder.name()).collect();
        assert_eq!(names, ["customers", "orders"]);
    }

    #[test]
    fn select_rejects_unknown_names() {
        let result = select_seeders(&["widgets".to_string()]);
        assert!(matches!(result, Err(SeedError::UnknownSeeder(name)) if name == "widgets"));
    }

    #[test]
    fn production_requires_opt_in() {
        let mut config = AppConfig {
            profile: "production".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            guard_profile(&config),
            Err(SeedError::ProductionGuard { .. })
        ));

        config.allow_production = true;
        assert!(guard_profile(&config).is_ok());

        config.profile = "local".to_string();
        config.allow_production = false;
        assert!(guard_profile(&config).is_ok());
    }
}
