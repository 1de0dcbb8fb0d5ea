//! # Storefront Seed Entry Point
//!
//! Loads configuration, prepares the schema and runs the selected seeders.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use seeders::cli::{Cli, Commands, RunArgs};
use seeders::config::{AppConfig, ConfigLoader};
use seeders::seeds::{self, SeedContext};
use seeders::{db, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Listing needs neither configuration nor a database
    if let Commands::List = cli.command {
        list_seeders();
        return Ok(());
    }

    // Load configuration from layered env files and variables
    let config = ConfigLoader::new().load()?;
    telemetry::init_tracing(&config, cli.verbose)?;

    tracing::info!("Loaded configuration for profile: {}", config.profile);
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!("Configuration: {}", redacted_json);
    }

    match cli.command {
        Commands::Run(args) => run(config, args).await,
        Commands::Migrate => {
            let conn = db::init_pool(&config).await?;
            db::migrate(&conn).await
        }
        Commands::List => Ok(()),
    }
}

fn list_seeders() {
    for seeder in seeds::default_seeders() {
        let prerequisites = seeder.prerequisites();
        if prerequisites.is_empty() {
            println!("{}", seeder.name());
        } else {
            println!("{} (after: {})", seeder.name(), prerequisites.join(", "));
        }
    }
}

async fn run(config: AppConfig, args: RunArgs) -> anyhow::Result<()> {
    seeds::guard_profile(&config)?;
    let selected = seeds::select_seeders(&args.only)?;

    let conn = db::init_pool(&config).await?;
    if args.fresh {
        db::refresh(&conn).await?;
    } else {
        db::migrate(&conn).await?;
    }

    let ctx = SeedContext::new(Arc::new(conn), config.seed.clone());
    let report = seeds::run_seeders(&ctx, &selected)
        .await
        .context("seed run aborted")?;

    let skipped: Vec<&str> = report.skipped().map(|entry| entry.name).collect();
    tracing::info!(
        seeders = report.entries.len(),
        rows = report.total_inserted(),
        "Database seeding completed"
    );
    if !skipped.is_empty() {
        tracing::warn!("Skipped seeders: {}", skipped.join(", "));
    }
    Ok(())
}
