//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Seeds the storefront database with RBAC tables and sample data
#[derive(Parser, Debug)]
#[command(name = "storefront-seed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply pending migrations, then run seeders
    Run(RunArgs),

    /// Print seeder names in run order with their prerequisites
    List,

    /// Apply pending migrations only
    Migrate,
}

/// Arguments for the run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Run only the named seeder; repeat to select several
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Drop every table and re-apply migrations before seeding
    #[arg(long)]
    pub fresh: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_accepts_repeated_only() {
        let cli = Cli::try_parse_from([
            "storefront-seed",
            "run",
            "--only",
            "customers",
            "--only",
            "orders",
            "--fresh",
        ])
        .unwrap();

        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.only, ["customers", "orders"]);
                assert!(args.fresh);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["storefront-seed", "list", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }
}
