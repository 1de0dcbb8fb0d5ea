//! # Storefront Seeders
//!
//! Database seeders for the storefront: RBAC permission matrices for every
//! domain noun plus sample-data generators for the catalog, customers,
//! suppliers, workforce and orders.

pub mod cache;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seeds;
pub mod telemetry;
pub use migration;
