//! # Repository Layer
//!
//! Repository implementations that encapsulate SeaORM operations for the
//! access control tables: first-or-create lookups, permission sync/give and
//! user role assignment.

pub mod permission;
pub mod role;

pub use permission::{DEFAULT_GUARD, PermissionRepository};
pub use role::RoleRepository;
