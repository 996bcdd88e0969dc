//! # filpilote-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `AreaRepository` port defined in `filpilote-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `filpilote-app` (for port traits) and `filpilote-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod area_repo;
mod error;
mod pool;

pub use area_repo::SqliteAreaRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
