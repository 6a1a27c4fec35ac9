//! # carhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `carhub-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `carhub-app` (for port traits) and `carhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod order_repo;
mod pool;
mod review_repo;
mod service_repo;
mod user_repo;

pub use error::StorageError;
pub use order_repo::SqliteOrderRepository;
pub use pool::{Config, Database};
pub use review_repo::SqliteReviewRepository;
pub use service_repo::SqliteServiceRepository;
pub use user_repo::SqliteUserRepository;
