//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by SQLite via Diesel, with async support through `diesel-async`'s
//! `SyncConnectionWrapper` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. Booking rules live in the domain.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Explicit migrations**: `run_pending_migrations` brings the schema up
//!   to date before any repository is used.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types.
//!
//! # Example
//!
//! ```no_run
//! use clinic_backend::outbound::persistence::{
//!     DbPool, DieselDirectoryRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("database.sqlite3")).await?;
//! run_pending_migrations(&pool).await?;
//! let repository = DieselDirectoryRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_appointment_repository;
mod diesel_basic_error_mapping;
mod diesel_directory_repository;
mod diesel_directory_seed_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_appointment_repository::DieselAppointmentRepository;
pub use diesel_directory_repository::DieselDirectoryRepository;
pub use diesel_directory_seed_repository::DieselDirectorySeedRepository;
pub use migrations::{MigrationError, SchemaMigration, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError, SqliteConn};
