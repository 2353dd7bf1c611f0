//! Test utilities for the backend crate.
//!
//! Integration tests build a throwaway SQLite file per test through
//! [`TestDatabase`], so suites can run in parallel without sharing state.
//! Only compiled with the `test-support` feature.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use diesel_async::SimpleAsyncConnection;
use tempfile::TempDir;
use thiserror::Error;

use crate::domain::{
    CLINIC_NAMES, DOCTOR_TEMPLATES, DirectorySeedOutcome, DirectorySeedPlan, DirectorySeeder,
    DirectorySeedingError,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselDirectorySeedRepository, MigrationError, PoolConfig, PoolError,
    run_pending_migrations,
};
use crate::startup::build_http_state;

/// Errors raised while preparing a test database.
#[derive(Debug, Error)]
pub enum TestDatabaseError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[from] std::io::Error),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Seeding(#[from] DirectorySeedingError),
    #[error("raw SQL failed: {0}")]
    Sql(String),
}

/// SQLite database living in a temporary directory for one test.
///
/// The pool is declared before the directory so connections close before
/// the file is removed.
pub struct TestDatabase {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDatabase {
    /// Open an empty database with no tables.
    ///
    /// # Errors
    /// Returns an error when the directory or pool cannot be created.
    pub async fn empty() -> Result<Self, TestDatabaseError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("clinics.sqlite3");
        let pool = DbPool::new(
            PoolConfig::new(path.to_string_lossy().into_owned()).with_max_size(4),
        )
        .await?;
        Ok(Self {
            pool,
            path,
            _dir: dir,
        })
    }

    /// Open a database with every schema migration applied.
    ///
    /// # Errors
    /// Returns an error when the database cannot be opened or migrated.
    pub async fn migrated() -> Result<Self, TestDatabaseError> {
        let database = Self::empty().await?;
        run_pending_migrations(database.pool()).await?;
        Ok(database)
    }

    /// Open a migrated database holding two clinics with three doctors each.
    ///
    /// Clinic ids are 1 and 2; doctors 1-3 work at clinic 1 and 4-6 at
    /// clinic 2.
    ///
    /// # Errors
    /// Returns an error when the database cannot be opened or seeded.
    pub async fn with_small_directory() -> Result<Self, TestDatabaseError> {
        let database = Self::migrated().await?;
        database.seed(&small_directory_plan()).await?;
        Ok(database)
    }

    /// Apply `plan` through the production seeder.
    ///
    /// # Errors
    /// Returns an error when the seeding transaction fails.
    pub async fn seed(
        &self,
        plan: &DirectorySeedPlan,
    ) -> Result<DirectorySeedOutcome, TestDatabaseError> {
        let seeder = DirectorySeeder::new(Arc::new(DieselDirectorySeedRepository::new(
            self.pool.clone(),
        )));
        Ok(seeder.seed(plan).await?)
    }

    /// Run raw SQL statements, e.g. to build a legacy schema.
    ///
    /// # Errors
    /// Returns [`TestDatabaseError::Sql`] when SQLite rejects the batch.
    pub async fn execute(&self, sql: &str) -> Result<(), TestDatabaseError> {
        let mut conn = self.pool.get().await?;
        conn.batch_execute(sql)
            .await
            .map_err(|err| TestDatabaseError::Sql(err.to_string()))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// HTTP state wired to this database.
    pub fn http_state(&self) -> HttpState {
        build_http_state(&self.pool)
    }
}

/// Two clinics with the first three doctor templates each.
pub fn small_directory_plan() -> DirectorySeedPlan {
    DirectorySeedPlan::from_catalog(&CLINIC_NAMES[..2], &DOCTOR_TEMPLATES[..3])
}
