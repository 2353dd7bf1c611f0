//! Startup orchestration: schema migration, optional seeding and wiring of
//! the Diesel adapters into the HTTP state.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::{
    AppointmentService, DirectorySeedOutcome, DirectorySeedPlan, DirectorySeeder,
    DirectorySeedingError, DirectoryService,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselAppointmentRepository, DieselDirectoryRepository,
    DieselDirectorySeedRepository, MigrationError, run_pending_migrations,
};

/// Errors returned while preparing the database at startup.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A schema migration step failed.
    #[error("schema migration failed: {0}")]
    Migration(#[from] MigrationError),
    /// Reference data could not be written.
    #[error(transparent)]
    Seeding(#[from] DirectorySeedingError),
}

/// Bring the schema up to date, then seed the directory when enabled.
///
/// Returns `None` when seeding is disabled. Seeding an already populated
/// directory reports [`DirectorySeedOutcome::AlreadySeeded`].
///
/// # Examples
///
/// ```rust,no_run
/// use clinic_backend::outbound::persistence::{DbPool, PoolConfig};
/// use clinic_backend::startup::prepare_database;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("database.sqlite3")).await?;
/// let outcome = prepare_database(&pool, true).await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub async fn prepare_database(
    pool: &DbPool,
    seed_on_startup: bool,
) -> Result<Option<DirectorySeedOutcome>, StartupError> {
    let applied = run_pending_migrations(pool).await?;
    info!(applied = applied.len(), "schema is up to date");

    if !seed_on_startup {
        info!(reason = "disabled", "directory seeding skipped");
        return Ok(None);
    }

    let seeder = DirectorySeeder::new(Arc::new(DieselDirectorySeedRepository::new(pool.clone())));
    let outcome = seeder.seed(&DirectorySeedPlan::standard()).await?;
    Ok(Some(outcome))
}

/// Wire the Diesel repositories and domain services behind [`HttpState`].
pub fn build_http_state(pool: &DbPool) -> HttpState {
    let directory_repository = Arc::new(DieselDirectoryRepository::new(pool.clone()));
    let appointments = Arc::new(AppointmentService::new(
        directory_repository.clone(),
        Arc::new(DieselAppointmentRepository::new(pool.clone())),
    ));
    HttpState::new(
        Arc::new(DirectoryService::new(directory_repository)),
        appointments.clone(),
        appointments,
    )
}
