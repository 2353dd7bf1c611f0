//! Driven port for writing the seeded reference directory.

use async_trait::async_trait;

use crate::domain::DirectorySeedPlan;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised while seeding the directory.
    pub enum DirectorySeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "directory seeding connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "directory seeding query failed: {message}",
    }
}

/// Whether a seeding pass wrote anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// The plan was written.
    Applied,
    /// Clinics already existed; the plan was skipped.
    AlreadySeeded,
}

/// Port for applying a seed plan in a single transaction.
///
/// Implementations must:
/// - Skip the plan entirely when any clinic row exists.
/// - Insert every clinic and its doctors otherwise.
/// - Roll back all inserts if any step fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorySeedRepository: Send + Sync {
    async fn seed_directory(
        &self,
        plan: &DirectorySeedPlan,
    ) -> Result<SeedingResult, DirectorySeedRepositoryError>;
}
