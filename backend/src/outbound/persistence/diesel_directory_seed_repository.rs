//! SQLite-backed directory seeding adapter.
//!
//! This adapter implements the `DirectorySeedRepository` port. The emptiness
//! check and every insert share one transaction, so a seeding pass either
//! writes the whole plan or nothing.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::DirectorySeedPlan;
use crate::domain::ports::{DirectorySeedRepository, DirectorySeedRepositoryError, SeedingResult};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewClinicRow, NewDoctorRow};
use super::pool::{DbPool, PoolError};
use super::schema::{clinics, doctors};

/// Diesel-backed implementation of the directory seeding repository.
#[derive(Clone)]
pub struct DieselDirectorySeedRepository {
    pool: DbPool,
}

impl DieselDirectorySeedRepository {
    /// Create a new seeding repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DirectorySeedRepositoryError {
    map_basic_pool_error(error, DirectorySeedRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> DirectorySeedRepositoryError {
    map_basic_diesel_error(
        error,
        DirectorySeedRepositoryError::query,
        DirectorySeedRepositoryError::connection,
    )
}

#[async_trait]
impl DirectorySeedRepository for DieselDirectorySeedRepository {
    async fn seed_directory(
        &self,
        plan: &DirectorySeedPlan,
    ) -> Result<SeedingResult, DirectorySeedRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let existing: i64 = clinics::table.count().get_result(conn).await?;
                if existing > 0 {
                    debug!(existing, "directory already populated");
                    return Ok(SeedingResult::AlreadySeeded);
                }

                for clinic in plan.clinics() {
                    let clinic_id: i64 = diesel::insert_into(clinics::table)
                        .values(NewClinicRow { name: &clinic.name })
                        .returning(clinics::id)
                        .get_result(conn)
                        .await?;

                    for doctor in &clinic.doctors {
                        diesel::insert_into(doctors::table)
                            .values(NewDoctorRow {
                                clinic_id,
                                name: &doctor.name,
                                specialty: &doctor.specialty,
                            })
                            .execute(conn)
                            .await?;
                    }
                }

                Ok::<_, diesel::result::Error>(SeedingResult::Applied)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
