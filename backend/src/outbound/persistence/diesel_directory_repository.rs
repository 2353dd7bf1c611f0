//! SQLite-backed directory adapter.
//!
//! Reads clinics and doctors for the directory endpoints and the booking
//! checks, and removes clinics together with everything that references
//! them. The schema declares no `ON DELETE` cascades, so the cascade is
//! performed here inside one transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{DirectoryRepository, DirectoryRepositoryError};
use crate::domain::{Clinic, ClinicId, ClinicSearch, Doctor, DoctorId, DoctorSearch, NameFilter};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ClinicRow, DoctorRow};
use super::pool::{DbPool, PoolError, SqliteConn};
use super::schema::{appointments, clinics, doctors};

/// Diesel-backed implementation of the directory repository.
#[derive(Clone)]
pub struct DieselDirectoryRepository {
    pool: DbPool,
}

impl DieselDirectoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DirectoryRepositoryError {
    map_basic_pool_error(error, DirectoryRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> DirectoryRepositoryError {
    map_basic_diesel_error(
        error,
        DirectoryRepositoryError::query,
        DirectoryRepositoryError::connection,
    )
}

/// `LIKE` pattern matching `filter` anywhere in the value.
///
/// `%`, `_` and the escape character itself are escaped so they match
/// literally. SQLite's `LIKE` folds ASCII case only.
fn contains_pattern(filter: &NameFilter) -> String {
    let mut pattern = String::with_capacity(filter.as_str().len() + 2);
    pattern.push('%');
    for ch in filter.as_str().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Attach each clinic's doctors, ordered by doctor id.
async fn with_doctors(
    conn: &mut SqliteConn,
    clinic_rows: Vec<ClinicRow>,
) -> QueryResult<Vec<Clinic>> {
    let doctor_rows = DoctorRow::belonging_to(&clinic_rows)
        .select(DoctorRow::as_select())
        .order(doctors::id.asc())
        .load(conn)
        .await?;

    Ok(doctor_rows
        .grouped_by(&clinic_rows)
        .into_iter()
        .zip(clinic_rows)
        .map(|(doctors, clinic)| clinic.into_clinic(doctors))
        .collect())
}

#[async_trait]
impl DirectoryRepository for DieselDirectoryRepository {
    async fn list_clinics(
        &self,
        search: &ClinicSearch,
    ) -> Result<Vec<Clinic>, DirectoryRepositoryError> {
        let mut pooled = self.pool.get().await.map_err(map_pool_error)?;
        let conn: &mut SqliteConn = &mut pooled;

        let mut query = clinics::table
            .select(ClinicRow::as_select())
            .order(clinics::id.asc())
            .into_boxed();
        if let Some(filter) = &search.name {
            query = query.filter(clinics::name.like(contains_pattern(filter)).escape('\\'));
        }

        let clinic_rows = query.load(conn).await.map_err(map_diesel_error)?;
        with_doctors(conn, clinic_rows)
            .await
            .map_err(map_diesel_error)
    }

    async fn list_doctors(
        &self,
        search: &DoctorSearch,
    ) -> Result<Vec<Doctor>, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = doctors::table
            .select(DoctorRow::as_select())
            .order(doctors::id.asc())
            .into_boxed();
        if let Some(clinic_id) = search.clinic_id {
            query = query.filter(doctors::clinic_id.eq(clinic_id.get()));
        }
        if let Some(filter) = &search.name {
            query = query.filter(doctors::name.like(contains_pattern(filter)).escape('\\'));
        }

        let rows: Vec<DoctorRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Doctor::from).collect())
    }

    async fn find_clinic(&self, id: ClinicId) -> Result<Option<Clinic>, DirectoryRepositoryError> {
        let mut pooled = self.pool.get().await.map_err(map_pool_error)?;
        let conn: &mut SqliteConn = &mut pooled;

        let row = clinics::table
            .find(id.get())
            .select(ClinicRow::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let mut found = with_doctors(conn, vec![row])
            .await
            .map_err(map_diesel_error)?;
        Ok(found.pop())
    }

    async fn find_doctor(&self, id: DoctorId) -> Result<Option<Doctor>, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DoctorRow> = doctors::table
            .find(id.get())
            .select(DoctorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Doctor::from))
    }

    async fn remove_clinic(&self, id: ClinicId) -> Result<bool, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let clinic_id = id.get();

        conn.transaction(|conn| {
            async move {
                let clinic_doctors = doctors::table
                    .filter(doctors::clinic_id.eq(clinic_id))
                    .select(doctors::id);
                diesel::delete(
                    appointments::table.filter(
                        appointments::clinic_id
                            .eq(clinic_id)
                            .or(appointments::doctor_id.eq_any(clinic_doctors)),
                    ),
                )
                .execute(conn)
                .await?;

                diesel::delete(doctors::table.filter(doctors::clinic_id.eq(clinic_id)))
                    .execute(conn)
                    .await?;

                let removed = diesel::delete(clinics::table.find(clinic_id))
                    .execute(conn)
                    .await?;
                Ok::<_, diesel::result::Error>(removed > 0)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
