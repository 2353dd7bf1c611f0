//! SQLite-backed appointment adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AppointmentRepository, AppointmentRepositoryError};
use crate::domain::{Appointment, AppointmentId, AppointmentSearch, NewAppointment};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AppointmentRow, NewAppointmentRow};
use super::pool::{DbPool, PoolError};
use super::schema::appointments;

/// Diesel-backed implementation of the appointment repository.
#[derive(Clone)]
pub struct DieselAppointmentRepository {
    pool: DbPool,
}

impl DieselAppointmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AppointmentRepositoryError {
    map_basic_pool_error(error, AppointmentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AppointmentRepositoryError {
    map_basic_diesel_error(
        error,
        AppointmentRepositoryError::query,
        AppointmentRepositoryError::connection,
    )
}

#[async_trait]
impl AppointmentRepository for DieselAppointmentRepository {
    async fn insert(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: AppointmentRow = diesel::insert_into(appointments::table)
            .values(NewAppointmentRow::from(appointment))
            .returning(AppointmentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn list(
        &self,
        search: &AppointmentSearch,
    ) -> Result<Vec<Appointment>, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = appointments::table
            .select(AppointmentRow::as_select())
            .order(appointments::id.desc())
            .into_boxed();
        if let Some(phone) = search.user_phone() {
            query = query.filter(appointments::user_phone.eq(phone.to_owned()));
        }

        let rows: Vec<AppointmentRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn delete(&self, id: AppointmentId) -> Result<bool, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(appointments::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
