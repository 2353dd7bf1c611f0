//! Driven port for appointment persistence.

use async_trait::async_trait;

use crate::domain::{Appointment, AppointmentId, AppointmentSearch, NewAppointment};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by appointment repository adapters.
    pub enum AppointmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "appointment connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "appointment query failed: {message}",
    }
}

/// Port for storing, listing and deleting appointments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Persist `appointment` and return it with its generated id.
    async fn insert(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, AppointmentRepositoryError>;

    /// Appointments matching `search`, newest (highest id) first.
    async fn list(
        &self,
        search: &AppointmentSearch,
    ) -> Result<Vec<Appointment>, AppointmentRepositoryError>;

    /// Delete by id; `false` when no such appointment existed.
    async fn delete(&self, id: AppointmentId) -> Result<bool, AppointmentRepositoryError>;
}
