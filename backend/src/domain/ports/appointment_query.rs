//! Driving port for appointment reads.

use async_trait::async_trait;

use crate::domain::{Appointment, AppointmentSearch, Error};

/// Use-case port for listing appointments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentQuery: Send + Sync {
    /// Appointments matching `search`, most recently created first.
    async fn list_appointments(&self, search: &AppointmentSearch) -> Result<Vec<Appointment>, Error>;
}
