//! Driving port for appointment mutations.

use async_trait::async_trait;

use crate::domain::{Appointment, AppointmentId, Error, NewAppointment};

/// Use-case port for booking and cancelling appointments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentCommand: Send + Sync {
    /// Book an appointment after checking the clinic and doctor.
    ///
    /// Fails with `not_found` for an unknown clinic or doctor and with
    /// `invalid_request` when the doctor belongs to another clinic.
    async fn book(&self, appointment: NewAppointment) -> Result<Appointment, Error>;

    /// Cancel an appointment; `not_found` when the id is unknown.
    async fn cancel(&self, id: AppointmentId) -> Result<(), Error>;
}
