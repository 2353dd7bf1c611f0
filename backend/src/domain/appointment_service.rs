//! Appointment booking use-cases.
//!
//! Booking resolves the clinic and the doctor before writing anything, so a
//! failed booking never leaves a row behind. Slot conflicts are not checked.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::directory_service::map_directory_error;
use super::ports::{
    AppointmentCommand, AppointmentQuery, AppointmentRepository, AppointmentRepositoryError,
    DirectoryRepository,
};
use super::{Appointment, AppointmentId, AppointmentSearch, Error, NewAppointment};

fn map_appointment_error(error: AppointmentRepositoryError) -> Error {
    match error {
        AppointmentRepositoryError::Connection { message } => Error::service_unavailable(message),
        AppointmentRepositoryError::Query { message } => Error::internal(message),
    }
}

/// Implements [`AppointmentCommand`] and [`AppointmentQuery`].
#[derive(Clone)]
pub struct AppointmentService {
    directory: Arc<dyn DirectoryRepository>,
    appointments: Arc<dyn AppointmentRepository>,
}

impl AppointmentService {
    pub fn new(
        directory: Arc<dyn DirectoryRepository>,
        appointments: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self {
            directory,
            appointments,
        }
    }
}

#[async_trait]
impl AppointmentCommand for AppointmentService {
    async fn book(&self, appointment: NewAppointment) -> Result<Appointment, Error> {
        let clinic = self
            .directory
            .find_clinic(appointment.clinic_id())
            .await
            .map_err(map_directory_error)?
            .ok_or_else(|| Error::not_found("Clinic not found"))?;

        let doctor = self
            .directory
            .find_doctor(appointment.doctor_id())
            .await
            .map_err(map_directory_error)?
            .ok_or_else(|| Error::not_found("Doctor not found"))?;

        if !clinic.employs(&doctor) {
            return Err(
                Error::invalid_request("Doctor does not belong to the specified clinic")
                    .with_details(json!({
                        "clinic_id": clinic.id,
                        "doctor_id": doctor.id,
                        "doctor_clinic_id": doctor.clinic_id,
                        "code": "doctor_clinic_mismatch",
                    })),
            );
        }

        let booked = self
            .appointments
            .insert(&appointment)
            .await
            .map_err(map_appointment_error)?;
        info!(
            appointment_id = %booked.id,
            clinic_id = %booked.clinic_id,
            doctor_id = %booked.doctor_id,
            "appointment booked"
        );
        Ok(booked)
    }

    async fn cancel(&self, id: AppointmentId) -> Result<(), Error> {
        let deleted = self
            .appointments
            .delete(id)
            .await
            .map_err(map_appointment_error)?;
        if !deleted {
            return Err(Error::not_found("Appointment not found"));
        }
        info!(appointment_id = %id, "appointment cancelled");
        Ok(())
    }
}

#[async_trait]
impl AppointmentQuery for AppointmentService {
    async fn list_appointments(
        &self,
        search: &AppointmentSearch,
    ) -> Result<Vec<Appointment>, Error> {
        self.appointments
            .list(search)
            .await
            .map_err(map_appointment_error)
    }
}
