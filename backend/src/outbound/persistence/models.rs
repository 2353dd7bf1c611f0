//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types live here so
//! repositories stay thin.

use diesel::prelude::*;

use crate::domain::{
    Appointment, AppointmentId, Clinic, ClinicId, Doctor, DoctorId, NewAppointment,
};

use super::schema::{appointments, clinics, doctors, schema_migrations};

/// Row struct for reading from the clinics table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = clinics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ClinicRow {
    pub id: i64,
    pub name: String,
}

impl ClinicRow {
    pub(crate) fn into_clinic(self, doctors: Vec<DoctorRow>) -> Clinic {
        Clinic {
            id: ClinicId::new(self.id),
            name: self.name,
            doctors: doctors.into_iter().map(Doctor::from).collect(),
        }
    }
}

/// Insertable struct for creating clinic records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clinics)]
pub(crate) struct NewClinicRow<'a> {
    pub name: &'a str,
}

/// Row struct for reading from the doctors table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = doctors)]
#[diesel(belongs_to(ClinicRow, foreign_key = clinic_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct DoctorRow {
    pub id: i64,
    pub clinic_id: i64,
    pub name: String,
    pub specialty: String,
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        Self {
            id: DoctorId::new(row.id),
            clinic_id: ClinicId::new(row.clinic_id),
            name: row.name,
            specialty: row.specialty,
        }
    }
}

/// Insertable struct for creating doctor records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = doctors)]
pub(crate) struct NewDoctorRow<'a> {
    pub clinic_id: i64,
    pub name: &'a str,
    pub specialty: &'a str,
}

/// Row struct for reading from the appointments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct AppointmentRow {
    pub id: i64,
    pub clinic_id: i64,
    pub doctor_id: i64,
    pub date: String,
    pub time: String,
    pub user_name: String,
    pub user_phone: String,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: AppointmentId::new(row.id),
            clinic_id: ClinicId::new(row.clinic_id),
            doctor_id: DoctorId::new(row.doctor_id),
            date: row.date,
            time: row.time,
            user_name: row.user_name,
            user_phone: row.user_phone,
        }
    }
}

/// Insertable struct for creating appointment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = appointments)]
pub(crate) struct NewAppointmentRow<'a> {
    pub clinic_id: i64,
    pub doctor_id: i64,
    pub date: &'a str,
    pub time: &'a str,
    pub user_name: &'a str,
    pub user_phone: &'a str,
}

impl<'a> From<&'a NewAppointment> for NewAppointmentRow<'a> {
    fn from(draft: &'a NewAppointment) -> Self {
        Self {
            clinic_id: draft.clinic_id().get(),
            doctor_id: draft.doctor_id().get(),
            date: draft.date(),
            time: draft.time(),
            user_name: draft.user_name(),
            user_phone: draft.user_phone(),
        }
    }
}

/// Insertable struct recording an applied migration step.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema_migrations)]
pub(crate) struct NewSchemaMigrationRow<'a> {
    pub version: i32,
    pub name: &'a str,
}
