//! Appointment booking model.
//!
//! An appointment links a requester to a doctor at a clinic for an opaque
//! date and time. No overlap check is modelled: several appointments may
//! share the same doctor, date and time.

use serde::{Deserialize, Serialize};

use super::directory::{ClinicId, DoctorId, define_entity_id};

define_entity_id! {
    /// Surrogate key of an appointment; higher ids were created later.
    AppointmentId
}

/// Persisted booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub clinic_id: ClinicId,
    pub doctor_id: DoctorId,
    pub date: String,
    pub time: String,
    pub user_name: String,
    pub user_phone: String,
}

/// Booking request awaiting persistence.
///
/// Text fields are kept exactly as supplied, surrounding whitespace and
/// empty strings included. Whether the clinic and doctor exist, and belong
/// together, is checked by the booking service rather than here.
///
/// # Examples
/// ```
/// use clinic_backend::domain::{ClinicId, DoctorId, NewAppointment};
///
/// let draft = NewAppointment::new(
///     ClinicId::new(1),
///     DoctorId::new(2),
///     "2025-02-15",
///     "10:00",
///     " John Doe ",
///     "+1234567890",
/// );
/// assert_eq!(draft.user_name(), " John Doe ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    clinic_id: ClinicId,
    doctor_id: DoctorId,
    date: String,
    time: String,
    user_name: String,
    user_phone: String,
}

impl NewAppointment {
    #[must_use]
    pub fn new(
        clinic_id: ClinicId,
        doctor_id: DoctorId,
        date: impl Into<String>,
        time: impl Into<String>,
        user_name: impl Into<String>,
        user_phone: impl Into<String>,
    ) -> Self {
        Self {
            clinic_id,
            doctor_id,
            date: date.into(),
            time: time.into(),
            user_name: user_name.into(),
            user_phone: user_phone.into(),
        }
    }

    #[must_use]
    pub const fn clinic_id(&self) -> ClinicId {
        self.clinic_id
    }

    #[must_use]
    pub const fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    #[must_use]
    pub fn user_phone(&self) -> &str {
        &self.user_phone
    }
}

/// Criteria for listing appointments.
///
/// `user_phone` is an exact match; an empty value means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentSearch {
    user_phone: Option<String>,
}

impl AppointmentSearch {
    /// Build a search from an optional raw phone number.
    #[must_use]
    pub fn by_phone(raw: Option<&str>) -> Self {
        Self {
            user_phone: raw
                .filter(|phone| !phone.is_empty())
                .map(str::to_owned),
        }
    }

    /// Exact phone number to match, if filtering.
    #[must_use]
    pub fn user_phone(&self) -> Option<&str> {
        self.user_phone.as_deref()
    }
}
