//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed clinic directory and booking entities used
//! by the HTTP and persistence layers, plus the services that enforce the
//! booking rules. Keep types immutable and document invariants in each
//! type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Clinic, Doctor: directory reference data.
//! - Appointment, NewAppointment: bookings before and after persistence.
//! - DirectoryService, AppointmentService: use-cases behind the driving ports.

pub mod appointment;
mod appointment_service;
pub mod directory;
pub mod directory_seed;
mod directory_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::appointment::{Appointment, AppointmentId, AppointmentSearch, NewAppointment};
pub use self::appointment_service::AppointmentService;
pub use self::directory::{
    Clinic, ClinicId, ClinicSearch, DEFAULT_SPECIALTY, Doctor, DoctorId, DoctorSearch, NameFilter,
};
pub use self::directory_seed::{
    CLINIC_NAMES, ClinicSeed, DOCTOR_TEMPLATES, DirectorySeedOutcome, DirectorySeedPlan,
    DirectorySeeder, DirectorySeedingError, DoctorSeed, DoctorTemplate,
};
pub use self::directory_service::DirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use clinic_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Clinic not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
