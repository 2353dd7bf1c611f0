//! Directory API handlers.
//!
//! ```text
//! GET /clinics?q=river
//! GET /doctors?clinic_id=1&q=alex
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Clinic, ClinicId, ClinicSearch, Doctor, DoctorSearch, NameFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Query parameters for `GET /clinics`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClinicListQuery {
    /// Case-insensitive substring of the clinic name; empty means no filter.
    pub q: Option<String>,
}

/// Query parameters for `GET /doctors`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DoctorListQuery {
    /// Case-insensitive substring of the doctor name; empty means no filter.
    pub q: Option<String>,
    /// Only doctors of this clinic.
    pub clinic_id: Option<i64>,
}

/// Doctor as returned by the directory endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DoctorResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub clinic_id: i64,
    #[schema(example = "Dr. Priya Shah (Sunrise Family Clinic)")]
    pub name: String,
    #[schema(example = "Cardiology")]
    pub specialty: String,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.get(),
            clinic_id: doctor.clinic_id.get(),
            name: doctor.name,
            specialty: doctor.specialty,
        }
    }
}

/// Clinic with its doctors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClinicResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Sunrise Family Clinic")]
    pub name: String,
    pub doctors: Vec<DoctorResponse>,
}

impl From<Clinic> for ClinicResponse {
    fn from(clinic: Clinic) -> Self {
        Self {
            id: clinic.id.get(),
            name: clinic.name,
            doctors: clinic.doctors.into_iter().map(DoctorResponse::from).collect(),
        }
    }
}

/// List clinics, optionally filtered by name.
#[utoipa::path(
    get,
    path = "/clinics",
    params(ClinicListQuery),
    responses(
        (status = 200, description = "Clinics in ascending id order", body = [ClinicResponse]),
        (status = 422, description = "Malformed query", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["directory"],
    operation_id = "listClinics"
)]
#[get("/clinics")]
pub async fn list_clinics(
    state: web::Data<HttpState>,
    query: web::Query<ClinicListQuery>,
) -> ApiResult<web::Json<Vec<ClinicResponse>>> {
    let search = ClinicSearch {
        name: NameFilter::parse(query.q.as_deref()),
    };
    let clinics = state.directory.list_clinics(&search).await?;
    Ok(web::Json(
        clinics.into_iter().map(ClinicResponse::from).collect(),
    ))
}

/// List doctors, optionally filtered by clinic and name.
///
/// An unknown `clinic_id` yields an empty list rather than an error.
#[utoipa::path(
    get,
    path = "/doctors",
    params(DoctorListQuery),
    responses(
        (status = 200, description = "Doctors in ascending id order", body = [DoctorResponse]),
        (status = 422, description = "Non-integer clinic_id", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["directory"],
    operation_id = "listDoctors"
)]
#[get("/doctors")]
pub async fn list_doctors(
    state: web::Data<HttpState>,
    query: web::Query<DoctorListQuery>,
) -> ApiResult<web::Json<Vec<DoctorResponse>>> {
    let search = DoctorSearch {
        clinic_id: query.clinic_id.map(ClinicId::new),
        name: NameFilter::parse(query.q.as_deref()),
    };
    let doctors = state.directory.list_doctors(&search).await?;
    Ok(web::Json(
        doctors.into_iter().map(DoctorResponse::from).collect(),
    ))
}
