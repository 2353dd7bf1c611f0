//! Appointment API handlers.
//!
//! ```text
//! POST /make-appointment {"clinic_id":1,"doctor_id":2,"date":"2025-02-15",...}
//! POST /make-appointmet  (historical spelling, identical behaviour)
//! GET /appointments?user_phone=%2B1234567890
//! DELETE /appointments/7
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Appointment, AppointmentId, AppointmentSearch, ClinicId, DoctorId, NewAppointment,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for creating an appointment.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateAppointmentRequest {
    #[schema(example = 1)]
    pub clinic_id: i64,
    #[schema(example = 2)]
    pub doctor_id: i64,
    #[schema(example = "2025-02-15")]
    pub date: String,
    #[schema(example = "10:00")]
    pub time: String,
    #[schema(example = "John Doe")]
    pub user_name: String,
    #[schema(example = "+1234567890")]
    pub user_phone: String,
}

impl From<CreateAppointmentRequest> for NewAppointment {
    fn from(value: CreateAppointmentRequest) -> Self {
        Self::new(
            ClinicId::new(value.clinic_id),
            DoctorId::new(value.doctor_id),
            value.date,
            value.time,
            value.user_name,
            value.user_phone,
        )
    }
}

/// Appointment as returned by the booking endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub clinic_id: i64,
    #[schema(example = 2)]
    pub doctor_id: i64,
    #[schema(example = "2025-02-15")]
    pub date: String,
    #[schema(example = "10:00")]
    pub time: String,
    #[schema(example = "John Doe")]
    pub user_name: String,
    #[schema(example = "+1234567890")]
    pub user_phone: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.get(),
            clinic_id: appointment.clinic_id.get(),
            doctor_id: appointment.doctor_id.get(),
            date: appointment.date,
            time: appointment.time,
            user_name: appointment.user_name,
            user_phone: appointment.user_phone,
        }
    }
}

/// Query parameters for `GET /appointments`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentListQuery {
    /// Exact phone number; empty means no filter.
    pub user_phone: Option<String>,
}

async fn book(
    state: &HttpState,
    payload: CreateAppointmentRequest,
) -> ApiResult<HttpResponse> {
    let booked = state.appointments.book(payload.into()).await?;
    Ok(HttpResponse::Created().json(AppointmentResponse::from(booked)))
}

/// Book an appointment with a doctor at a clinic.
///
/// Double booking is permitted; no slot conflict check is made.
#[utoipa::path(
    post,
    path = "/make-appointment",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentResponse),
        (status = 400, description = "Doctor does not belong to the clinic", body = ErrorSchema),
        (status = 404, description = "Clinic or doctor not found", body = ErrorSchema),
        (status = 422, description = "Missing or mistyped fields", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["appointments"],
    operation_id = "makeAppointment"
)]
#[post("/make-appointment")]
pub async fn make_appointment(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAppointmentRequest>,
) -> ApiResult<HttpResponse> {
    book(&state, payload.into_inner()).await
}

/// Historical misspelt route kept for existing clients.
#[utoipa::path(
    post,
    path = "/make-appointmet",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentResponse),
        (status = 400, description = "Doctor does not belong to the clinic", body = ErrorSchema),
        (status = 404, description = "Clinic or doctor not found", body = ErrorSchema),
        (status = 422, description = "Missing or mistyped fields", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["appointments"],
    operation_id = "makeAppointmentLegacy"
)]
#[post("/make-appointmet")]
pub async fn make_appointment_legacy(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAppointmentRequest>,
) -> ApiResult<HttpResponse> {
    book(&state, payload.into_inner()).await
}

/// List appointments, newest first.
#[utoipa::path(
    get,
    path = "/appointments",
    params(AppointmentListQuery),
    responses(
        (status = 200, description = "Appointments in descending id order", body = [AppointmentResponse]),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["appointments"],
    operation_id = "listAppointments"
)]
#[get("/appointments")]
pub async fn list_appointments(
    state: web::Data<HttpState>,
    query: web::Query<AppointmentListQuery>,
) -> ApiResult<web::Json<Vec<AppointmentResponse>>> {
    let search = AppointmentSearch::by_phone(query.user_phone.as_deref());
    let appointments = state.appointments_query.list_appointments(&search).await?;
    Ok(web::Json(
        appointments
            .into_iter()
            .map(AppointmentResponse::from)
            .collect(),
    ))
}

/// Cancel an appointment by id.
#[utoipa::path(
    delete,
    path = "/appointments/{appointment_id}",
    params(("appointment_id" = i64, Path, description = "Appointment identifier")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 404, description = "Appointment not found", body = ErrorSchema),
        (status = 422, description = "Non-integer id", body = ErrorSchema)
    ),
    tags = ["appointments"],
    operation_id = "cancelAppointment"
)]
#[delete("/appointments/{appointment_id}")]
pub async fn cancel_appointment(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .appointments
        .cancel(AppointmentId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests;
