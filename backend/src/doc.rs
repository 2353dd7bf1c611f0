//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: directory, appointment and health endpoints
//! - **Schemas**: request/response DTOs plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::appointments::{AppointmentResponse, CreateAppointmentRequest};
use crate::inbound::http::directory::{ClinicResponse, DoctorResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic directory API",
        description = "Clinics, doctors and appointment booking."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::directory::list_clinics,
        crate::inbound::http::directory::list_doctors,
        crate::inbound::http::appointments::make_appointment,
        crate::inbound::http::appointments::make_appointment_legacy,
        crate::inbound::http::appointments::list_appointments,
        crate::inbound::http::appointments::cancel_appointment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ClinicResponse,
        DoctorResponse,
        CreateAppointmentRequest,
        AppointmentResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "directory", description = "Clinic and doctor lookup"),
        (name = "appointments", description = "Appointment booking and cancellation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI document structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, "code")]
    #[case(ERROR_SCHEMA_NAME, "message")]
    #[case("ClinicResponse", "doctors")]
    #[case("DoctorResponse", "specialty")]
    #[case("AppointmentResponse", "user_phone")]
    #[case("CreateAppointmentRequest", "doctor_id")]
    fn registered_schemas_expose_fields(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/clinics")]
    #[case("/doctors")]
    #[case("/make-appointment")]
    #[case("/make-appointmet")]
    #[case("/appointments")]
    #[case("/appointments/{appointment_id}")]
    #[case("/health/ready")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
