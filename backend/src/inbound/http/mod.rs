//! HTTP inbound adapter exposing REST endpoints.

pub mod appointments;
pub mod directory;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register extractor error handlers and every REST endpoint.
///
/// Callers supply [`state::HttpState`] and [`health::HealthState`] as app
/// data and wrap the app with [`crate::Trace`].
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use clinic_backend::{Trace, inbound::http::configure};
///
/// let app = App::new().wrap(Trace).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::query_config())
        .app_data(validation::path_config())
        .service(directory::list_clinics)
        .service(directory::list_doctors)
        .service(appointments::make_appointment)
        .service(appointments::make_appointment_legacy)
        .service(appointments::list_appointments)
        .service(appointments::cancel_appointment)
        .service(health::ready)
        .service(health::live);
}
