//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AppointmentCommand, AppointmentQuery, DirectoryQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub directory: Arc<dyn DirectoryQuery>,
    pub appointments: Arc<dyn AppointmentCommand>,
    pub appointments_query: Arc<dyn AppointmentQuery>,
}

impl HttpState {
    /// Construct state from the port implementations.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use clinic_backend::domain::{AppointmentService, DirectoryService};
    /// use clinic_backend::inbound::http::state::HttpState;
    /// use clinic_backend::outbound::persistence::{
    ///     DbPool, DieselAppointmentRepository, DieselDirectoryRepository, PoolConfig,
    /// };
    ///
    /// # async fn build() -> Result<HttpState, Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("database.sqlite3")).await?;
    /// let directory = Arc::new(DieselDirectoryRepository::new(pool.clone()));
    /// let bookings = Arc::new(AppointmentService::new(
    ///     directory.clone(),
    ///     Arc::new(DieselAppointmentRepository::new(pool)),
    /// ));
    /// Ok(HttpState::new(
    ///     Arc::new(DirectoryService::new(directory)),
    ///     bookings.clone(),
    ///     bookings,
    /// ))
    /// # }
    /// ```
    pub fn new(
        directory: Arc<dyn DirectoryQuery>,
        appointments: Arc<dyn AppointmentCommand>,
        appointments_query: Arc<dyn AppointmentQuery>,
    ) -> Self {
        Self {
            directory,
            appointments,
            appointments_query,
        }
    }
}
