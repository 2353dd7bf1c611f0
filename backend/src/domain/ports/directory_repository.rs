//! Driven port for reading and maintaining the clinic directory.
//!
//! Adapters translate between storage rows and the domain [`Clinic`] and
//! [`Doctor`] types. Name filters are case-insensitive substring matches.

use async_trait::async_trait;

use crate::domain::{Clinic, ClinicId, ClinicSearch, Doctor, DoctorId, DoctorSearch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by directory repository adapters.
    pub enum DirectoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "directory connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "directory query failed: {message}",
    }
}

/// Port for clinic and doctor persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Clinics matching `search`, each with its doctors, in ascending id order.
    async fn list_clinics(
        &self,
        search: &ClinicSearch,
    ) -> Result<Vec<Clinic>, DirectoryRepositoryError>;

    /// Doctors matching every present filter, in ascending id order.
    async fn list_doctors(
        &self,
        search: &DoctorSearch,
    ) -> Result<Vec<Doctor>, DirectoryRepositoryError>;

    /// Clinic with its doctors, or `None` when the id is unknown.
    async fn find_clinic(&self, id: ClinicId) -> Result<Option<Clinic>, DirectoryRepositoryError>;

    /// Doctor by id, or `None` when the id is unknown.
    async fn find_doctor(&self, id: DoctorId) -> Result<Option<Doctor>, DirectoryRepositoryError>;

    /// Delete a clinic together with its doctors and every appointment that
    /// references either, atomically.
    ///
    /// Returns `false` when the clinic did not exist; nothing is deleted then.
    async fn remove_clinic(&self, id: ClinicId) -> Result<bool, DirectoryRepositoryError>;
}
