//! Directory use-cases backed by the directory repository port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ports::{DirectoryQuery, DirectoryRepository, DirectoryRepositoryError};
use super::{Clinic, ClinicId, ClinicSearch, Doctor, DoctorSearch, Error};

pub(crate) fn map_directory_error(error: DirectoryRepositoryError) -> Error {
    match error {
        DirectoryRepositoryError::Connection { message } => Error::service_unavailable(message),
        DirectoryRepositoryError::Query { message } => Error::internal(message),
    }
}

/// Implements [`DirectoryQuery`] and clinic maintenance over a repository.
#[derive(Clone)]
pub struct DirectoryService {
    repository: Arc<dyn DirectoryRepository>,
}

impl DirectoryService {
    pub fn new(repository: Arc<dyn DirectoryRepository>) -> Self {
        Self { repository }
    }

    /// Remove a clinic, its doctors, and their appointments in one step.
    ///
    /// # Errors
    /// `not_found` when the clinic does not exist; `service_unavailable` or
    /// `internal_error` when persistence fails.
    pub async fn remove_clinic(&self, id: ClinicId) -> Result<(), Error> {
        let removed = self
            .repository
            .remove_clinic(id)
            .await
            .map_err(map_directory_error)?;
        if !removed {
            return Err(Error::not_found("Clinic not found"));
        }
        info!(clinic_id = %id, "clinic removed with its doctors and appointments");
        Ok(())
    }
}

#[async_trait]
impl DirectoryQuery for DirectoryService {
    async fn list_clinics(&self, search: &ClinicSearch) -> Result<Vec<Clinic>, Error> {
        self.repository
            .list_clinics(search)
            .await
            .map_err(map_directory_error)
    }

    async fn list_doctors(&self, search: &DoctorSearch) -> Result<Vec<Doctor>, Error> {
        self.repository
            .list_doctors(search)
            .await
            .map_err(map_directory_error)
    }
}
