//! Driving port for directory reads.
//!
//! HTTP handlers depend on this use-case port rather than on persistence, so
//! they can be exercised with a mock.

use async_trait::async_trait;

use crate::domain::{Clinic, ClinicSearch, Doctor, DoctorSearch, Error};

/// Use-case port for browsing clinics and doctors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// List clinics with nested doctors. Never fails for an empty result.
    async fn list_clinics(&self, search: &ClinicSearch) -> Result<Vec<Clinic>, Error>;

    /// List doctors. An unknown clinic id yields an empty list, not an error.
    async fn list_doctors(&self, search: &DoctorSearch) -> Result<Vec<Doctor>, Error>;
}
