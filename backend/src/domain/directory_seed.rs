//! Reference data seeded into an empty directory.
//!
//! Every clinic in the catalog receives one doctor per template. Doctor
//! display names embed the clinic name so the same practitioner template is
//! distinguishable across clinics.

use std::sync::Arc;

use tracing::info;

use super::ports::{DirectorySeedRepository, DirectorySeedRepositoryError, SeedingResult};

/// Clinic names created by the seeding pass.
pub const CLINIC_NAMES: [&str; 5] = [
    "Sunrise Family Clinic",
    "Riverside Medical Center",
    "Green Valley Health",
    "Northside Community Clinic",
    "Lakeview Wellness Center",
];

/// Practitioner template copied into every seeded clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctorTemplate {
    pub name: &'static str,
    pub specialty: &'static str,
}

/// Doctor templates applied to each seeded clinic.
pub const DOCTOR_TEMPLATES: [DoctorTemplate; 5] = [
    DoctorTemplate {
        name: "Dr. Alex Morgan",
        specialty: "General Practice",
    },
    DoctorTemplate {
        name: "Dr. Priya Shah",
        specialty: "Cardiology",
    },
    DoctorTemplate {
        name: "Dr. Daniel Kim",
        specialty: "Dermatology",
    },
    DoctorTemplate {
        name: "Dr. Maria Lopez",
        specialty: "Pediatrics",
    },
    DoctorTemplate {
        name: "Dr. Samuel Okafor",
        specialty: "Orthopedics",
    },
];

/// Doctor row to insert for a seeded clinic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorSeed {
    pub name: String,
    pub specialty: String,
}

/// Clinic row to insert together with its doctors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicSeed {
    pub name: String,
    pub doctors: Vec<DoctorSeed>,
}

/// Complete set of rows written by one seeding pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySeedPlan {
    clinics: Vec<ClinicSeed>,
}

impl DirectorySeedPlan {
    /// Expand clinic names and doctor templates into concrete rows.
    ///
    /// # Examples
    /// ```
    /// use clinic_backend::domain::{DirectorySeedPlan, DoctorTemplate};
    ///
    /// let plan = DirectorySeedPlan::from_catalog(
    ///     &["Harbor Clinic"],
    ///     &[DoctorTemplate { name: "Dr. Ada Reyes", specialty: "Neurology" }],
    /// );
    /// assert_eq!(plan.clinics()[0].doctors[0].name, "Dr. Ada Reyes (Harbor Clinic)");
    /// ```
    #[must_use]
    pub fn from_catalog(clinic_names: &[&str], templates: &[DoctorTemplate]) -> Self {
        let clinics = clinic_names
            .iter()
            .map(|clinic_name| ClinicSeed {
                name: (*clinic_name).to_owned(),
                doctors: templates
                    .iter()
                    .map(|template| DoctorSeed {
                        name: format!("{} ({clinic_name})", template.name),
                        specialty: template.specialty.to_owned(),
                    })
                    .collect(),
            })
            .collect();
        Self { clinics }
    }

    /// Plan built from [`CLINIC_NAMES`] and [`DOCTOR_TEMPLATES`].
    #[must_use]
    pub fn standard() -> Self {
        Self::from_catalog(&CLINIC_NAMES, &DOCTOR_TEMPLATES)
    }

    #[must_use]
    pub fn clinics(&self) -> &[ClinicSeed] {
        &self.clinics
    }

    /// Total doctors across all clinics.
    #[must_use]
    pub fn doctor_count(&self) -> usize {
        self.clinics.iter().map(|clinic| clinic.doctors.len()).sum()
    }
}

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorySeedOutcome {
    /// Rows were inserted.
    Applied { clinics: usize, doctors: usize },
    /// The store already held clinics; nothing was written.
    AlreadySeeded,
}

/// Errors raised while seeding the directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectorySeedingError {
    #[error("directory seeding failed: {0}")]
    Persistence(#[from] DirectorySeedRepositoryError),
}

/// Applies a [`DirectorySeedPlan`] through the seed repository port.
#[derive(Clone)]
pub struct DirectorySeeder {
    repository: Arc<dyn DirectorySeedRepository>,
}

impl DirectorySeeder {
    pub fn new(repository: Arc<dyn DirectorySeedRepository>) -> Self {
        Self { repository }
    }

    /// Seed the directory unless it already holds clinics.
    ///
    /// # Errors
    /// Returns [`DirectorySeedingError::Persistence`] when the repository
    /// fails; no partial seed is left behind.
    pub async fn seed(
        &self,
        plan: &DirectorySeedPlan,
    ) -> Result<DirectorySeedOutcome, DirectorySeedingError> {
        let outcome = match self.repository.seed_directory(plan).await? {
            SeedingResult::Applied => DirectorySeedOutcome::Applied {
                clinics: plan.clinics().len(),
                doctors: plan.doctor_count(),
            },
            SeedingResult::AlreadySeeded => DirectorySeedOutcome::AlreadySeeded,
        };
        info!(?outcome, "directory seeding finished");
        Ok(outcome)
    }
}
