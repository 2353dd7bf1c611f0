//! Clinic and doctor directory model.
//!
//! Clinics and doctors are reference data: they are created by the seeding
//! pass and read by the directory endpoints. Identifiers are surrogate keys
//! assigned by the store.

use serde::{Deserialize, Serialize};

/// Specialty recorded for doctors that predate the specialty column.
pub const DEFAULT_SPECIALTY: &str = "General";

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store identifier.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Raw store identifier.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_entity_id! {
    /// Surrogate key of a clinic.
    ClinicId
}

define_entity_id! {
    /// Surrogate key of a doctor.
    DoctorId
}

pub(crate) use define_entity_id;

/// Practitioner affiliated with exactly one clinic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: DoctorId,
    pub clinic_id: ClinicId,
    pub name: String,
    pub specialty: String,
}

/// Named facility together with the doctors it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clinic {
    pub id: ClinicId,
    pub name: String,
    pub doctors: Vec<Doctor>,
}

impl Clinic {
    /// Whether `doctor` is affiliated with this clinic.
    #[must_use]
    pub fn employs(&self, doctor: &Doctor) -> bool {
        doctor.clinic_id == self.id
    }
}

/// Case-insensitive substring filter applied to entity names.
///
/// Only absent or empty input means "no filter"; any other term, whitespace
/// included, is matched as given.
///
/// # Examples
/// ```
/// use clinic_backend::domain::NameFilter;
///
/// let filter = NameFilter::parse(Some("river ")).expect("non-empty filter");
/// assert_eq!(filter.as_str(), "river ");
/// assert!(NameFilter::parse(Some("")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter(String);

impl NameFilter {
    /// Build a filter from optional raw input, dropping empty values.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.filter(|term| !term.is_empty())
            .map(|term| Self(term.to_owned()))
    }

    /// Search term as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Criteria for listing clinics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicSearch {
    pub name: Option<NameFilter>,
}

/// Criteria for listing doctors; present filters combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorSearch {
    pub clinic_id: Option<ClinicId>,
    pub name: Option<NameFilter>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn doctor(clinic: i64, name: &str) -> Doctor {
        Doctor {
            id: DoctorId::new(1),
            clinic_id: ClinicId::new(clinic),
            name: name.to_owned(),
            specialty: DEFAULT_SPECIALTY.to_owned(),
        }
    }

    #[rstest]
    #[case("Alex", "Alex")]
    #[case("  Alex ", "  Alex ")]
    #[case("   ", "   ")]
    fn filters_keep_the_exact_term(#[case] raw: &str, #[case] expected: &str) {
        let filter = NameFilter::parse(Some(raw)).expect("non-empty");
        assert_eq!(filter.as_str(), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn empty_filters_are_dropped(#[case] raw: Option<&str>) {
        assert!(NameFilter::parse(raw).is_none());
    }

    #[rstest]
    fn clinic_employs_only_its_doctors() {
        let clinic = Clinic {
            id: ClinicId::new(3),
            name: "Green Valley Health".to_owned(),
            doctors: Vec::new(),
        };
        assert!(clinic.employs(&doctor(3, "Dr. Daniel Kim")));
        assert!(!clinic.employs(&doctor(4, "Dr. Daniel Kim")));
    }
}
