//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are what inbound adapters call.
//! Driven ports (`*Repository`) are what outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod appointment_command;
mod appointment_query;
mod appointment_repository;
mod directory_query;
mod directory_repository;
mod directory_seed_repository;

pub use appointment_command::AppointmentCommand;
#[cfg(test)]
pub use appointment_command::MockAppointmentCommand;
pub use appointment_query::AppointmentQuery;
#[cfg(test)]
pub use appointment_query::MockAppointmentQuery;
#[cfg(test)]
pub use appointment_repository::MockAppointmentRepository;
pub use appointment_repository::{AppointmentRepository, AppointmentRepositoryError};
pub use directory_query::DirectoryQuery;
#[cfg(test)]
pub use directory_query::MockDirectoryQuery;
#[cfg(test)]
pub use directory_repository::MockDirectoryRepository;
pub use directory_repository::{DirectoryRepository, DirectoryRepositoryError};
#[cfg(test)]
pub use directory_seed_repository::MockDirectorySeedRepository;
pub use directory_seed_repository::{
    DirectorySeedRepository, DirectorySeedRepositoryError, SeedingResult,
};
