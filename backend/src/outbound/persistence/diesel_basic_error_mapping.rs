//! Shared Diesel error mapping for the SQLite repositories.
//!
//! Every repository port exposes the same two failure variants, so adapters
//! pass their `connection` and `query` constructors into these helpers.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// SQLite reports lock contention that outlived `busy_timeout` with this
/// message and no dedicated error kind.
const DATABASE_LOCKED: &str = "database is locked";

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query/connection constructors.
///
/// Closed connections and lock timeouts are connection failures; everything
/// else is a query failure carrying the driver message.
pub(crate) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) if info.message().contains(DATABASE_LOCKED) => {
            connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => query(info.message().to_owned()),
        other => query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    fn map(error: DieselError) -> Mapped {
        map_basic_diesel_error(error, Mapped::Query, Mapped::Connection)
    }

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_basic_pool_error(PoolError::checkout("timed out"), Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection("timed out".to_owned()));
    }

    #[rstest]
    #[case(
        database_error(DatabaseErrorKind::ClosedConnection, "closed"),
        Mapped::Connection("closed".to_owned())
    )]
    #[case(
        database_error(DatabaseErrorKind::Unknown, "database is locked"),
        Mapped::Connection("database is locked".to_owned())
    )]
    #[case(
        database_error(DatabaseErrorKind::ForeignKeyViolation, "FOREIGN KEY constraint failed"),
        Mapped::Query("FOREIGN KEY constraint failed".to_owned())
    )]
    #[case(DieselError::NotFound, Mapped::Query("record not found".to_owned()))]
    fn diesel_errors_are_classified(#[case] error: DieselError, #[case] expected: Mapped) {
        assert_eq!(map(error), expected);
    }
}
