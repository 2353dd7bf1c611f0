//! Versioned schema migrations for the directory database.
//!
//! Each [`SchemaMigration`] step runs in its own transaction and records
//! itself in the `schema_migrations` ledger in that same transaction. Steps
//! are written to tolerate databases created before the ledger existed, so
//! replaying a step against such a database leaves it unchanged.

use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl, SimpleAsyncConnection};
use tracing::{debug, info};

use crate::domain::DEFAULT_SPECIALTY;

use super::models::NewSchemaMigrationRow;
use super::pool::{DbPool, PoolError, SqliteConn};
use super::schema::schema_migrations;

const CREATE_LEDGER: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);";

const CREATE_DIRECTORY_TABLES: &str = "
CREATE TABLE IF NOT EXISTS clinics (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS doctors (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    clinic_id INTEGER NOT NULL REFERENCES clinics (id),
    name TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    clinic_id INTEGER NOT NULL REFERENCES clinics (id),
    doctor_id INTEGER NOT NULL REFERENCES doctors (id),
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    user_name TEXT NOT NULL,
    user_phone TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_doctors_clinic_id ON doctors (clinic_id);
CREATE INDEX IF NOT EXISTS idx_appointments_clinic_id ON appointments (clinic_id);
CREATE INDEX IF NOT EXISTS idx_appointments_doctor_id ON appointments (doctor_id);
CREATE INDEX IF NOT EXISTS idx_appointments_user_phone ON appointments (user_phone);
";

/// Errors raised while migrating the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// No connection could be checked out.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// The ledger could not be created or read.
    #[error("failed to read migration ledger: {message}")]
    Ledger { message: String },

    /// A step failed and was rolled back.
    #[error("migration {version} ({name}) failed: {message}")]
    Step {
        version: i32,
        name: &'static str,
        message: String,
    },
}

/// Schema steps in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMigration {
    /// Clinics, doctors (without specialty) and appointments.
    CreateDirectoryTables,
    /// `doctors.specialty`, defaulted for existing rows.
    AddDoctorSpecialty,
}

impl SchemaMigration {
    /// Every step, ordered by version.
    pub const ALL: [Self; 2] = [Self::CreateDirectoryTables, Self::AddDoctorSpecialty];

    #[must_use]
    pub const fn version(self) -> i32 {
        match self {
            Self::CreateDirectoryTables => 1,
            Self::AddDoctorSpecialty => 2,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateDirectoryTables => "create_directory_tables",
            Self::AddDoctorSpecialty => "add_doctor_specialty",
        }
    }

    async fn apply(self, conn: &mut SqliteConn) -> QueryResult<()> {
        match self {
            Self::CreateDirectoryTables => conn.batch_execute(CREATE_DIRECTORY_TABLES).await,
            Self::AddDoctorSpecialty => {
                if table_has_column(conn, "doctors", "specialty").await? {
                    debug!("doctors.specialty already present");
                    return Ok(());
                }
                conn.batch_execute(&format!(
                    "ALTER TABLE doctors ADD COLUMN specialty TEXT NOT NULL DEFAULT '{DEFAULT_SPECIALTY}';"
                ))
                .await
            }
        }
    }
}

#[derive(QueryableByName)]
struct TableColumn {
    #[diesel(sql_type = Text)]
    name: String,
}

async fn table_has_column(conn: &mut SqliteConn, table: &str, column: &str) -> QueryResult<bool> {
    let columns: Vec<TableColumn> = diesel::sql_query("SELECT name FROM pragma_table_info(?)")
        .bind::<Text, _>(table)
        .load(conn)
        .await?;
    Ok(columns.iter().any(|candidate| candidate.name == column))
}

/// Apply every step not yet recorded in the ledger.
///
/// Returns the steps applied by this call, which is empty when the schema
/// was already current.
///
/// # Errors
/// [`MigrationError::Step`] names the failing step; earlier steps stay
/// applied.
pub async fn run_pending_migrations(pool: &DbPool) -> Result<Vec<SchemaMigration>, MigrationError> {
    let mut pooled = pool.get().await?;
    let conn: &mut SqliteConn = &mut pooled;
    conn.batch_execute(CREATE_LEDGER)
        .await
        .map_err(|err| MigrationError::Ledger {
            message: err.to_string(),
        })?;

    let applied: Vec<i32> = schema_migrations::table
        .select(schema_migrations::version)
        .load(conn)
        .await
        .map_err(|err| MigrationError::Ledger {
            message: err.to_string(),
        })?;

    let mut newly_applied = Vec::new();
    for step in SchemaMigration::ALL {
        if applied.contains(&step.version()) {
            continue;
        }
        conn.transaction(|conn| {
            async move {
                step.apply(conn).await?;
                diesel::insert_into(schema_migrations::table)
                    .values(&NewSchemaMigrationRow {
                        version: step.version(),
                        name: step.name(),
                    })
                    .execute(conn)
                    .await?;
                Ok::<_, diesel::result::Error>(())
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| MigrationError::Step {
            version: step.version(),
            name: step.name(),
            message: err.to_string(),
        })?;
        info!(version = step.version(), name = step.name(), "applied schema migration");
        newly_applied.push(step);
    }

    if newly_applied.is_empty() {
        debug!("schema already current");
    }
    Ok(newly_applied)
}
