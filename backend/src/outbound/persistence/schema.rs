//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the tables created by the migration runner
//! in `migrations.rs`. The `specialty` column is added by the second
//! migration step. Keys are read as 64-bit integers, SQLite's rowid width.

diesel::table! {
    /// Medical facilities.
    clinics (id) {
        id -> BigInt,
        /// Unique display name.
        name -> Text,
    }
}

diesel::table! {
    /// Practitioners; each belongs to exactly one clinic.
    doctors (id) {
        id -> BigInt,
        clinic_id -> BigInt,
        name -> Text,
        specialty -> Text,
    }
}

diesel::table! {
    /// Bookings. `date` and `time` are opaque strings.
    appointments (id) {
        id -> BigInt,
        clinic_id -> BigInt,
        doctor_id -> BigInt,
        date -> Text,
        time -> Text,
        user_name -> Text,
        user_phone -> Text,
    }
}

diesel::table! {
    /// Ledger of applied migration steps.
    schema_migrations (version) {
        version -> Integer,
        name -> Text,
        applied_at -> Text,
    }
}

diesel::joinable!(doctors -> clinics (clinic_id));
diesel::joinable!(appointments -> doctors (doctor_id));

diesel::allow_tables_to_appear_in_same_query!(clinics, doctors, appointments);
