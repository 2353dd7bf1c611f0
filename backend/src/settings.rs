//! Application configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `CLINIC_*` environment variables over the
//! defaults below.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "database.sqlite3";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_POOL_MAX_SIZE: u32 = 8;

/// Errors raised while turning settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `host` is not an IP address.
    #[error("invalid bind host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
    /// The pool would hold no connections.
    #[error("pool_max_size must be at least 1")]
    EmptyPool,
}

/// Configuration values for the clinic backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLINIC")]
pub struct AppSettings {
    /// SQLite database file path.
    pub database_url: Option<String>,
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seed the clinic catalog when the database holds no clinics.
    #[ortho_config(default = true)]
    pub seed_on_startup: bool,
}

impl AppSettings {
    /// Return the configured database path, falling back to the default.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the validated pool size, falling back to the default.
    ///
    /// # Errors
    /// [`SettingsError::EmptyPool`] when configured as zero.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE) {
            0 => Err(SettingsError::EmptyPool),
            size => Ok(size),
        }
    }

    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    /// [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
