use crate::error::ConfigError;
use formatting::Locale;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::ValidationError(format!("server.host is not an IP address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Connection pool parameters for PostgreSQL.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Connection string. Filled from `DATABASE_URL` (or `POSTGRES_URL`) when set.
    #[serde(default)]
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    /// Locale that dates are rendered in, e.g. "en-US".
    pub locale: Locale,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        self.server.socket_addr()?;
        Ok(())
    }

    /// Validation for commands that talk to PostgreSQL. `serve --in-memory`
    /// skips it, so a connection string is only required here.
    pub fn validate_for_database(&self) -> Result<(), ConfigError> {
        self.validate()?;
        match self.database.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(()),
            _ => Err(ConfigError::ValidationError(
                "DATABASE_URL must be set unless serving in memory".to_string(),
            )),
        }
    }
}

/// Command-line overrides for `serve`.
#[cfg(feature = "clap")]
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServeOverrides {
    /// Address to bind, overriding `server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding `server.port`.
    #[arg(long)]
    pub port: Option<u16>,
}

#[cfg(feature = "clap")]
impl Settings {
    pub fn apply_overrides(&mut self, overrides: &ServeOverrides) {
        if let Some(host) = &overrides.host {
            self.server.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
    }
}
