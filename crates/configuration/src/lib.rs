use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use settings::ServeOverrides;
pub use settings::{DatabaseSettings, DisplaySettings, LoggingSettings, ServerSettings, Settings};

/// Environment variables consulted for the connection string, in order.
pub const DATABASE_URL_VARS: [&str; 2] = ["DATABASE_URL", "POSTGRES_URL"];

/// Loads the application configuration from `config.toml` and the environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config.toml"), |name| std::env::var(name).ok())
}

/// Loads the configuration with explicit sources.
///
/// Layers, lowest priority first: built-in defaults, the TOML file at `path`
/// (optional), `APP__SECTION__KEY` environment variables. The connection
/// string is then taken from the first of [`DATABASE_URL_VARS`] that `lookup`
/// resolves.
pub fn load_settings_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("database.max_connections", 10)?
        .set_default("database.acquire_timeout_secs", 5)?
        .set_default("display.locale", "en-US")?
        .set_default("logging.level", "info")?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    let mut settings = builder.try_deserialize::<Settings>()?;

    if let Some(url) = DATABASE_URL_VARS.iter().find_map(|name| lookup(name)) {
        settings.database.url = Some(url);
    }

    settings.validate()?;
    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formatting::Locale;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("config.toml")).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        dir
    }

    #[test]
    fn defaults_apply_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("config.toml"), |_| None).unwrap();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.display.locale, Locale::EnUs);
        assert!(settings.database.url.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = write_config(
            r#"
            [server]
            port = 8080

            [display]
            locale = "en-GB"
            "#,
        );
        let settings = load_settings_from(&dir.path().join("config.toml"), |_| None).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.display.locale, Locale::EnGb);
    }

    #[test]
    fn database_url_prefers_database_url_over_postgres_url() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("config.toml"), |name| match name {
            "DATABASE_URL" => Some("postgres://primary".to_string()),
            "POSTGRES_URL" => Some("postgres://fallback".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.database.url.as_deref(), Some("postgres://primary"));

        let settings = load_settings_from(&dir.path().join("config.toml"), |name| {
            (name == "POSTGRES_URL").then(|| "postgres://fallback".to_string())
        })
        .unwrap();
        assert_eq!(settings.database.url.as_deref(), Some("postgres://fallback"));
    }

    #[test]
    fn rejects_zero_pool_size_and_unknown_locale() {
        let dir = write_config("[database]\nmax_connections = 0\n");
        assert!(matches!(
            load_settings_from(&dir.path().join("config.toml"), |_| None),
            Err(ConfigError::ValidationError(_))
        ));

        let dir = write_config("[display]\nlocale = \"xx-YY\"\n");
        assert!(matches!(
            load_settings_from(&dir.path().join("config.toml"), |_| None),
            Err(ConfigError::LoadError(_))
        ));
    }

    #[test]
    fn database_commands_require_a_connection_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let settings = load_settings_from(&path, |_| None).unwrap();
        assert!(settings.validate().is_ok());
        assert!(matches!(settings.validate_for_database(), Err(ConfigError::ValidationError(_))));

        let blank = load_settings_from(&path, |name| (name == "DATABASE_URL").then(|| "  ".to_string())).unwrap();
        assert!(blank.validate_for_database().is_err());

        let set = load_settings_from(&path, |name| {
            (name == "DATABASE_URL").then(|| "postgres://localhost/finboard".to_string())
        })
        .unwrap();
        assert!(set.validate_for_database().is_ok());
    }
}
