use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Error raised when the environment does not describe a usable server.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// Everything except the database URL, the files service URL and the JWT
/// secret has a default suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8083`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Postgres connection string.
    pub database_url: String,
    /// Maximum pool size (default: `20`).
    pub db_max_connections: u32,
    /// Base URL of the external files service used to build asset URLs.
    pub files_api_url: String,
    pub log_format: LogFormat,
    /// JWT verification settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8083`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | required                   |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `FILES_API_URL`        | required                   |
    /// | `LOG_FORMAT`           | `text` (`text` or `json`)  |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = var_or("HOST", "0.0.0.0");
        let port = parsed("PORT", "8083")?;
        let cors_origins = parse_origins(&var_or("CORS_ORIGINS", "http://localhost:5173"));
        let request_timeout_secs = parsed("REQUEST_TIMEOUT_SECS", "30")?;
        let database_url = required("DATABASE_URL")?;
        let db_max_connections = parsed("DB_MAX_CONNECTIONS", "20")?;
        let files_api_url = required("FILES_API_URL")?
            .trim_end_matches('/')
            .to_string();
        let log_format = parsed("LOG_FORMAT", "text")?;
        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            db_max_connections,
            files_api_url,
            log_format,
            jwt,
        })
    }
}

/// Read `name`, falling back to `default` when unset.
pub(crate) fn var_or(name: &'static str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read a variable that must be present and non-empty.
pub(crate) fn required(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Read and parse `name`, falling back to `default` when unset.
pub(crate) fn parsed<T: FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = var_or(name, default);
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { var: name, value })
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn unset_variable_uses_default() {
        let value: u16 = parsed("FOLIO_TEST_UNSET_PORT", "8083").unwrap();
        assert_eq!(value, 8083);
    }

    #[test]
    fn invalid_number_names_the_variable() {
        std::env::set_var("FOLIO_TEST_BAD_PORT", "eighty");
        let err = parsed::<u16>("FOLIO_TEST_BAD_PORT", "8083").unwrap_err();
        assert_eq!(err.to_string(), "FOLIO_TEST_BAD_PORT has invalid value 'eighty'");
    }

    #[test]
    fn blank_required_variable_is_missing() {
        std::env::set_var("FOLIO_TEST_BLANK", "  ");
        assert!(matches!(
            required("FOLIO_TEST_BLANK"),
            Err(ConfigError::Missing("FOLIO_TEST_BLANK"))
        ));
    }
}
