//! Environment-driven service configuration.

use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err("expected `pretty` or `json`".to_owned()),
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        /// Environment variable name.
        var: &'static str,
        /// Raw value.
        value: String,
        /// Parser message.
        reason: String,
    },
}

/// Runtime configuration of the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// `PostgreSQL` URL (`DATABASE_URL`). `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum pooled connections (`TASKTRAIL_DB_POOL_SIZE`).
    pub pool_size: u32,
    /// Log output format (`TASKTRAIL_LOG_FORMAT`).
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unparsable variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unparsable variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            host: read("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", read("PORT"))?.unwrap_or(defaults.port),
            database_url: read("DATABASE_URL"),
            pool_size: parse_var("TASKTRAIL_DB_POOL_SIZE", read("TASKTRAIL_DB_POOL_SIZE"))?
                .unwrap_or(defaults.pool_size),
            log_format: parse_var("TASKTRAIL_LOG_FORMAT", read("TASKTRAIL_LOG_FORMAT"))?
                .unwrap_or(defaults.log_format),
        })
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_var<T>(var: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    raw.map(|value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|err| ConfigError::InvalidValue {
                var,
                reason: err.to_string(),
                value,
            })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, LogFormat, ServiceConfig};
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[])).expect("defaults are valid");
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_addr(), ("0.0.0.0", 8000));
    }

    #[test]
    fn variables_override_defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DATABASE_URL", "postgres://localhost/tasktrail"),
            ("TASKTRAIL_DB_POOL_SIZE", "4"),
            ("TASKTRAIL_LOG_FORMAT", "JSON"),
        ]))
        .expect("valid config");

        assert_eq!(config.bind_addr(), ("127.0.0.1", 9000));
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/tasktrail")
        );
        assert_eq!(config.pool_size, 4);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn empty_database_url_selects_memory_store() {
        let config =
            ServiceConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).expect("valid config");
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = ServiceConfig::from_lookup(lookup(&[("PORT", "eighty")]))
            .expect_err("port must be numeric");
        assert!(matches!(err, ConfigError::InvalidValue { var: "PORT", .. }));
    }

    #[test]
    fn unknown_log_format_is_reported() {
        let err = ServiceConfig::from_lookup(lookup(&[("TASKTRAIL_LOG_FORMAT", "xml")]))
            .expect_err("format must be known");
        assert_eq!(
            err.to_string(),
            "invalid value \"xml\" for TASKTRAIL_LOG_FORMAT: expected `pretty` or `json`"
        );
    }
}
