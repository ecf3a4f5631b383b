//! Environment-driven configuration
//!
//! Both config types are built from a lookup function so tests can feed a
//! map instead of mutating the process environment. Empty values are treated
//! as unset.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default database port
const DEFAULT_DB_PORT: u16 = 5432;

/// Default listening port
const DEFAULT_HTTP_PORT: u16 = 3000;

/// Connect and per-statement timeouts default to 30 seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Kept low: one statement per request, no long-held connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not set")]
    Missing { var: &'static str },

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// TLS negotiation mode for the store connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    Disable,
    #[default]
    Prefer,
    Require,
}

impl FromStr for SslMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "disable" => Ok(Self::Disable),
            "prefer" => Ok(Self::Prefer),
            "require" => Ok(Self::Require),
            other => Err(format!("expected disable, prefer or require, got '{}'", other)),
        }
    }
}

/// Database connection settings
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub ssl_mode: SslMode,
    /// Bound on establishing (or acquiring) a connection
    pub connect_timeout: Duration,
    /// Bound on a single statement, enforced server-side
    pub request_timeout: Duration,
    pub max_connections: u32,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ssl_mode", &self.ssl_mode)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DbConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `DB_HOST`, `DB_NAME`, `DB_USER`
    /// or `DB_PASSWORD` is absent, and [`ConfigError::Invalid`] when an
    /// optional value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        Ok(Self {
            host: vars.required("DB_HOST")?,
            database: vars.required("DB_NAME")?,
            username: vars.required("DB_USER")?,
            password: vars.required("DB_PASSWORD")?,
            port: vars.parsed("DB_PORT")?.unwrap_or(DEFAULT_DB_PORT),
            ssl_mode: vars.parsed("DB_SSL_MODE")?.unwrap_or_default(),
            connect_timeout: Duration::from_secs(
                vars.parsed("DB_CONNECT_TIMEOUT_SECS")?
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            request_timeout: Duration::from_secs(
                vars.parsed("DB_REQUEST_TIMEOUT_SECS")?
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            max_connections: vars
                .parsed("DB_MAX_CONNECTIONS")?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        })
    }
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3000, loopback only; set
    /// `HOST=0.0.0.0` to accept connections from other hosts or containers)
    pub bind_addr: SocketAddr,

    /// Directory served as static files for paths no route claims
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_HTTP_PORT),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment (`HOST`, `PORT`, `STATIC_DIR`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);
        let defaults = Self::default();

        let host: IpAddr = vars.parsed("HOST")?.unwrap_or(defaults.bind_addr.ip());
        let port: u16 = vars.parsed("PORT")?.unwrap_or(defaults.bind_addr.port());

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            static_dir: vars.get("STATIC_DIR").map(PathBuf::from),
        })
    }
}

struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, var: &str) -> Option<String> {
        (self.0)(var)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, var: &'static str) -> Result<String, ConfigError> {
        self.get(var).ok_or(ConfigError::Missing { var })
    }

    fn parsed<T>(&self, var: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.get(var)
            .map(|value| {
                value.parse().map_err(|e: T::Err| ConfigError::Invalid {
                    var,
                    reason: e.to_string(),
                    value,
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("DB_HOST", "db.internal"),
        ("DB_NAME", "people"),
        ("DB_USER", "svc"),
        ("DB_PASSWORD", "hunter2"),
    ];

    #[test]
    fn db_config_defaults() {
        let config = DbConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 5432);
        assert_eq!(config.ssl_mode, SslMode::Prefer);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn db_config_missing_password() {
        let err = DbConfig::from_lookup(lookup(&REQUIRED[..3])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { var: "DB_PASSWORD" }));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs[0] = ("DB_HOST", "   ");
        let err = DbConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { var: "DB_HOST" }));
    }

    #[test]
    fn db_config_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("DB_PORT", "6543"),
            ("DB_SSL_MODE", "REQUIRE"),
            ("DB_REQUEST_TIMEOUT_SECS", "5"),
        ]);
        let config = DbConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.port, 6543);
        assert_eq!(config.ssl_mode, SslMode::Require);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn db_config_invalid_port() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("DB_PORT", "not-a-port"));
        let err = DbConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_PORT", .. }));
    }

    #[test]
    fn debug_redacts_password() {
        let config = DbConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn server_config_default() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(config.bind_addr.ip().is_loopback());
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn server_config_from_vars() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("STATIC_DIR", "./public"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.static_dir, Some(PathBuf::from("./public")));
    }
}
