//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `AUTOPARTS_HOST` - Bind address (default: 127.0.0.1)
//! - `AUTOPARTS_PORT` - Listen port (default: 3000)
//! - `AUTOPARTS_BASE_URL` - Public URL for the storefront (default: `http://localhost:3000`)
//! - `AUTOPARTS_CONTENT_DIR` - Markdown section panels (default: the crate's `content/`)
//! - `AUTOPARTS_STATIC_DIR` - Static assets (default: the crate's `static/`)
//! - `AUTOPARTS_SESSION_IDLE_MINUTES` - Session inactivity expiry (default: 1440)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_CONTENT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/content");
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding `sections/*.md`
    pub content_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Minutes of inactivity before a visitor's session (and cart) is dropped
    pub session_idle_minutes: i64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            session_idle_minutes: 24 * 60,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let session_idle_minutes: i64 = parse_env_or("AUTOPARTS_SESSION_IDLE_MINUTES", 24 * 60)?;
        if session_idle_minutes <= 0 {
            return Err(ConfigError::InvalidEnvVar(
                "AUTOPARTS_SESSION_IDLE_MINUTES".to_string(),
                "must be positive".to_string(),
            ));
        }

        Ok(Self {
            host: parse_env_or("AUTOPARTS_HOST", defaults.host)?,
            port: parse_env_or("AUTOPARTS_PORT", defaults.port)?,
            base_url: get_optional_env("AUTOPARTS_BASE_URL").unwrap_or(defaults.base_url),
            content_dir: get_optional_env("AUTOPARTS_CONTENT_DIR")
                .map_or(defaults.content_dir, PathBuf::from),
            static_dir: get_optional_env("AUTOPARTS_STATIC_DIR")
                .map_or(defaults.static_dir, PathBuf::from),
            session_idle_minutes,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: get_sample_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: get_sample_rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Inactivity period after which a session and its cart are dropped.
    #[must_use]
    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes.max(1).unsigned_abs() * 60)
    }

    /// Whether cookies must carry the `Secure` flag.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a Sentry sample rate and check it lies in `0.0..=1.0`.
fn get_sample_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    let rate = parse_env_or(key, default)?;
    validate_sample_rate(key, rate)
}

fn validate_sample_rate(key: &str, rate: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig::default();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_session_idle_duration() {
        let config = StorefrontConfig {
            session_idle_minutes: 30,
            ..Default::default()
        };
        assert_eq!(config.session_idle(), Duration::from_secs(30 * 60));
    }

    #[test]
    fn test_default_dirs_point_into_crate() {
        let config = StorefrontConfig::default();
        assert!(config.content_dir.ends_with("content"));
        assert!(config.static_dir.ends_with("static"));
    }

    #[test]
    fn test_is_secure_follows_base_url() {
        let mut config = StorefrontConfig::default();
        assert!(!config.is_secure());
        config.base_url = "https://autoparts.ru".to_string();
        assert!(config.is_secure());
    }

    #[test]
    fn test_parse_value_reports_key() {
        let err = parse_value::<u16>("AUTOPARTS_PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("AUTOPARTS_PORT"));
    }

    #[test]
    fn test_parse_value_trims() {
        let port: u16 = parse_value("AUTOPARTS_PORT", " 8080 ").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_sample_rate_range() {
        assert!(validate_sample_rate("SENTRY_SAMPLE_RATE", 0.0).is_ok());
        assert!(validate_sample_rate("SENTRY_SAMPLE_RATE", 1.0).is_ok());
        assert!(validate_sample_rate("SENTRY_SAMPLE_RATE", 1.5).is_err());
        assert!(validate_sample_rate("SENTRY_SAMPLE_RATE", -0.1).is_err());
    }
}
