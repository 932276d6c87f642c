//! # Client Configuration
//!
//! This module manages client configuration loaded from environment variables
//! (optionally seeded from a `.env` file). Configuration is validated on startup
//! to fail fast if misconfigured.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `GROW_API_BASE_URL` | `http://127.0.0.1:3000/api` | Backend base URL |
//! | `GROW_CONNECT_TIMEOUT_SECS` | `30` | TCP/TLS connect bound |
//! | `GROW_READ_TIMEOUT_SECS` | `30` | Response read bound |
//! | `GROW_WRITE_TIMEOUT_SECS` | `30` | Request write bound |
//! | `GROW_CREDENTIALS_PATH` | `.grow/credentials.json` | Session file |
//!
//! Library code takes `&Config` explicitly. The process-wide instance behind
//! [`init_config()`] exists for binaries.

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use lib_utils::envs::{get_env_or, get_env_parse_or};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CREDENTIALS_PATH: &str = ".grow/credentials.json";

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL every endpoint path is appended to (no trailing slash)
    pub api_base_url: String,

    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,

    /// Where the file-backed credential store keeps the session
    pub credentials_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let api_base_url = get_env_or("GROW_API_BASE_URL", DEFAULT_API_BASE_URL)
            .trim()
            .trim_end_matches('/')
            .to_string();

        let connect_timeout = timeout_from_env("GROW_CONNECT_TIMEOUT_SECS")?;
        let read_timeout = timeout_from_env("GROW_READ_TIMEOUT_SECS")?;
        let write_timeout = timeout_from_env("GROW_WRITE_TIMEOUT_SECS")?;

        let credentials_path = PathBuf::from(get_env_or("GROW_CREDENTIALS_PATH", DEFAULT_CREDENTIALS_PATH));

        Ok(Self {
            api_base_url,
            connect_timeout,
            read_timeout,
            write_timeout,
            credentials_path,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(format!(
                "GROW_API_BASE_URL must start with http:// or https:// (got '{}')",
                self.api_base_url
            ));
        }

        if self.connect_timeout.is_zero() || self.read_timeout.is_zero() || self.write_timeout.is_zero() {
            return Err("Timeouts must be at least 1 second".to_string());
        }

        if self.credentials_path.as_os_str().is_empty() {
            return Err("GROW_CREDENTIALS_PATH must not be empty".to_string());
        }

        Ok(())
    }

    /// Upper bound for a whole request: connect, write the body, read the response.
    pub fn request_timeout(&self) -> Duration {
        self.connect_timeout + self.write_timeout + self.read_timeout
    }
}

fn timeout_from_env(name: &'static str) -> Result<Duration, String> {
    get_env_parse_or(name, DEFAULT_TIMEOUT_SECS)
        .map(Duration::from_secs)
        .map_err(|e| format!("{name} must be a whole number of seconds ({e})"))
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// Reads `.env` if present, then the environment, then validates.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are malformed
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<&'static Config, String> {
    // A missing .env file is the normal case
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| "Config has already been initialized".to_string())?;
    core_config().ok_or_else(|| "Config initialization did not persist".to_string())
}

/// Get the global configuration, if [`init_config()`] has run.
pub fn core_config() -> Option<&'static Config> {
    CONFIG.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(90));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = Config {
            api_base_url: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = Config {
            read_timeout: Duration::ZERO,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
