//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_LEVEL: &str = "client=info,grow=info,warn";
pub const LOG_FILE_NAME: &str = "grow.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory holding the rotated log files
    pub log_dir: PathBuf,
    /// Filter directive (e.g. "client=debug,info")
    pub log_level: String,
    /// Mirror events to stderr
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            log_dir: non_empty("GROW_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            log_level: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_to_stderr: non_empty("GROW_LOG_STDERR")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Path of today's log file before rotation suffixes are applied
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs/grow.log"));
    }

    #[test]
    fn test_reads_overrides() {
        let config = LogConfig::from_lookup(lookup(&[
            ("GROW_LOG_DIR", "/tmp/grow"),
            ("RUST_LOG", "client=debug"),
            ("GROW_LOG_STDERR", "1"),
        ]));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/grow"));
        assert!(config.is_debug_enabled());
        assert!(config.log_to_stderr);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = LogConfig::from_lookup(lookup(&[("RUST_LOG", "  "), ("GROW_LOG_STDERR", "0")]));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(!config.log_to_stderr);
    }
}
