//! Runtime configuration from environment variables.
//!
//! Supported:
//! - SMARTRISK_LOG_MODE = file | stdout | auto
//! - SMARTRISK_LOG_FILE = path of the log file
//! - SMARTRISK_CACHE_CAPACITY = memoized assessments kept per session (0 disables)
//!
//! Invalid values are ignored and the default is kept.

use std::path::PathBuf;

/// Default number of memoized assessments.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// File when stdout is a terminal, stdout otherwise
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "file" => Some(Self::File),
            "stdout" => Some(Self::Stdout),
            _ => None,
        }
    }

    /// Resolve `Auto` given whether stdout is interactive.
    ///
    /// Writing logs to the terminal would corrupt the TUI's alternate screen.
    #[must_use]
    pub fn use_file(&self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    pub cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Auto,
            log_file: PathBuf::from("smartrisk.log"),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load config overrides from the process environment (best-effort).
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config overrides through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("SMARTRISK_LOG_MODE") {
            match LogMode::parse(&v) {
                Some(mode) => cfg.log_mode = mode,
                None => eprintln!("Ignoring invalid SMARTRISK_LOG_MODE={v:?}"),
            }
        }

        if let Some(v) = lookup("SMARTRISK_LOG_FILE") {
            let v = v.trim();
            if !v.is_empty() {
                cfg.log_file = PathBuf::from(v);
            }
        }

        if let Some(v) = lookup("SMARTRISK_CACHE_CAPACITY") {
            match v.trim().parse::<usize>() {
                Ok(n) => cfg.cache_capacity = n,
                Err(_) => eprintln!("Ignoring invalid SMARTRISK_CACHE_CAPACITY={v:?}"),
            }
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("SMARTRISK_LOG_MODE", "STDOUT"),
            ("SMARTRISK_LOG_FILE", "/tmp/risk.log"),
            ("SMARTRISK_CACHE_CAPACITY", "0"),
        ]));
        assert_eq!(cfg.log_mode, LogMode::Stdout);
        assert_eq!(cfg.log_file, PathBuf::from("/tmp/risk.log"));
        assert_eq!(cfg.cache_capacity, 0);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("SMARTRISK_LOG_MODE", "syslog"),
            ("SMARTRISK_CACHE_CAPACITY", "-3"),
        ]));
        assert_eq!(cfg.log_mode, LogMode::Auto);
        assert_eq!(cfg.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_log_mode_resolution() {
        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
    }
}
