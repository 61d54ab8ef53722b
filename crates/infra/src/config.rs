//! Configuration loading and representation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "CABLESTOCK_BIND_ADDR";
pub const INVENTORY_FILE_VAR: &str = "CABLESTOCK_INVENTORY_FILE";
pub const LOG_FORMAT_VAR: &str = "CABLESTOCK_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var}: unknown log format {value:?} (expected `json` or `pretty`)")]
    InvalidLogFormat { var: &'static str, value: String },

    #[error("{var}: inventory file path cannot be empty")]
    EmptyInventoryPath { var: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format {0:?}")]
pub struct ParseLogFormatError(String);

/// How log lines are written.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            _ => Err(ParseLogFormatError(s.to_string())),
        }
    }
}

/// Process configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub inventory_path: PathBuf,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; unset keys take
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_raw.clone(),
            })?;

        let inventory_path =
            lookup(INVENTORY_FILE_VAR).unwrap_or_else(|| DEFAULT_INVENTORY_FILE.to_string());
        if inventory_path.trim().is_empty() {
            return Err(ConfigError::EmptyInventoryPath {
                var: INVENTORY_FILE_VAR,
            });
        }

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => raw.parse::<LogFormat>().map_err(|_| ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_VAR,
                value: raw.clone(),
            })?,
        };

        Ok(Self {
            bind_addr,
            inventory_path: PathBuf::from(inventory_path),
            log_format,
        })
    }

    /// Configuration for tests: ephemeral localhost port, given inventory file.
    pub fn for_inventory_file(path: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            inventory_path: path.into(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(cfg.inventory_path, PathBuf::from("inventory.txt"));
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (INVENTORY_FILE_VAR, "/var/lib/cablestock/stock.txt"),
            (LOG_FORMAT_VAR, "Pretty"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.inventory_path, PathBuf::from("/var/lib/cablestock/stock.txt"));
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn log_format_parse_errors_name_the_input() {
        assert_eq!(" JSON ".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Pretty));

        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err, ParseLogFormatError("xml".to_string()));
        assert_eq!(err.to_string(), r#"unknown log format "xml""#);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));

        let err = AppConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat { .. }));

        let err = AppConfig::from_lookup(lookup_from(&[(INVENTORY_FILE_VAR, " ")])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyInventoryPath { var: INVENTORY_FILE_VAR });
    }
}
