use std::path::PathBuf;

use shared::error::{AppError, AppResult};
use shared::models::ServerCount;

/// Floor host configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | development / production |
/// | LOG_LEVEL | info | base tracing filter |
/// | LOG_JSON | false (true in production) | JSON console output |
/// | LOG_DIR | unset | enables rolling file logs |
/// | LOG_RETENTION_DAYS | 14 | app log retention |
/// | INITIAL_SERVER_COUNT | 1 | active servers at startup |
/// | EVENT_CHANNEL_CAPACITY | 1024 | event broadcast channel size |
/// | JOURNAL_LIMIT | 10000 | in-memory event journal cap |
///
/// # Example
///
/// ```ignore
/// INITIAL_SERVER_COUNT=3 LOG_DIR=/var/log/floor cargo run --bin floor-host
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    /// Rolling file logs are written here when set
    pub log_dir: Option<PathBuf>,
    pub log_retention_days: u64,
    pub initial_server_count: ServerCount,
    pub event_channel_capacity: usize,
    pub journal_limit: usize,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to their defaults, except
    /// `INITIAL_SERVER_COUNT` which must be within 1..=7 when set.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let is_production = environment == "production";

        let initial_server_count = match lookup("INITIAL_SERVER_COUNT") {
            Some(raw) => {
                let count = raw.trim().parse::<i64>().map_err(|_| {
                    AppError::config(format!("INITIAL_SERVER_COUNT is not a number: {raw}"))
                })?;
                ServerCount::new(count).map_err(|_| {
                    AppError::config(format!("INITIAL_SERVER_COUNT must be within 1..=7, got {count}"))
                })?
            }
            None => ServerCount::default(),
        };

        Ok(Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(is_production),
            log_dir: lookup("LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            log_retention_days: lookup("LOG_RETENTION_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(14),
            initial_server_count,
            event_channel_capacity: lookup("EVENT_CHANNEL_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(1024),
            journal_limit: lookup("JOURNAL_LIMIT")
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(10_000),
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            log_retention_days: 14,
            initial_server_count: ServerCount::default(),
            event_channel_capacity: 1024,
            journal_limit: 10_000,
        }
    }
}
