//! Process configuration read from the environment.

use thiserror::Error;

pub const BUFFER_SIZE_VAR: &str = "EMPLOYEE_SERVICE_BUFFER_SIZE";
pub const LOG_FILTER_VAR: &str = "EMPLOYEE_SERVICE_LOG";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("EMPLOYEE_SERVICE_BUFFER_SIZE must be a positive integer, got {0:?}")]
    InvalidBufferSize(String),
}

/// Settings for [`EmployeeSystem`](crate::app_system::EmployeeSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the store actor's request channel.
    pub buffer_size: usize,
    /// Default `tracing` filter, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, defaulting unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BUFFER_SIZE_VAR) {
            config.buffer_size = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidBufferSize(raw)),
            };
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
