// Configuration Management
//
// This crate handles all configuration loading for the Starrr API.
// It provides:
// - Configuration structs for each concern (server, logging, catalog, cache)
// - Environment variable parsing
// - Default configuration values
//
// This keeps configuration concerns separate from the resolution logic.

use thiserror::Error;

pub mod types;

// Re-export all configuration types
pub use types::*;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, value: &str, reason: &str) -> Self {
        ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
