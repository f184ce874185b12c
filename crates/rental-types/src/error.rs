//! Error types for vehicle-rental

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid scenario {}: {message}", path.display())]
    Scenario { path: PathBuf, message: String },

    #[error("No vehicle with plate {0}")]
    VehicleNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_error_mentions_path() {
        let err = Error::Scenario {
            path: PathBuf::from("fleet.toml"),
            message: "missing field `plate`".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("fleet.toml"));
        assert!(text.contains("missing field `plate`"));
    }

    #[test]
    fn test_config_error_wraps() {
        let err: Error = ConfigError::NotFound.into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Configuration directory not found"
        );
    }
}
