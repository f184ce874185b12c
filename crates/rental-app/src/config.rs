//! Configuration management for vehicle-rental
//!
//! Config stored at: ~/.config/vehicle-rental/config.json

use std::fs;
use std::path::{Path, PathBuf};

use rental_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Scenario file used when none is given on the command line
    #[serde(default)]
    pub scenario_path: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            scenario_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("vehicle-rental");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vehicle Rental Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Scenario:       {}",
            self.scenario_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in demo)".to_string())
        )?;
        writeln!(f, "Log filter:     {}", self.log_filter)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            scenario_path: Some(PathBuf::from("/tmp/fleet.toml")),
            log_filter: "debug".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"output_format": "json"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.scenario_path, None);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_display_lists_settings() {
        let text = Config::default().to_string();
        assert!(text.contains("Output format:  table"));
        assert!(text.contains("(built-in demo)"));
    }
}
