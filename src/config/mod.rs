//! Configuration management for quill.
//!
//! Configuration is read from `~/.config/quill/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created. Changes made through the interactive Configure menu live for
//! the current run only and are never written back.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::source::quote_garden::QUOTE_GARDEN_URL;

/// Quotes shown per page unless overridden by config or `--limit`.
pub const DEFAULT_PAGE_LIMIT: u32 = 9;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
}

/// Settings for the remote quote source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub page_limit: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: QUOTE_GARDEN_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/quill/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("quill").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        format!(
            r##"# Quill Configuration

[source]
# Base URL of the QuoteGarden-compatible API.
base_url = "{QUOTE_GARDEN_URL}"

# Quotes shown per page when browsing results.
page_limit = {DEFAULT_PAGE_LIMIT}
"##
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.source.base_url, QUOTE_GARDEN_URL);
        assert_eq!(config.source.page_limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[source]
page_limit = 6
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom value
        assert_eq!(config.source.page_limit, 6);
        // Default value
        assert_eq!(config.source.base_url, QUOTE_GARDEN_URL);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.source.base_url, QUOTE_GARDEN_URL);
        assert_eq!(config.source.page_limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[source]\nbase_url = \"http://localhost:9000\"\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.source.base_url, "http://localhost:9000");
        assert_eq!(config.source.page_limit, DEFAULT_PAGE_LIMIT);
    }
}
