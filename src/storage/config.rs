//! Configuration handling
//!
//! Configuration is read from `config.toml` in the platform config
//! directory (e.g. `~/.config/assistant/config.toml`), or from an explicit
//! path. Every key is optional:
//!
//! ```toml
//! data_file = "/home/me/contacts.json"
//! birthday_window_days = 7
//! default_format = "text"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::domain::DEFAULT_WINDOW_DAYS;

/// File name of the snapshot inside the data directory
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot location (defaults to the platform data directory)
    pub data_file: Option<PathBuf>,

    /// Days ahead covered by the `birthdays` command
    pub birthday_window_days: u32,

    /// Output format when `--format` is not given
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            default_format: OutputFormat::Text,
        }
    }
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "assistant", "assistant")
    }

    /// Returns the default config file location
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from `path`, or from the default location
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses and validates TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.birthday_window_days == 0 {
            return Err(ConfigError::Invalid(
                "birthday_window_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the snapshot path: explicit override, then config, then platform default
    pub fn data_file(&self, overridden: Option<&Path>) -> PathBuf {
        if let Some(path) = overridden {
            return path.to_path_buf();
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join(DEFAULT_DATA_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.default_format, OutputFormat::Text);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
data_file = "/tmp/contacts.json"
birthday_window_days = 14
default_format = "json"
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/contacts.json")));
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn parse_partial_config_keeps_defaults() {
        let config = Config::parse("birthday_window_days = 3").unwrap();
        assert_eq!(config.birthday_window_days, 3);
        assert_eq!(config.default_format, OutputFormat::Text);
    }

    #[test]
    fn zero_window_is_invalid() {
        let err = Config::parse("birthday_window_days = 0").unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn malformed_config_fails() {
        assert!(Config::parse("birthday_window_days = \"soon\"").is_err());
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("missing.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_format = \"json\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn data_file_precedence() {
        let config = Config {
            data_file: Some(PathBuf::from("from-config.json")),
            ..Config::default()
        };

        assert_eq!(
            config.data_file(Some(Path::new("from-flag.json"))),
            PathBuf::from("from-flag.json")
        );
        assert_eq!(config.data_file(None), PathBuf::from("from-config.json"));
        assert!(Config::default().data_file(None).ends_with(DEFAULT_DATA_FILE));
    }
}
