//! Configuration file handling.
//!
//! Persisted defaults for scan sessions, stored as TOML. Values given on
//! the command line or by an embedding application always take
//! precedence; the file only fills options that were left unset.
//!
//! # Configuration Location
//!
//! - Linux: `~/.config/plecost/config.toml`
//! - macOS: `~/Library/Application Support/plecost/config.toml`
//! - Windows: `%APPDATA%\plecost\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! concurrency = 8
//! verbosity = 1
//! colorize = true
//! wordlist = "plugin_list_1000.txt"
//!
//! [proxy]
//! "127.0.0.1" = 8080
//! ```

use crate::error::{PlecostError, Result};
use crate::options::{RawOptions, DEFAULT_CONCURRENCY};
use crate::platform;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Defaults applied to every scan session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of simultaneous connections.
    ///
    /// Default: 4
    pub concurrency: usize,

    /// Default: 0
    pub verbosity: u8,

    /// Whether to colorize console output.
    ///
    /// Default: true
    pub colorize: bool,

    /// Embedded wordlist name or path. Unset means the built-in default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordlist: Option<String>,

    /// Proxy as `host -> port`.
    pub proxy: HashMap<String, u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            verbosity: 0,
            colorize: true,
            wordlist: None,
            proxy: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("No config directory available, using default configuration.");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults.");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config file.");
        Ok(config)
    }

    /// Saves the configuration, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PlecostError::Configuration`] when the platform has no
    /// config directory, or an I/O error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            PlecostError::configuration("config", "no config directory available")
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Location of `config.toml`, or `None` if the platform has no config directory.
    pub fn config_path() -> Option<PathBuf> {
        Some(platform::config_dir()?.join("config.toml"))
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }

    /// Fills every option left unset in `raw` from this configuration.
    pub fn apply(&self, mut raw: RawOptions) -> RawOptions {
        raw.concurrency = raw.concurrency.or(Some(self.concurrency));
        raw.verbosity = raw.verbosity.or(Some(self.verbosity));
        raw.colorize = raw.colorize.or(Some(self.colorize));
        raw.wordlist = raw.wordlist.or_else(|| self.wordlist.clone());
        if raw.proxy.is_none() && !self.proxy.is_empty() {
            raw.proxy = Some(self.proxy.clone());
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.concurrency, 4);
        assert_eq!(config.verbosity, 0);
        assert!(config.colorize);
        assert!(config.wordlist.is_none());
        assert!(config.proxy.is_empty());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            concurrency: 12,
            wordlist: Some("plugin_list_1000.txt".to_string()),
            proxy: HashMap::from([("127.0.0.1".to_string(), 8080)]),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "colorize = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.colorize);
        assert_eq!(config.concurrency, 4);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "concurrency = \"many\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, PlecostError::TomlParse(_)));
    }

    #[test]
    fn test_apply_fills_unset_options() {
        let config = Config {
            concurrency: 10,
            verbosity: 2,
            colorize: false,
            wordlist: Some("plugin_list_50.txt".to_string()),
            proxy: HashMap::from([("proxy".to_string(), 3128)]),
        };

        let raw = config.apply(RawOptions::new("example.com"));
        assert_eq!(raw.concurrency, Some(10));
        assert_eq!(raw.verbosity, Some(2));
        assert_eq!(raw.colorize, Some(false));
        assert_eq!(raw.wordlist.as_deref(), Some("plugin_list_50.txt"));
        assert_eq!(raw.proxy.unwrap().get("proxy"), Some(&3128));
    }

    #[test]
    fn test_apply_keeps_explicit_options() {
        let config = Config {
            concurrency: 10,
            wordlist: Some("plugin_list_50.txt".to_string()),
            ..Config::default()
        };

        let mut raw = RawOptions::new("example.com");
        raw.concurrency = Some(2);
        raw.wordlist = Some("plugin_list_10.txt".to_string());
        raw.proxy = Some(HashMap::new());

        let raw = config.apply(raw);
        assert_eq!(raw.concurrency, Some(2));
        assert_eq!(raw.wordlist.as_deref(), Some("plugin_list_10.txt"));
        assert!(raw.proxy.unwrap().is_empty());
    }

    #[test]
    fn test_config_path() {
        assert_eq!(
            Config::config_path(),
            platform::config_dir().map(|dir| dir.join("config.toml"))
        );
    }

    #[test]
    fn test_generate_default_config() {
        let generated = Config::generate_default_config();
        assert!(generated.contains("concurrency = 4"));
        assert!(generated.contains("colorize = true"));
    }
}
