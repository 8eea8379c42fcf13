//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! UploadHub keeps a single user-level JSON record of defaults (version,
//! author, mail, git username, first commit message) used to pre-fill a new
//! package request. It is loaded once at startup and handed to the front-end
//! as a read-only value.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$UPLOADHUB_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/uploadhub/config.json`
//! 3. `~/.uploadhub/config.json` (canonical write location)
//!
//! A missing file is not an error; built-in defaults apply.
//!
//! # Example
//!
//! ```no_run
//! use uploadhub::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Version: {}", config.version());
//! println!("Host: {}", config.host());
//! ```

pub mod schema;

pub use schema::UserConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::paths;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The record as read from disk
    pub user: UserConfig,
    /// Path the record was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Wrap an in-memory record. Nothing is read from disk.
    pub fn from_user(user: UserConfig) -> Result<Self, ConfigError> {
        user.validate()?;
        Ok(Self { user, path: None })
    }

    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], the file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let user: UserConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        user.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");

        Ok(Self {
            user,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("UPLOADHUB_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("uploadhub/config.json");
            if path.exists() {
                return Some(path);
            }
        }

        let path = dirs::home_dir()?.join(".uploadhub/config.json");
        path.exists().then_some(path)
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `<config dir>/config.json`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(paths::config_dir()?.join("config.json"))
    }

    /// Write a config record atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file in the
    /// same directory, then renames it into place.
    pub fn write_atomic(path: &Path, config: &UserConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents = serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Default package version. Defaults to "0.1.0".
    pub fn version(&self) -> &str {
        self.user
            .version
            .as_deref()
            .unwrap_or(schema::DEFAULT_VERSION)
    }

    /// Default author. Empty if not configured.
    pub fn author(&self) -> &str {
        self.user.author.as_deref().unwrap_or_default()
    }

    /// Default mail. Empty if not configured.
    pub fn mail(&self) -> &str {
        self.user.mail.as_deref().unwrap_or_default()
    }

    /// Username on the hosting service. Empty if not configured.
    pub fn git_user(&self) -> &str {
        self.user.gituser.as_deref().unwrap_or_default()
    }

    /// Default first commit message. Defaults to "Initial commit".
    pub fn commit(&self) -> &str {
        self.user.commit.as_deref().unwrap_or(schema::DEFAULT_COMMIT)
    }

    /// Hosting host. Defaults to "github.com".
    pub fn host(&self) -> &str {
        self.user.host.as_deref().unwrap_or(schema::DEFAULT_HOST)
    }

    /// Hosting CLI executable. Defaults to "gh".
    pub fn hosting_cli(&self) -> &str {
        self.user
            .hosting_cli
            .as_deref()
            .unwrap_or(schema::DEFAULT_HOSTING_CLI)
    }

    /// Path the configuration was loaded from, if any.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();

        assert_eq!(config.version(), "0.1.0");
        assert_eq!(config.author(), "");
        assert_eq!(config.mail(), "");
        assert_eq!(config.git_user(), "");
        assert_eq!(config.commit(), "Initial commit");
        assert_eq!(config.host(), "github.com");
        assert_eq!(config.hosting_cli(), "gh");
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{"version": "2.0", "author": "A", "mail": "a@b.c", "gituser": "u", "commit": "go"}"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.version(), "2.0");
        assert_eq!(config.author(), "A");
        assert_eq!(config.git_user(), "u");
        assert_eq!(config.commit(), "go");
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from(&temp.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn malformed_json_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ version: 1").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn invalid_host_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"host": ""}"#).unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn write_atomic_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.json");

        let user = UserConfig {
            author: Some("A".to_string()),
            ..UserConfig::starter()
        };
        Config::write_atomic(&path, &user).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.user, user);
    }
}
