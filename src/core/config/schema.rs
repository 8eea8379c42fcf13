//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order of precedence:
//! 1. `$UPLOADHUB_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/uploadhub/config.json`
//! 3. `~/.uploadhub/config.json` (canonical write location)
//!
//! # Validation
//!
//! Values are validated after parsing. The hosting host and CLI are
//! substituted into URLs and argument vectors, so they must not be blank.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default package version offered to the user.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Default first commit message.
pub const DEFAULT_COMMIT: &str = "Initial commit";

/// Default hosting host used in remote URLs.
pub const DEFAULT_HOST: &str = "github.com";

/// Default hosting CLI used to create remote repositories.
pub const DEFAULT_HOSTING_CLI: &str = "gh";

/// Persisted defaults used to pre-fill a new package request.
///
/// # Example
///
/// ```json
/// {
///   "version": "0.1.0",
///   "author": "Jane Doe",
///   "mail": "jane@example.com",
///   "gituser": "jdoe",
///   "commit": "Initial commit"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// Default package version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Default package author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Default author mail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,

    /// Username on the hosting service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gituser: Option<String>,

    /// Default first commit message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// Hosting host for remote URLs (default: "github.com")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Hosting CLI executable (default: "gh")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosting_cli: Option<String>,
}

impl UserConfig {
    /// Config written by `uploadhub init` when none exists.
    pub fn starter() -> Self {
        Self {
            version: Some(DEFAULT_VERSION.to_string()),
            author: Some(String::new()),
            mail: Some(String::new()),
            gituser: Some(String::new()),
            commit: Some(DEFAULT_COMMIT.to_string()),
            host: None,
            hosting_cli: None,
        }
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(host) = &self.host {
            if host.trim().is_empty() || host.contains('/') || host.contains(char::is_whitespace)
            {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid host '{}', expected a bare host name such as '{}'",
                    host, DEFAULT_HOST
                )));
            }
        }

        if let Some(cli) = &self.hosting_cli {
            if cli.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "hosting_cli must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
