//! core::paths
//!
//! Centralized path routing for UploadHub storage locations.
//!
//! # Storage Layout
//!
//! User data lives under a single config directory:
//! - `config.json` - Default field values
//! - `templates/license.txt` - License text copied into new packages
//! - `templates/setup.py` - Setup file template
//!
//! The directory is `$XDG_CONFIG_HOME/uploadhub` when that variable is set,
//! otherwise `~/.uploadhub`.

use std::path::PathBuf;

use super::config::ConfigError;

/// Name of the templates directory inside the config directory.
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable overriding the templates directory.
pub const TEMPLATES_ENV: &str = "UPLOADHUB_TEMPLATES";

/// Resolve the UploadHub config directory.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_home.is_empty() {
            return Ok(PathBuf::from(xdg_home).join("uploadhub"));
        }
    }

    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".uploadhub"))
}

/// Resolve the templates directory.
///
/// An explicit override (the `--templates` flag) wins, then
/// `$UPLOADHUB_TEMPLATES`, then `<config dir>/templates`.
pub fn templates_dir(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Ok(dir) = std::env::var(TEMPLATES_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    Ok(config_dir()?.join(TEMPLATES_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_templates_dir_wins() {
        let dir = templates_dir(Some(PathBuf::from("/opt/uploadhub/templates"))).unwrap();
        assert_eq!(dir, PathBuf::from("/opt/uploadhub/templates"));
    }
}
