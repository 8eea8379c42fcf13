//! templates
//!
//! Read-only store for the resources copied into new packages.
//!
//! # Resources
//!
//! - `license.txt` - License text, copied verbatim to `LICENSE`
//! - `setup.py` - Setup file template containing the quoted tokens
//!   `"VERSION"`, `"NAME"`, `"AUTHOR"`, `"DESCRIPTION"` and `"MAIL"`
//!
//! Both are read from a templates directory on every load; nothing is cached.
//! Default copies of both resources are compiled into the binary and can be
//! written out with [`TemplateStore::install_defaults`].

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// File name of the license resource.
pub const LICENSE_FILE: &str = "license.txt";

/// File name of the setup template resource.
pub const SETUP_FILE: &str = "setup.py";

/// Built-in license text.
pub const DEFAULT_LICENSE: &str = include_str!("defaults/license.txt");

/// Built-in setup template.
pub const DEFAULT_SETUP: &str = include_str!("defaults/setup.py");

/// Errors from the template store.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template resource could not be read.
    #[error("template resource missing: {path}: {source}")]
    ResourceMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A default resource could not be written.
    #[error("failed to install template '{path}': {source}")]
    InstallFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Template resources rooted at an install directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Create a store reading from `dir`. The directory is not touched.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load the license text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::ResourceMissing`] if the file cannot be read.
    pub fn load_license(&self) -> Result<String, TemplateError> {
        self.read(LICENSE_FILE)
    }

    /// Load the setup file template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::ResourceMissing`] if the file cannot be read.
    pub fn load_setup_template(&self) -> Result<String, TemplateError> {
        self.read(SETUP_FILE)
    }

    fn read(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).map_err(|source| TemplateError::ResourceMissing { path, source })
    }

    /// Write the built-in resources into the store directory.
    ///
    /// Existing files are left alone. Returns the paths that were written.
    pub fn install_defaults(&self) -> Result<Vec<PathBuf>, TemplateError> {
        fs::create_dir_all(&self.dir).map_err(|source| TemplateError::InstallFailed {
            path: self.dir.clone(),
            source,
        })?;

        let mut written = Vec::new();
        for (name, contents) in [(LICENSE_FILE, DEFAULT_LICENSE), (SETUP_FILE, DEFAULT_SETUP)] {
            let path = self.dir.join(name);
            if path.exists() {
                tracing::debug!(path = %path.display(), "template exists, skipping");
                continue;
            }
            fs::write(&path, contents).map_err(|source| TemplateError::InstallFailed {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }

        Ok(written)
    }
}
