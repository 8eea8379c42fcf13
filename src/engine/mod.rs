//! engine
//!
//! Orchestrates a package submission.
//!
//! # Architecture
//!
//! The engine owns the only path from user input to side effects:
//! [`submit`] takes a [`PackageForm`](crate::core::request::PackageForm),
//! validates it, and then drives the scaffolder and the bootstrapper in
//! order. Front-ends build a form and a [`Context`]; they never call the
//! scaffolder or bootstrapper directly.

pub mod submit;

pub use submit::{submit, Services, SubmitError, Submission};

use std::path::PathBuf;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
    /// Templates directory override.
    pub templates: Option<PathBuf>,
    /// Config file override.
    pub config: Option<PathBuf>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            debug: false,
            quiet: false,
            interactive: true,
            templates: None,
            config: None,
        }
    }
}
