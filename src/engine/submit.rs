//! engine::submit
//!
//! The single synchronous entry point for creating a package.
//!
//! # Lifecycle
//!
//! Validate → Scaffold → Bootstrap → Outcome
//!
//! Validation happens before anything touches the disk. After that every
//! stage runs to completion or fails fatally; there is no rollback.

use thiserror::Error;

use crate::bootstrap::{self, BootstrapError, CommandRunner, Hosting, Outcome};
use crate::core::request::{PackageForm, ValidationError};
use crate::scaffold::{self, ScaffoldError, ScaffoldResult};
use crate::templates::TemplateStore;
use crate::ui::status::StatusSink;

/// Errors from a submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
}

/// Result of a completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub scaffold: ScaffoldResult,
    pub outcome: Outcome,
}

/// Collaborators a submission runs against.
pub struct Services<'a> {
    pub templates: &'a TemplateStore,
    pub hosting: &'a Hosting,
    pub runner: &'a mut dyn CommandRunner,
    pub status: &'a mut dyn StatusSink,
}

/// Validate `form`, scaffold the package, then bootstrap its repository.
///
/// # Errors
///
/// - [`SubmitError::Validation`] before any side effect
/// - [`SubmitError::Scaffold`] if templates or the filesystem fail
/// - [`SubmitError::Bootstrap`] if an external command cannot be started
pub fn submit(form: PackageForm, services: Services<'_>) -> Result<Submission, SubmitError> {
    let Services {
        templates,
        hosting,
        runner,
        status,
    } = services;

    let request = form.validate()?;
    tracing::debug!(name = request.name(), root = %request.root().display(), "submitting");

    let scaffold = scaffold::scaffold(&request, templates, status)?;
    let outcome = bootstrap::bootstrap(&scaffold.root, &request, hosting, runner, status)?;

    Ok(Submission { scaffold, outcome })
}
