//! bootstrap
//!
//! Version-control bootstrap for a freshly scaffolded package.
//!
//! # Sequence
//!
//! Every step runs with the package root as working directory:
//!
//! 1. `git init`
//! 2. `git add .`
//! 3. `git commit -m "<message>"`
//! 4. `git branch -M main`
//! 5. `git branch`
//!
//! When pushing, additionally:
//!
//! 6. `<hosting-cli> repo create <name> --<public|private>`
//! 7. `git remote add origin https://<host>/<user>/<name>.git`
//! 8. `git push -u origin main`
//!
//! # Invariants
//!
//! - Steps always run in this order and none is skipped
//! - Exit statuses are never inspected; a failed step does not stop the next
//! - Success is reported once the last process has exited
//!
//! The sequence is built by [`plan`], a pure function, and executed by
//! [`bootstrap`] through a [`CommandRunner`].

pub mod runner;

pub use runner::{CommandRunner, Completion, Invocation, RecordingRunner, SpawnError, SystemRunner};

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::core::config::Config;
use crate::core::request::PackageRequest;
use crate::ui::status::StatusSink;

/// Branch the initial commit ends up on.
pub const MAIN_BRANCH: &str = "main";

/// Remote the package is pushed to.
pub const REMOTE_NAME: &str = "origin";

/// Errors from bootstrapping.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// An external command could not be started.
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

/// Hosting service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hosting {
    /// Host used in the remote URL, e.g. `github.com`
    pub host: String,
    /// CLI used to create the remote repository, e.g. `gh`
    pub cli: String,
}

impl Hosting {
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.host().to_string(),
            cli: config.hosting_cli().to_string(),
        }
    }

    /// HTTPS clone URL for `user/name`.
    pub fn remote_url(&self, user: &str, name: &str) -> String {
        format!("https://{}/{}/{}.git", self.host, user, name)
    }
}

impl Default for Hosting {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// What the workflow ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Package scaffolded, no repository requested.
    PackageCreated,
    /// Local repository created.
    RepositoryCreated,
    /// Local repository created and pushed.
    RepositoryUploaded,
}

impl Outcome {
    /// Final message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PackageCreated => "Package successfully created...",
            Outcome::RepositoryCreated => "Repository successfully created...",
            Outcome::RepositoryUploaded => "Repository successfully uploaded...",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Steps creating the local repository.
pub fn local_steps(req: &PackageRequest) -> Vec<Invocation> {
    vec![
        Invocation::git(["init"]),
        Invocation::git(["add", "."]),
        Invocation::git([
            "commit".to_string(),
            "-m".to_string(),
            format!("\"{}\"", req.first_commit_message()),
        ]),
        Invocation::git(["branch", "-M", MAIN_BRANCH]),
        Invocation::git(["branch"]),
    ]
}

/// Steps creating the remote repository and pushing to it.
pub fn push_steps(req: &PackageRequest, hosting: &Hosting) -> Vec<Invocation> {
    vec![
        Invocation::new(
            &hosting.cli,
            ["repo", "create", req.name(), req.visibility().flag()],
        ),
        Invocation::git([
            "remote".to_string(),
            "add".to_string(),
            REMOTE_NAME.to_string(),
            hosting.remote_url(req.git_username(), req.name()),
        ]),
        Invocation::git(["push", "-u", REMOTE_NAME, MAIN_BRANCH]),
    ]
}

/// Full ordered step list for `req`.
///
/// Empty when no repository is requested.
pub fn plan(req: &PackageRequest, hosting: &Hosting) -> Vec<Invocation> {
    if !req.create_repo() {
        return Vec::new();
    }
    let mut steps = local_steps(req);
    if req.push_repo() {
        steps.extend(push_steps(req, hosting));
    }
    steps
}

/// Run the bootstrap sequence for `req` inside `root`.
///
/// Returns [`Outcome::PackageCreated`] without running anything if no
/// repository was requested.
///
/// # Errors
///
/// Only fails if a process cannot be started. Non-zero exits are ignored.
pub fn bootstrap(
    root: &Path,
    req: &PackageRequest,
    hosting: &Hosting,
    runner: &mut dyn CommandRunner,
    status: &mut dyn StatusSink,
) -> Result<Outcome, BootstrapError> {
    if !req.create_repo() {
        return Ok(Outcome::PackageCreated);
    }

    status.set("Creating repository...");
    run_all(&local_steps(req), root, runner)?;
    if !req.push_repo() {
        return Ok(Outcome::RepositoryCreated);
    }

    status.set("Uploading repository...");
    run_all(&push_steps(req, hosting), root, runner)?;
    Ok(Outcome::RepositoryUploaded)
}

fn run_all(
    steps: &[Invocation],
    root: &Path,
    runner: &mut dyn CommandRunner,
) -> Result<(), BootstrapError> {
    for step in steps {
        let completion = runner.run(step, root)?;
        tracing::debug!(command = %step, ?completion, "step finished");
    }
    Ok(())
}
