//! bootstrap::runner
//!
//! Process seam for the bootstrapper.
//!
//! # Design
//!
//! A [`CommandRunner`] executes one [`Invocation`] to completion and reports
//! how it ended. The bootstrapper never branches on that report; it only
//! needs to know the process finished. Failing to start the process at all
//! is an error.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// A single external command: program plus argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Shorthand for a `git` invocation.
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("git", args)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a finished process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Exited with the given code.
    Exited(i32),
    /// Terminated without an exit code (e.g. by a signal).
    Terminated,
}

/// Failure to start an external process.
#[derive(Debug, Error)]
#[error("failed to run '{invocation}' in '{cwd}': {source}")]
pub struct SpawnError {
    pub invocation: Invocation,
    pub cwd: PathBuf,
    pub source: std::io::Error,
}

/// Executes invocations synchronously.
pub trait CommandRunner {
    /// Run `invocation` in `cwd` and block until it exits.
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> Result<Completion, SpawnError>;
}

/// Spawns real processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> Result<Completion, SpawnError> {
        tracing::debug!(command = %invocation, cwd = %cwd.display(), "running");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| SpawnError {
                invocation: invocation.clone(),
                cwd: cwd.to_path_buf(),
                source,
            })?;

        Ok(match status.code() {
            Some(code) => Completion::Exited(code),
            None => Completion::Terminated,
        })
    }
}

/// Records invocations instead of running them.
///
/// Every invocation "exits" with the configured code.
#[derive(Debug, Default, Clone)]
pub struct RecordingRunner {
    pub calls: Vec<(Invocation, PathBuf)>,
    pub exit_code: i32,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner whose every invocation fails with `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            calls: Vec::new(),
            exit_code: code,
        }
    }

    /// The recorded invocations, without working directories.
    pub fn invocations(&self) -> Vec<&Invocation> {
        self.calls.iter().map(|(inv, _)| inv).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> Result<Completion, SpawnError> {
        self.calls.push((invocation.clone(), cwd.to_path_buf()));
        Ok(Completion::Exited(self.exit_code))
    }
}
