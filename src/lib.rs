//! UploadHub - scaffold new packages and bootstrap their git repositories
//!
//! UploadHub creates the skeleton of a new package (license, readme, setup
//! file, module directory) from templates and can then initialize a git
//! repository for it, commit, and push it to a newly created repository on
//! the hosting service.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line front-end (parses args, collects the form)
//! - [`engine`] - Single submit entry point: Validate → Scaffold → Bootstrap
//! - [`core`] - Request types, validation, configuration, paths
//! - [`templates`] - Read-only store of the license and setup templates
//! - [`scaffold`] - Creates the package directory structure
//! - [`bootstrap`] - Runs the fixed git/hosting command sequence
//! - [`ui`] - Output, prompts and status reporting
//!
//! # Behavior Guarantees
//!
//! 1. Nothing is written until every required field is present
//! 2. Steps run in a fixed order and are never rolled back
//! 3. External command exit codes are not inspected; success is assumed

pub mod bootstrap;
pub mod cli;
pub mod core;
pub mod engine;
pub mod scaffold;
pub mod templates;
pub mod ui;
