//! core
//!
//! Core domain types and configuration for UploadHub.
//!
//! # Modules
//!
//! - [`request`] - Package form, validated request, field order
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for UploadHub storage

pub mod config;
pub mod paths;
pub mod request;
