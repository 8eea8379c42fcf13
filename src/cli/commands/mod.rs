//! cli::commands
//!
//! Mode dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Loads what it needs (config, templates location)
//! 2. Calls the engine or a store to do the work
//! 3. Formats and displays output

mod completion;
mod init;
mod new;
mod upload;

pub use completion::completion;
pub use init::init;
pub use new::{collect_form, new_package};
pub use upload::upload;

use anyhow::{Context as _, Result};

use crate::cli::args::{Cli, Mode};
use crate::core::config::Config;
use crate::engine::Context;

/// Dispatch the selected mode to its handler.
pub fn dispatch(cli: &Cli, ctx: &Context) -> Result<()> {
    tracing::debug!(mode = %cli.mode, "dispatching");
    match cli.mode {
        Mode::New => {
            let config = load_config(ctx)?;
            new::new_package(ctx, &config, &cli.package)
        }
        Mode::Upload => upload::upload(ctx),
        Mode::Init => init::init(ctx),
        Mode::Completion => completion::completion(cli.shell),
    }
}

/// Load configuration, honoring `--config`.
pub(crate) fn load_config(ctx: &Context) -> Result<Config> {
    match &ctx.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}
