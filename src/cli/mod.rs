//! cli
//!
//! Command-line front-end for UploadHub.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Set up logging
//! - Load the configuration once and hand it to the selected mode
//!
//! # Architecture
//!
//! The CLI layer is thin. It collects field values into a form and passes
//! it to [`crate::engine::submit`]; it never writes package files or runs
//! git itself.

pub mod args;
pub mod commands;

pub use args::{Cli, Mode, PackageArgs};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::engine;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let ctx = engine::Context {
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
        templates: cli.templates.clone(),
        config: cli.config.clone(),
    };

    commands::dispatch(&cli, &ctx)
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--debug` selects debug level and the default
/// is warnings only.
fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("uploadhub=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
