//! init command - Write the starter config and default templates

use anyhow::{Context as _, Result};

use crate::core::config::{Config, UserConfig};
use crate::core::paths;
use crate::engine::Context;
use crate::templates::TemplateStore;
use crate::ui::output::{self, Verbosity};

/// Write a starter config and the built-in templates.
///
/// Existing files are kept. With `--config` the starter config is written to
/// that path; with `--templates` the templates go to that directory.
pub fn init(ctx: &Context) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let mut written = Vec::new();

    let config_path = match &ctx.config {
        Some(path) => path.clone(),
        None => Config::config_path().context("Failed to locate config directory")?,
    };
    if config_path.exists() {
        tracing::debug!(path = %config_path.display(), "config exists, skipping");
    } else {
        Config::write_atomic(&config_path, &UserConfig::starter())
            .context("Failed to write config")?;
        written.push(config_path);
    }

    let templates_dir =
        paths::templates_dir(ctx.templates.clone()).context("Failed to locate templates")?;
    let store = TemplateStore::new(templates_dir);
    written.extend(
        store
            .install_defaults()
            .context("Failed to install templates")?,
    );

    if written.is_empty() {
        output::print("Nothing to do; config and templates already exist.", verbosity);
    } else {
        let paths: Vec<_> = written.iter().map(|p| p.display()).collect();
        output::success(
            format!("Created:\n{}", output::format_list(&paths, "  ")),
            verbosity,
        );
    }

    Ok(())
}
