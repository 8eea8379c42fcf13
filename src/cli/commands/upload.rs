//! upload command - Upload an existing package

use anyhow::Result;

use crate::engine::Context;
use crate::ui::output::{self, Verbosity};

/// Upload an existing package.
///
/// Not implemented yet: the mode is accepted so scripts can already call it,
/// but it only reports that there is nothing to do.
pub fn upload(ctx: &Context) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    output::warn(
        "upload mode is not implemented yet; use 'uploadhub new --create-repo --push'",
        verbosity,
    );
    Ok(())
}
