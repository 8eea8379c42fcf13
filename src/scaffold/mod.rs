//! scaffold
//!
//! Creates the on-disk skeleton of a new package.
//!
//! # Layout
//!
//! For a request named `foo` in directory `/work`:
//!
//! ```text
//! /work/foo/
//! ├── LICENSE          license template, verbatim
//! ├── README.md        empty
//! ├── setup.py         setup template with tokens substituted
//! └── foo/
//!     ├── __init__.py  empty
//!     └── __main__.py  empty
//! ```
//!
//! # Invariants
//!
//! - Existing directories are reused, never an error
//! - `README.md` is always truncated and `setup.py` always rewritten
//! - Any filesystem error aborts immediately; completed steps are kept

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::request::PackageRequest;
use crate::templates::{TemplateError, TemplateStore};
use crate::ui::status::StatusSink;

/// Name of the license file written to the package root.
pub const LICENSE_NAME: &str = "LICENSE";

/// Name of the readme written to the package root.
pub const README_NAME: &str = "README.md";

/// Name of the setup file written to the package root.
pub const SETUP_NAME: &str = "setup.py";

/// Empty entry-point files created inside the module directory.
pub const ENTRY_FILES: [&str; 2] = ["__init__.py", "__main__.py"];

/// Placeholder tokens in the setup template, in substitution order.
///
/// In the template each token appears in double quotes, e.g. `"VERSION"`.
pub const SETUP_TOKENS: [&str; 5] = ["VERSION", "NAME", "AUTHOR", "DESCRIPTION", "MAIL"];

/// Errors from scaffolding.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to {action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Paths created by [`scaffold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldResult {
    /// Package root (`directory / name`)
    pub root: PathBuf,
    /// Inner module directory (`root / name`)
    pub module_dir: PathBuf,
}

/// Substitute the quoted setup tokens with the request's quoted values.
///
/// Plain substring replacement in [`SETUP_TOKENS`] order. A value that
/// itself contains a later quoted token is replaced along with it.
pub fn render_setup(template: &str, req: &PackageRequest) -> String {
    let values = [
        req.version(),
        req.name(),
        req.author(),
        req.description(),
        req.mail(),
    ];

    SETUP_TOKENS
        .iter()
        .zip(values)
        .fold(template.to_string(), |text, (token, value)| {
            text.replace(&format!("\"{}\"", token), &format!("\"{}\"", value))
        })
}

/// Create the package skeleton for `req`.
///
/// # Errors
///
/// Returns [`ScaffoldError::Template`] if a template cannot be read and
/// [`ScaffoldError::Io`] for any filesystem failure. Nothing already written
/// is removed.
pub fn scaffold(
    req: &PackageRequest,
    templates: &TemplateStore,
    status: &mut dyn StatusSink,
) -> Result<ScaffoldResult, ScaffoldError> {
    let root = req.root();
    ensure_dir(&root)?;
    tracing::debug!(root = %root.display(), "package root ready");

    status.set("Creating LICENSE...");
    let license = templates.load_license()?;
    write_file(&root.join(LICENSE_NAME), &license)?;
    status.set("LICENSE created successfully...");

    status.set("Creating README.md...");
    write_file(&root.join(README_NAME), "")?;
    status.set("README.md created successfully...");

    status.set("Creating setup.py...");
    let setup = render_setup(&templates.load_setup_template()?, req);
    write_file(&root.join(SETUP_NAME), &setup)?;
    status.set("Setup.py created successfully...");

    let module_dir = req.module_dir();
    ensure_dir(&module_dir)?;
    for entry in ENTRY_FILES {
        write_file(&module_dir.join(entry), "")?;
    }

    Ok(ScaffoldResult { root, module_dir })
}

/// Create `path` unless it is already a directory. Parents are not created.
fn ensure_dir(path: &Path) -> Result<(), ScaffoldError> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir(path).map_err(|source| ScaffoldError::Io {
        action: "create directory",
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    fs::write(path, contents).map_err(|source| ScaffoldError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}
