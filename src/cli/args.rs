//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Launch Mode
//!
//! The first positional argument selects the flow. It is matched
//! case-insensitively on its first letter, so `new`, `n` and `New` all
//! select the new-package flow:
//! - `new` - Scaffold a package and optionally bootstrap its repository
//! - `upload` - Upload an existing package (not implemented yet)
//! - `init` - Write the default config and templates
//! - `completion` - Print a shell completion script
//!
//! # Global Flags
//!
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--no-interactive`: Never prompt for missing values
//! - `--templates <dir>`: Read templates from this directory
//! - `--config <file>`: Read defaults from this file

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser};
use clap_complete::Shell;

use crate::core::request::Visibility;

/// UploadHub - scaffold new packages and push them to a git host
#[derive(Parser, Debug)]
#[command(name = "uploadhub")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Scaffold a package, prompting for anything missing
    uploadhub new

    # Scaffold, commit and push a private repository without prompts
    uploadhub new --no-interactive --name foo --dir ~/src \\
        --description \"Does foo\" --create-repo --push --visibility private

    # Write a starter config and the default templates
    uploadhub init")]
pub struct Cli {
    /// Launch mode: new, upload, init or completion (first letter is enough)
    pub mode: Mode,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_interactive: bool,

    /// Directory holding license.txt and setup.py
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Config file with default field values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Shell to generate completions for (completion mode)
    #[arg(long, value_enum, default_value = "bash")]
    pub shell: Shell,

    #[command(flatten)]
    pub package: PackageArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns false if `--no-interactive` or `--quiet` was set, or if stdin
    /// is not a terminal.
    pub fn interactive(&self) -> bool {
        if self.no_interactive || self.quiet {
            false
        } else {
            use std::io::IsTerminal;
            std::io::stdin().is_terminal()
        }
    }
}

/// Field values for the new-package flow.
///
/// Anything left out is taken from the config or prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct PackageArgs {
    /// Package name
    #[arg(long)]
    pub name: Option<String>,

    /// Existing directory the package is created in
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Package version
    #[arg(long, value_name = "VERSION")]
    pub pkg_version: Option<String>,

    /// Package description
    #[arg(long)]
    pub description: Option<String>,

    /// Package author
    #[arg(long)]
    pub author: Option<String>,

    /// Author mail
    #[arg(long)]
    pub mail: Option<String>,

    /// Username on the hosting service
    #[arg(long = "git-user", value_name = "USER")]
    pub git_user: Option<String>,

    /// Create a git repository with an initial commit
    #[arg(long)]
    pub create_repo: bool,

    /// Create the remote repository and push to it
    #[arg(long)]
    pub push: bool,

    /// Visibility of the remote repository: public or private
    #[arg(long, value_name = "VISIBILITY", default_value = "public")]
    pub visibility: Visibility,

    /// First commit message
    #[arg(long, value_name = "MESSAGE")]
    pub commit: Option<String>,
}

/// Launch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    New,
    Upload,
    Init,
    Completion,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('n') => Ok(Mode::New),
            Some('u') => Ok(Mode::Upload),
            Some('i') => Ok(Mode::Init),
            Some('c') => Ok(Mode::Completion),
            _ => Err(format!(
                "unknown mode '{}', expected one of: new, upload, init, completion",
                s
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::New => write!(f, "new"),
            Mode::Upload => write!(f, "upload"),
            Mode::Init => write!(f, "init"),
            Mode::Completion => write!(f, "completion"),
        }
    }
}
