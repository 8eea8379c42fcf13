//! core::request
//!
//! Package request types and validation.
//!
//! # Types
//!
//! - [`PackageForm`] - Raw field values as collected by a front-end
//! - [`PackageRequest`] - A validated request, the only input the workflow accepts
//! - [`Visibility`] - Hosting visibility for a pushed repository
//!
//! # Validation
//!
//! Required fields are checked in a fixed order and validation halts at the
//! first empty one:
//!
//! 1. `name`
//! 2. `directory`
//! 3. `version`
//! 4. `author`
//! 5. `description`
//! 6. `mail`
//! 7. `commit message` (only when a repository is requested)
//!
//! A `PackageRequest` can only be obtained through [`PackageForm::validate`],
//! so every request handed to the scaffolder is known to be complete.
//!
//! # Example
//!
//! ```
//! use uploadhub::core::request::{Field, PackageForm};
//!
//! let form = PackageForm {
//!     name: "foo".into(),
//!     directory: "/tmp".into(),
//!     version: "0.1".into(),
//!     author: "A".into(),
//!     description: String::new(),
//!     mail: "a@b.c".into(),
//!     ..Default::default()
//! };
//!
//! let err = form.validate().unwrap_err();
//! assert_eq!(err.field, Field::Description);
//! ```

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// A required form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Directory,
    Version,
    Author,
    Description,
    Mail,
    CommitMessage,
}

impl Field {
    /// Fields checked for every request, in validation order.
    pub const PACKAGE_FIELDS: [Field; 6] = [
        Field::Name,
        Field::Directory,
        Field::Version,
        Field::Author,
        Field::Description,
        Field::Mail,
    ];

    /// Human-readable field label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "package name",
            Field::Directory => "package directory",
            Field::Version => "package version",
            Field::Author => "package author",
            Field::Description => "package description",
            Field::Mail => "package mail",
            Field::CommitMessage => "first commit message",
        }
    }

    /// Command-line flag that supplies this field.
    pub fn flag(&self) -> &'static str {
        match self {
            Field::Name => "--name",
            Field::Directory => "--dir",
            Field::Version => "--pkg-version",
            Field::Author => "--author",
            Field::Description => "--description",
            Field::Mail => "--mail",
            Field::CommitMessage => "--commit",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A required field was left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("must provide {field} ({})", .field.flag())]
pub struct ValidationError {
    /// The first empty field in validation order.
    pub field: Field,
}

/// Visibility of the repository created on the hosting service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Hosting CLI flag for this visibility (`--public` / `--private`).
    pub fn flag(&self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(format!(
                "invalid visibility '{}', must be 'public' or 'private'",
                other
            )),
        }
    }
}

/// Raw field values as entered by the user.
///
/// Every text field may be empty. Nothing here has been checked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageForm {
    pub name: String,
    pub directory: String,
    pub version: String,
    pub author: String,
    pub description: String,
    pub mail: String,
    pub create_repo: bool,
    pub push_repo: bool,
    pub visibility: Visibility,
    pub git_username: String,
    pub commit_message: String,
}

impl PackageForm {
    /// Value currently held by a required field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Directory => &self.directory,
            Field::Version => &self.version,
            Field::Author => &self.author,
            Field::Description => &self.description,
            Field::Mail => &self.mail,
            Field::CommitMessage => &self.commit_message,
        }
    }

    /// Required fields for this form, in validation order.
    pub fn required_fields(&self) -> Vec<Field> {
        let mut fields = Field::PACKAGE_FIELDS.to_vec();
        if self.create_repo {
            fields.push(Field::CommitMessage);
        }
        fields
    }

    /// Validate the form into a [`PackageRequest`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first empty required field.
    pub fn validate(self) -> Result<PackageRequest, ValidationError> {
        if let Some(field) = self
            .required_fields()
            .into_iter()
            .find(|f| self.value(*f).is_empty())
        {
            return Err(ValidationError { field });
        }

        Ok(PackageRequest {
            name: self.name,
            directory: PathBuf::from(self.directory),
            version: self.version,
            author: self.author,
            description: self.description,
            mail: self.mail,
            create_repo: self.create_repo,
            push_repo: self.push_repo,
            visibility: self.visibility,
            git_username: self.git_username,
            first_commit_message: self.commit_message,
        })
    }
}

/// A validated package request.
///
/// Constructed only by [`PackageForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    pub(crate) name: String,
    pub(crate) directory: PathBuf,
    pub(crate) version: String,
    pub(crate) author: String,
    pub(crate) description: String,
    pub(crate) mail: String,
    pub(crate) create_repo: bool,
    pub(crate) push_repo: bool,
    pub(crate) visibility: Visibility,
    pub(crate) git_username: String,
    pub(crate) first_commit_message: String,
}

impl PackageRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &std::path::Path {
        &self.directory
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn mail(&self) -> &str {
        &self.mail
    }

    pub fn create_repo(&self) -> bool {
        self.create_repo
    }

    /// Whether to push. Only meaningful when [`create_repo`](Self::create_repo) is set.
    pub fn push_repo(&self) -> bool {
        self.push_repo
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn git_username(&self) -> &str {
        &self.git_username
    }

    pub fn first_commit_message(&self) -> &str {
        &self.first_commit_message
    }

    /// Package root: `directory / name`.
    ///
    /// The name is always taken relative to `directory`, even if it starts
    /// with a path separator.
    pub fn root(&self) -> PathBuf {
        self.directory.join(self.relative_name())
    }

    /// Inner module directory: `root / name`.
    pub fn module_dir(&self) -> PathBuf {
        self.root().join(self.relative_name())
    }

    fn relative_name(&self) -> PathBuf {
        Path::new(&self.name)
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect()
    }
}
