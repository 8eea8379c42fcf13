//! new command - Scaffold a package and optionally bootstrap its repository

use anyhow::{Context as _, Result};

use crate::bootstrap::{Hosting, SystemRunner};
use crate::cli::args::PackageArgs;
use crate::core::config::Config;
use crate::core::paths;
use crate::core::request::PackageForm;
use crate::engine::{self, Context, Services};
use crate::templates::TemplateStore;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;
use crate::ui::status::ConsoleStatus;

/// Scaffold a new package.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `config` - Defaults used to pre-fill missing fields
/// * `args` - Field values given on the command line
pub fn new_package(ctx: &Context, config: &Config, args: &PackageArgs) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    let form = collect_form(args, config, ctx.interactive)?;
    if form.push_repo && !form.create_repo {
        output::warn("--push has no effect without --create-repo", verbosity);
    }

    let templates_dir =
        paths::templates_dir(ctx.templates.clone()).context("Failed to locate templates")?;
    let templates = TemplateStore::new(templates_dir);
    let hosting = Hosting::from_config(config);
    let mut runner = SystemRunner;
    let mut status = ConsoleStatus::new(verbosity);

    let submission = engine::submit(
        form,
        Services {
            templates: &templates,
            hosting: &hosting,
            runner: &mut runner,
            status: &mut status,
        },
    )?;

    output::success(submission.outcome, verbosity);
    Ok(())
}

/// Build the form from flags, config defaults and (if interactive) prompts.
///
/// Flags always win. In interactive mode every text field without a flag is
/// prompted for, pre-filled with the config default. Without prompts the
/// config default is used as is, which may leave a required field empty.
pub fn collect_form(args: &PackageArgs, config: &Config, interactive: bool) -> Result<PackageForm> {
    let field = |flag: &Option<String>, label: &str, default: &str| -> Result<String> {
        match flag {
            Some(value) => Ok(value.clone()),
            None => prompts::input(label, default, interactive)
                .with_context(|| format!("Failed to read {}", label.to_lowercase())),
        }
    };

    let name = field(&args.name, "Package name", "")?;
    let directory = field(&args.dir, "Package directory", "")?;
    let version = field(&args.pkg_version, "Package version", config.version())?;
    let description = field(&args.description, "Package description", "")?;
    let author = field(&args.author, "Package author", config.author())?;
    let mail = field(&args.mail, "Package mail", config.mail())?;
    let git_username = field(&args.git_user, "Git username", config.git_user())?;

    let create_repo = args.create_repo
        || prompts::confirm("Create git repository?", false, interactive)
            .context("Failed to read answer")?;
    let push_repo = args.push
        || (create_repo
            && prompts::confirm("Push git repository?", false, interactive)
                .context("Failed to read answer")?);

    let commit_message = if create_repo {
        field(&args.commit, "Git first commit", config.commit())?
    } else {
        args.commit.clone().unwrap_or_else(|| config.commit().to_string())
    };

    Ok(PackageForm {
        name,
        directory,
        version,
        author,
        description,
        mail,
        create_repo,
        push_repo,
        visibility: args.visibility,
        git_username,
        commit_message,
    })
}
