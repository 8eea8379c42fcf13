//! Integration tests for the `uploadhub` binary.
//!
//! These tests run the real binary against temporary directories. They never
//! create a repository: `--create-repo` is covered in `git_integration.rs`.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Workspace with an isolated config home, a templates directory and a
/// directory to create packages in.
struct Workspace {
    home: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        home.child("templates/license.txt")
            .write_str("Test License\n")
            .unwrap();
        home.child("templates/setup.py")
            .write_str(r#"setup(name="NAME", version="VERSION", author="AUTHOR", author_email="MAIL", description="DESCRIPTION")"#)
            .unwrap();
        home.child("work").create_dir_all().unwrap();
        Self { home }
    }

    fn work(&self) -> assert_fs::fixture::ChildPath {
        self.home.child("work")
    }

    /// Command with environment isolated from the user's real config.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("uploadhub").unwrap();
        cmd.env("XDG_CONFIG_HOME", self.home.child("xdg").path())
            .env("HOME", self.home.path())
            .env_remove("UPLOADHUB_CONFIG")
            .env_remove("UPLOADHUB_TEMPLATES")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `uploadhub new` with every required field and local templates.
    fn new_package(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["new", "--no-interactive", "--templates"])
            .arg(self.home.child("templates").path())
            .args(["--name", "foo", "--dir"])
            .arg(self.work().path())
            .args([
                "--pkg-version",
                "0.1",
                "--author",
                "A",
                "--description",
                "d",
                "--mail",
                "a@b.c",
            ]);
        cmd
    }
}

// =============================================================================
// Tests: Launch Surface
// =============================================================================

#[test]
fn help_flag_works() {
    Command::cargo_bin("uploadhub")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("uploadhub init"));
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("uploadhub")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("uploadhub"));
}

#[test]
fn mode_is_required() {
    Command::cargo_bin("uploadhub")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("<MODE>"));
}

#[test]
fn unknown_mode_rejected() {
    Command::cargo_bin("uploadhub")
        .unwrap()
        .arg("delete")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode 'delete'"));
}

#[test]
fn upload_mode_is_a_stub() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("Upload")
        .assert()
        .success()
        .stderr(predicate::str::contains("not implemented"));
}

#[test]
fn completion_mode_prints_script() {
    Command::cargo_bin("uploadhub")
        .unwrap()
        .args(["completion", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uploadhub"));
}

// =============================================================================
// Tests: New Package
// =============================================================================

#[test]
fn new_package_scaffolds_layout() {
    let ws = Workspace::new();

    ws.new_package()
        .assert()
        .success()
        .stdout(predicate::str::contains("Package successfully created..."));

    let root = ws.work().child("foo");
    root.child("LICENSE").assert("Test License\n");
    root.child("README.md").assert("");
    root.child("setup.py").assert(
        r#"setup(name="foo", version="0.1", author="A", author_email="a@b.c", description="d")"#,
    );
    root.child("foo/__init__.py").assert("");
    root.child("foo/__main__.py").assert("");
    root.child(".git").assert(predicate::path::missing());
}

#[test]
fn new_package_quiet_prints_nothing() {
    let ws = Workspace::new();

    ws.new_package()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    ws.work().child("foo/setup.py").assert(predicate::path::exists());
}

#[test]
fn new_package_twice_succeeds() {
    let ws = Workspace::new();

    ws.new_package().assert().success();
    ws.work().child("foo/README.md").write_str("notes").unwrap();

    ws.new_package().assert().success();

    ws.work().child("foo/README.md").assert("");
    ws.work().child("foo/LICENSE").assert("Test License\n");
}

#[test]
fn missing_field_aborts_before_writing() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["new", "--no-interactive", "--templates"])
        .arg(ws.home.child("templates").path())
        .args(["--name", "foo", "--dir"])
        .arg(ws.work().path())
        .args(["--pkg-version", "0.1", "--author", "A", "--mail", "a@b.c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "must provide package description (--description)",
        ));

    ws.work().child("foo").assert(predicate::path::missing());
}

#[test]
fn missing_commit_message_aborts_before_writing() {
    let ws = Workspace::new();

    ws.new_package()
        .args(["--create-repo", "--commit", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must provide first commit message"));

    ws.work().child("foo").assert(predicate::path::missing());
}

#[test]
fn missing_templates_is_fatal() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["new", "--no-interactive", "--templates"])
        .arg(ws.home.child("nowhere").path())
        .args(["--name", "foo", "--dir"])
        .arg(ws.work().path())
        .args([
            "--pkg-version",
            "0.1",
            "--author",
            "A",
            "--description",
            "d",
            "--mail",
            "a@b.c",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template resource missing"));
}

#[test]
fn config_prefills_defaults() {
    let ws = Workspace::new();
    let config = ws.home.child("config.json");
    config
        .write_str(r#"{"version": "9.9", "author": "Cfg", "mail": "cfg@x.y"}"#)
        .unwrap();

    ws.cmd()
        .args(["new", "--no-interactive", "--config"])
        .arg(config.path())
        .arg("--templates")
        .arg(ws.home.child("templates").path())
        .args(["--name", "bar", "--description", "d", "--dir"])
        .arg(ws.work().path())
        .assert()
        .success();

    ws.work().child("bar/setup.py").assert(predicate::str::contains(
        r#"version="9.9", author="Cfg", author_email="cfg@x.y""#,
    ));
}

#[test]
fn malformed_config_is_fatal() {
    let ws = Workspace::new();
    let config = ws.home.child("config.json");
    config.write_str("{ not json").unwrap();

    ws.cmd()
        .args(["new", "--no-interactive", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// =============================================================================
// Tests: Init
// =============================================================================

#[test]
fn init_writes_config_and_templates() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"));

    let dir = ws.home.child("xdg/uploadhub");
    dir.child("config.json")
        .assert(predicate::str::contains("\"commit\": \"Initial commit\""));
    dir.child("templates/license.txt")
        .assert(predicate::str::contains("MIT License"));
    dir.child("templates/setup.py")
        .assert(predicate::str::contains("\"DESCRIPTION\""));

    ws.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"));
}

#[test]
fn init_then_new_uses_installed_templates() {
    let ws = Workspace::new();
    ws.cmd().arg("init").assert().success();

    ws.cmd()
        .args(["new", "--no-interactive", "--name", "baz", "--dir"])
        .arg(ws.work().path())
        .args(["--author", "A", "--description", "d", "--mail", "a@b.c"])
        .assert()
        .success();

    ws.work()
        .child("baz/LICENSE")
        .assert(predicate::str::contains("MIT License"));
    ws.work()
        .child("baz/setup.py")
        .assert(predicate::str::contains(r#"name="baz""#))
        .assert(predicate::str::contains(r#"version="0.1.0""#));
}
