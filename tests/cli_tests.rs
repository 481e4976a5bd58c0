//! Exit-status contract of the `treegit` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use predicates::prelude::{PredicateBooleanExt, PredicateStrExt, predicate};
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(["-c", "user.name=treegit", "-c", "user.email=treegit@example.com"])
        .args(["-c", "commit.gpgsign=false"])
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

/// `docs/readme.txt` committed then modified, `scratch/new.txt` untracked.
fn setup_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    git(root, &["init", "-q"]);
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/readme.txt"), "hello\n").unwrap();
    git(root, &["add", "."]);
    git(root, &["commit", "-q", "-m", "init"]);
    fs::write(root.join("docs/readme.txt"), "hello again\n").unwrap();
    fs::create_dir_all(root.join("scratch")).unwrap();
    fs::write(root.join("scratch/new.txt"), "new\n").unwrap();
    temp
}

#[test]
fn test_prints_alist_on_change() -> TestResult {
    if which::which("git").is_err() {
        return Ok(());
    }
    let repo = setup_repo();

    let mut cmd = Command::cargo_bin("treegit")?;
    cmd.current_dir(repo.path()).args(["docs/readme.txt", "0", "docs"]);

    cmd.assert()
        .code(0)
        .stdout(predicate::str::diff(r#"(("docs/readme.txt" . "M")("docs" . "M"))"#).trim());

    Ok(())
}

#[test]
fn test_unchanged_exits_with_two_and_prints_nothing() -> TestResult {
    if which::which("git").is_err() {
        return Ok(());
    }
    let repo = setup_repo();

    let mut cmd = Command::cargo_bin("treegit")?;
    cmd.current_dir(repo.path()).args(["docs/readme.txt", "M", "docs"]);

    cmd.assert().code(2).stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn test_json_format() -> TestResult {
    if which::which("git").is_err() {
        return Ok(());
    }
    let repo = setup_repo();

    let mut cmd = Command::cargo_bin("treegit")?;
    cmd.current_dir(repo.path())
        .args(["-f", "json", "docs/readme.txt", "nil"]);

    cmd.assert()
        .code(0)
        .stdout(predicate::str::diff(r#"[{"path":"docs/readme.txt","status":"M"}]"#).trim());

    Ok(())
}

#[test]
fn test_dash_and_empty_previous_mean_no_prior() -> TestResult {
    if which::which("git").is_err() {
        return Ok(());
    }
    let repo = setup_repo();

    for previous in ["-", ""] {
        let mut cmd = Command::cargo_bin("treegit")?;
        cmd.current_dir(repo.path())
            .args(["docs/readme.txt", previous, "docs"]);

        cmd.assert()
            .code(0)
            .stdout(predicate::str::diff(r#"(("docs/readme.txt" . "M")("docs" . "M"))"#).trim());
    }

    Ok(())
}

#[test]
fn test_work_dir_option_selects_repository() -> TestResult {
    if which::which("git").is_err() {
        return Ok(());
    }
    let repo = setup_repo();
    let elsewhere = TempDir::new()?;

    let mut cmd = Command::cargo_bin("treegit")?;
    cmd.current_dir(elsewhere.path())
        .arg("-C")
        .arg(repo.path())
        .args(["docs/readme.txt", "nil", "docs"]);

    cmd.assert()
        .code(0)
        .stdout(predicate::str::diff(r#"(("docs/readme.txt" . "M")("docs" . "M"))"#).trim());

    let mut cmd = Command::cargo_bin("treegit")?;
    cmd.current_dir(elsewhere.path())
        .arg("--work-dir")
        .arg(repo.path())
        .args(["docs/readme.txt", "M"]);

    cmd.assert().code(2).stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn test_no_abort_keeps_dominant_listing() -> TestResult {
    if which::which("git").is_err() {
        return Ok(());
    }
    let repo = setup_repo();

    let mut cmd = Command::cargo_bin("treegit")?;
    cmd.current_dir(repo.path())
        .args(["--no-abort", "scratch/new.txt", "nil", "scratch", "docs"]);

    cmd.assert().code(0).stdout(
        predicate::str::diff(
            r#"(("scratch/new.txt" . "?")("scratch" . "?")("docs" . "?"))"#,
        )
        .trim(),
    );

    let mut cmd = Command::cargo_bin("treegit")?;
    cmd.current_dir(repo.path())
        .args(["scratch/new.txt", "?", "scratch", "docs", "--no-abort"]);

    cmd.assert().code(2).stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn test_invalid_previous_is_failure() -> TestResult {
    let dir = TempDir::new()?;

    let mut cmd = Command::cargo_bin("treegit")?;
    cmd.current_dir(dir.path()).args(["a.txt", "X"]);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value 'X'"));

    Ok(())
}

#[test]
fn test_missing_git_is_failure() -> TestResult {
    let dir = TempDir::new()?;
    let missing = dir.path().join("no-such-git");

    let mut cmd = Command::cargo_bin("treegit")?;
    cmd.current_dir(dir.path())
        .arg("--git")
        .arg(&missing)
        .args(["a.txt", "0", "."]);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty().not());

    Ok(())
}
