//! End-to-end tests for the mdsplit binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DOC: &str = "Intro paragraph.\n\n## Section One: Overview!\nBody one.\n### Deeper\nstill one\n## Section Two\nBody two.\n";

fn mdsplit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mdsplit").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_split_default_level() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("doc.md"), DOC).unwrap();

    mdsplit(&tmp)
        .args(["--input", "doc.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully split markdown file into 3 files using H2 headers.",
        ))
        .stdout(predicate::str::contains("split_markdown"));

    let out = tmp.path().join("split_markdown");
    assert_eq!(
        fs::read_to_string(out.join("00_introduction.md")).unwrap(),
        "Intro paragraph."
    );
    assert_eq!(
        fs::read_to_string(out.join("01_section_one_overview.md")).unwrap(),
        "## Section One: Overview!\nBody one.\n### Deeper\nstill one\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("02_section_two.md")).unwrap(),
        "## Section Two\nBody two.\n"
    );
}

#[test]
fn test_missing_input_fails() {
    let tmp = TempDir::new().unwrap();

    mdsplit(&tmp)
        .args(["--input", "absent.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input file 'absent.md' does not exist."));
}

#[test]
fn test_invalid_tag_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("doc.md"), DOC).unwrap();

    mdsplit(&tmp)
        .args(["--input", "doc.md", "--tag", "h9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid header level: h9"));

    assert!(!tmp.path().join("split_markdown").exists());
}

#[test]
fn test_config_file_sets_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("doc.md"), DOC).unwrap();
    fs::write(
        tmp.path().join("mdsplit.toml"),
        "tag = \"h3\"\noutput = \"sections\"\n",
    )
    .unwrap();

    mdsplit(&tmp)
        .args(["--input", "doc.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("into 2 files using H3 headers"));

    assert!(tmp.path().join("sections/00_introduction.md").is_file());
    assert!(tmp.path().join("sections/01_deeper.md").is_file());
}

#[test]
fn test_unwritable_destination_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("doc.md"), DOC).unwrap();
    fs::write(tmp.path().join("blocker"), "file").unwrap();

    mdsplit(&tmp)
        .args(["--input", "doc.md", "--output", "blocker/out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot write to"));
}
