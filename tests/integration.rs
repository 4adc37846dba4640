use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_gdsummary")));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Copy the fixture project into a temp root with `src/dev-view-src/` in place.
fn project() -> TempDir {
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    fs::create_dir_all(src.join("dev-view-src")).unwrap();
    for entry in fs::read_dir(fixture_path("project/src")).unwrap() {
        let path = entry.unwrap().path();
        fs::copy(&path, src.join(path.file_name().unwrap())).unwrap();
    }
    root
}

fn report_path(root: &TempDir) -> PathBuf {
    root.path().join("src/dev-view-src/Main.md")
}

// -- default layout --

#[test]
fn writes_expected_report() {
    let root = project();

    cmd().arg(root.path()).assert().success();

    let output = fs::read_to_string(report_path(&root)).unwrap();
    let expected = fs::read_to_string(fixture_path("Main.expected.md")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn second_run_is_byte_identical() {
    let root = project();

    cmd().arg(root.path()).assert().success();
    let first = fs::read(report_path(&root)).unwrap();
    cmd().arg(root.path()).assert().success();
    let second = fs::read(report_path(&root)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn existing_report_is_overwritten() {
    let root = project();
    fs::write(report_path(&root), "stale content that is much longer than nothing\n".repeat(500))
        .unwrap();

    cmd().arg(root.path()).assert().success();

    let output = fs::read_to_string(report_path(&root)).unwrap();
    assert!(output.starts_with("# File Summary\n"));
    assert!(!output.contains("stale content"));
}

#[test]
fn defaults_to_current_directory() {
    let root = project();

    cmd().current_dir(root.path()).assert().success();

    assert!(report_path(&root).exists());
}

// -- preconditions --

#[test]
fn missing_source_directory_fails() {
    let root = TempDir::new().unwrap();

    cmd()
        .arg(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("source directory not found"));
}

#[test]
fn missing_output_directory_fails_without_writing() {
    let root = project();
    fs::remove_dir(root.path().join("src/dev-view-src")).unwrap();

    cmd()
        .arg(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("output directory not found"));

    assert!(!report_path(&root).exists());
}

#[test]
fn missing_main_script_fails() {
    let root = project();

    cmd()
        .arg(root.path())
        .args(["-m", "Game.gd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"))
        .stderr(predicate::str::contains("Game.gd"));
}

// -- flags --

#[test]
fn no_global_count_uses_four_columns() {
    let root = project();

    cmd()
        .arg(root.path())
        .arg("--no-global-count")
        .assert()
        .success();

    let output = fs::read_to_string(report_path(&root)).unwrap();
    assert!(output.contains(
        "   type |  GDScript file  | nlines | details\n------- | --------------- | ------ | -------\n"
    ));
    assert!(output.contains("  class |         Axis.gd |      7 | defines `class_name Axis` (extends Reference)\n"));
    assert!(!output.contains("nglobals"));
}

#[test]
fn custom_paths_and_names() {
    let root = project();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("Overview.md");

    cmd()
        .args(["-s", root.path().join("src").to_str().unwrap()])
        .args(["-o", out.to_str().unwrap()])
        .args(["-m", "Hud.gd"])
        .args(["-c", "Axis.gd"])
        .assert()
        .success();

    let output = fs::read_to_string(&out).unwrap();
    assert!(output.contains("Hud.gd |      4 |        0 | extends CanvasLayer <--- THIS IS THE MAIN SCRIPT\n"));
    assert!(output.contains("    Hud.gd: 4 lines\n"));
    assert!(output.contains("Read Hud.gd by starting at the `_ready()` callback on line\n0.\n"));
    assert!(output.contains("    5 : func show_text(t: String) -> void:"));
    assert!(output.ends_with("## Axis.gd\n\n_Class summary not generated yet._\n"));
}

#[test]
fn toc_links_use_report_file_name() {
    let root = project();
    let out = root.path().join("src/dev-view-src/Notes.md");

    cmd()
        .arg(root.path())
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let output = fs::read_to_string(&out).unwrap();
    assert!(output.contains("- [8 : Globals](Notes.md#globals)\n"));
}

// -- logging --

#[test]
fn verbose_logs_per_file_details() {
    let root = project();

    cmd()
        .arg(root.path())
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("Main.gd: 19 lines, 3 globals, kind script"));
}

#[test]
fn empty_source_directory_warns_then_fails_on_main() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("src/dev-view-src")).unwrap();

    cmd()
        .arg(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no *.gd files"))
        .stderr(predicate::str::contains("failed to read"));

    assert!(!report_path(&root).exists());
}
