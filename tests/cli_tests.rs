//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const PUZZLE: &str = "\
Dancing Elf + Dark Witch = Dark Magician
Dark Witch + Dancing Elf = Dark Magician
Baby Dragon + Time Wizard = Thousand Dragon
garbage line without separators
";

fn write_puzzle(dir: &Path) -> PathBuf {
    let path = dir.join("fusions.txt");
    std::fs::write(&path, PUZZLE).unwrap();
    path
}

fn cmd() -> Command {
    Command::cargo_bin("fusion-solver").unwrap()
}

#[test]
fn match_with_have_flags() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_puzzle(tmp.path());

    cmd()
        .args(["match"])
        .arg(&file)
        .args(["--have", "Dancing Elf", "--have", "Dark Witch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching fusions (1):"))
        .stdout(predicate::str::contains(
            "Dancing Elf + Dark Witch = Dark Magician",
        ))
        .stdout(predicate::str::contains("Fusions you can make (1):"));
}

#[test]
fn match_json_output_dedups_and_flags_ignores() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_puzzle(tmp.path());

    let output = cmd()
        .args(["match", "--format", "json"])
        .arg(&file)
        .args(["--have", "Dancing Elf", "--have", "Dark Witch"])
        .args(["--hide", "dark magician"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = report["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["ignored"], true);
    assert!(report["results"].as_array().unwrap().is_empty());
}

#[test]
fn match_without_materials_explains_itself() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_puzzle(tmp.path());
    let state = tmp.path().join("state");

    cmd()
        .args(["match"])
        .arg(&file)
        .arg("--state-dir")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("No materials given"));
}

#[test]
fn match_uses_saved_state() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_puzzle(tmp.path());
    let state = tmp.path().join("state");

    for term in ["Baby Dragon", "Time Wizard"] {
        cmd()
            .args(["state", "add-filter", term])
            .arg("--state-dir")
            .arg(&state)
            .assert()
            .success();
    }

    cmd()
        .args(["match"])
        .arg(&file)
        .arg("--state-dir")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("Thousand Dragon"));
}

#[test]
fn state_show_lists_saved_terms() {
    let tmp = tempfile::tempdir().unwrap();
    let state = tmp.path().join("state");

    cmd()
        .args(["state", "add-ignore", "Thousand Dragon"])
        .arg("--state-dir")
        .arg(&state)
        .assert()
        .success();

    cmd()
        .args(["state", "show"])
        .arg("--state-dir")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("thousand dragon"));
}

#[test]
fn suggest_rejects_short_prefix() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_puzzle(tmp.path());

    cmd()
        .args(["suggest"])
        .arg(&file)
        .arg("da")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prefix too short"));
}

#[test]
fn suggest_matches_prefix() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_puzzle(tmp.path());

    cmd()
        .args(["suggest"])
        .arg(&file)
        .arg("dar")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark witch"))
        .stdout(predicate::str::contains("dancing elf").not());
}

#[test]
fn materials_lists_distinct_names() {
    let tmp = tempfile::tempdir().unwrap();
    let file = write_puzzle(tmp.path());

    let output = cmd()
        .args(["materials", "--format", "json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        names,
        vec!["dancing elf", "dark witch", "baby dragon", "time wizard"]
    );
}

#[test]
fn missing_input_file_fails() {
    cmd()
        .args(["materials", "no-such-file.txt"])
        .assert()
        .failure();
}
