//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EXAM: &str = r#"<form><input type="text" name="q1"><textarea name="q2"></textarea></form>"#;

fn examdesk() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("examdesk").unwrap()
}

fn exam_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let exams = dir.path().join("exams");
    std::fs::create_dir(&exams).unwrap();
    std::fs::write(exams.join("first_aid_basics.html"), EXAM).unwrap();
    std::fs::write(exams.join("triage.html"), EXAM).unwrap();
    std::fs::write(exams.join("notes.txt"), "not an exam").unwrap();
    dir
}

fn write_exam(dir: &Path, file: &str, content: &str) {
    std::fs::write(dir.join("exams").join(file), content).unwrap();
}

#[test]
fn list_table() {
    let dir = exam_dir();

    examdesk()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("First Aid Basics"))
        .stdout(predicate::str::contains("triage.html"))
        .stdout(predicate::str::contains("2 exam(s)"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn list_json() {
    let dir = exam_dir();

    let output = examdesk()
        .current_dir(dir.path())
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let exams: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let mut names: Vec<&str> = exams
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["First Aid Basics", "Triage"]);
}

#[test]
fn list_with_exams_dir_override() {
    let dir = exam_dir();
    let empty = TempDir::new().unwrap();

    examdesk()
        .current_dir(empty.path())
        .arg("list")
        .arg("--exams-dir")
        .arg(dir.path().join("exams"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 exam(s)"));
}

#[test]
fn list_missing_directory() {
    let dir = TempDir::new().unwrap();

    examdesk()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No exams found"));
}

#[test]
fn list_unknown_format() {
    let dir = exam_dir();

    examdesk()
        .current_dir(dir.path())
        .arg("list")
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn validate_clean_directory() {
    let dir = exam_dir();

    examdesk()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 exams"))
        .stdout(predicate::str::contains("All exams valid"));
}

#[test]
fn validate_reports_problems() {
    let dir = exam_dir();
    write_exam(dir.path(), "handout.html", "<p>Reading material only</p>");

    examdesk()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("[handout.html] WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_config() {
    let dir = exam_dir();

    examdesk()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--config")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn serve_rejects_short_secret() {
    let dir = exam_dir();
    std::fs::write(dir.path().join("examdesk.toml"), "secret_key = \"short\"\n").unwrap();

    examdesk()
        .current_dir(dir.path())
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("secret_key"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    examdesk()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created examdesk.toml"))
        .stdout(predicate::str::contains("Created exams/sample_exam.html"));

    assert!(dir.path().join("examdesk.toml").exists());
    assert!(dir.path().join("exams/sample_exam.html").exists());

    // The scaffold is immediately usable
    examdesk()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All exams valid"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    examdesk()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    examdesk()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
