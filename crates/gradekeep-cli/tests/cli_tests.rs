//! End-to-end CLI sessions using assert_cmd.
//!
//! Each test scripts a full interactive session over stdin inside its own
//! temporary working directory, then asserts on the console output and on
//! the records file left behind.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gradekeep() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("gradekeep").unwrap()
}

fn records(dir: &TempDir) -> String {
    std::fs::read_to_string(dir.path().join("student_records.txt")).unwrap()
}

#[test]
fn help_output() {
    gradekeep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive student grade tracker"));
}

#[test]
fn version_output() {
    gradekeep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradekeep"));
}

#[test]
fn add_student_writes_block() {
    let dir = TempDir::new().unwrap();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("1\n1\nAlice\n92\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added successfully."))
        .stdout(predicate::str::contains("Exiting application."));

    let content = records(&dir);
    assert!(content.contains("------ Student Record ------"));
    assert!(content.contains("ID          : S1001"));
    assert!(content.contains("Name        : Alice"));
    assert!(content.contains("Grade       : 92.00"));
    assert!(content.contains("Letter Grade: A+"));
}

#[test]
fn records_survive_restart() {
    let dir = TempDir::new().unwrap();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("1\n1\nAlice\n92\n6\n")
        .assert()
        .success();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Average Grade : 92.00"));
}

#[test]
fn edit_rewrites_grade_and_letter() {
    let dir = TempDir::new().unwrap();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("1\n1\nAlice\n92\n6\n")
        .assert()
        .success();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("3\nS1001\n55\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade updated successfully."));

    let content = records(&dir);
    assert!(content.contains("Grade       : 55.00"));
    assert!(content.contains("Letter Grade: C+"));
    assert!(!content.contains("92.00"));
}

#[test]
fn delete_among_duplicate_names() {
    let dir = TempDir::new().unwrap();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("1\n2\nBob\n70\nBob\n80\n6\n")
        .assert()
        .success();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("4\nBob\nS1002\nyes\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple students found:"))
        .stdout(predicate::str::contains("Student deleted successfully."));

    let content = records(&dir);
    assert!(content.contains("ID          : S1001"));
    assert!(!content.contains("S1002"));
}

#[test]
fn new_ids_continue_past_loaded_ones() {
    let dir = TempDir::new().unwrap();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("1\n2\nAlice\n92\nBob\n70\n6\n")
        .assert()
        .success();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("1\n1\nCarol\n60\n6\n")
        .assert()
        .success();

    assert!(records(&dir).contains("ID          : S1003"));
}

#[test]
fn malformed_record_is_skipped_on_load() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("student_records.txt"),
        "------ Student Record ------\n\
         ID          : S1001\n\
         Name        : Alice\n\
         Grade       : garbage\n\
         Letter Grade: A\n\
         ----------------------------\n\n\
         ------ Student Record ------\n\
         ID          : S1002\n\
         Name        : Bob\n\
         Grade       : 64.00\n\
         Letter Grade: B\n\
         ----------------------------\n\n",
    )
    .unwrap();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 1 malformed record(s)"))
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Average Grade : 64.00"));
}

#[test]
fn config_overrides_records_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("gradekeep.toml"), "records_file = \"roster.txt\"\n").unwrap();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("1\n1\nAlice\n92\n6\n")
        .assert()
        .success();

    assert!(dir.path().join("roster.txt").exists());
    assert!(!dir.path().join("student_records.txt").exists());
}

#[test]
fn eof_without_exit_is_clean() {
    let dir = TempDir::new().unwrap();

    gradekeep()
        .current_dir(dir.path())
        .write_stdin("")
        .assert()
        .success();
}
