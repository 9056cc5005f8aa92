//! Integration tests for the interactive shell: session state, undo, and
//! the quit confirmation flows.

mod support;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{gradetab, read_grades, seed_grades};

#[test]
fn test_shell_add_save_quit() {
    let dir = tempdir().unwrap();

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("user alex\nadd Math 80,90,100 75,85 70\nsave\nquit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User set to alex."))
        .stdout(predicate::str::contains("Major weight automatically set to 30%"))
        .stdout(predicate::str::contains("Class added successfully."))
        .stdout(predicate::str::contains("Grades saved successfully."))
        .stdout(predicate::str::contains("Do you want to quit now?"));

    assert_eq!(
        read_grades(dir.path(), "alex"),
        "Math\t80,90,100\t75,85\t70\t30\t87\n"
    );
}

#[test]
fn test_shell_dash_means_empty_grade_list() {
    let dir = tempdir().unwrap();

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("user alex\nadd Art - - 50\nsave\nquit\ny\n")
        .assert()
        .success();

    assert_eq!(read_grades(dir.path(), "alex"), "Art\t\t\t50\t50\t0\n");
}

#[test]
fn test_shell_load_and_show() {
    let dir = tempdir().unwrap();
    seed_grades(dir.path(), "alex", &["Math\t80,90,100\t75,85\t70\t30"]);

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("user alex\nload\nshow Math\nquit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grades loaded successfully (1 classes)."))
        .stdout(predicate::str::contains("Class Average: 87%"));
}

#[test]
fn test_shell_user_flag_preloads_session() {
    let dir = tempdir().unwrap();
    seed_grades(dir.path(), "alex", &["Math\t80\t90\t70\t30"]);

    gradetab()
        .current_dir(dir.path())
        .args(["--user", "alex", "shell"])
        .write_stdin("load\nlist\nquit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Math\t83%"));
}

#[test]
fn test_shell_errors_do_not_end_session() {
    let dir = tempdir().unwrap();

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("load\nfrobnicate\nundo\nquit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: no user name set"))
        .stdout(predicate::str::contains("error: unknown command: frobnicate"))
        .stdout(predicate::str::contains("error: nothing to undo"));
}

#[test]
fn test_shell_delete_with_undo() {
    let dir = tempdir().unwrap();
    seed_grades(
        dir.path(),
        "alex",
        &["Math\t80\t90\t70\t30", "Sci\t60\t70\t40\t60"],
    );

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("user alex\nload\ndelete Math\ny\ny\nsave\nquit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully deleted Math!"))
        .stdout(predicate::str::contains("Restored Math."));

    // Undo put the record back in its original position.
    assert_eq!(
        read_grades(dir.path(), "alex"),
        "Math\t80\t90\t70\t30\t83\nSci\t60\t70\t40\t60\t66\n"
    );
}

// ============================================================================
// Quit confirmation flows
// ============================================================================

#[test]
fn test_quit_with_unsaved_changes_saves_on_yes() {
    let dir = tempdir().unwrap();

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("user alex\nadd Math 80 90 70\nquit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want to save before quitting?"))
        .stdout(predicate::str::contains("Grades saved successfully."));

    assert_eq!(read_grades(dir.path(), "alex"), "Math\t80\t90\t70\t30\t83\n");
}

#[test]
fn test_quit_with_unsaved_changes_discard_on_no() {
    let dir = tempdir().unwrap();

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("user alex\nadd Math 80 90 70\nquit\nn\n")
        .assert()
        .success();

    assert!(!dir.path().join("alexGrades.txt").exists());
}

#[test]
fn test_quit_cancel_keeps_session_open() {
    let dir = tempdir().unwrap();

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("user alex\nadd Math 80 90 70\nquit\nc\nsave\nquit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want to quit now?"));

    assert_eq!(read_grades(dir.path(), "alex"), "Math\t80\t90\t70\t30\t83\n");
}

#[test]
fn test_quit_clean_session_is_simple_confirm() {
    let dir = tempdir().unwrap();

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("quit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes are made. Do you want to quit now?"));
}

#[test]
fn test_quit_without_user_skips_save_prompt() {
    let dir = tempdir().unwrap();

    // Dirty roster but no user: only the plain confirmation applies.
    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("add Math 80 90 70\nquit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes are made. Do you want to quit now?"))
        .stdout(predicate::str::contains("Do you want to save before quitting?").not());
}

#[test]
fn test_eof_quits_and_reports_unsaved_changes() {
    let dir = tempdir().unwrap();

    gradetab()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("user alex\nadd Math 80 90 70\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsaved changes discarded."));

    assert!(!dir.path().join("alexGrades.txt").exists());
}
