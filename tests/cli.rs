use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn postits(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("postits").unwrap();
    cmd.arg("--store").arg(store);
    cmd
}

#[test]
fn add_then_list_shows_the_note() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("post-its.json");

    postits(&store)
        .args(["add", "Groceries", "milk and eggs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: Groceries"));

    postits(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("milk and eggs"));
}

#[test]
fn bare_invocation_lists() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("post-its.json");

    postits(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn blank_title_is_rejected_with_a_field_message() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("post-its.json");

    postits(&store)
        .args(["add", "   ", "content"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The title cannot be empty"));

    postits(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn edit_prompts_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("post-its.json");

    postits(&store)
        .args(["add", "Groceries", "milk"])
        .assert()
        .success();

    postits(&store)
        .args(["edit", "1"])
        .write_stdin("Errands\nmilk and stamps\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note saved: Errands"));

    postits(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Errands"))
        .stdout(predicate::str::contains("milk and stamps"));
}

#[test]
fn edit_keeps_old_values_on_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("post-its.json");

    postits(&store)
        .args(["add", "Groceries", "milk"])
        .assert()
        .success();

    postits(&store)
        .args(["edit", "1"])
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note saved: Groceries"));
}

#[test]
fn edit_can_be_cancelled_with_a_dot() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("post-its.json");

    postits(&store)
        .args(["add", "Groceries", "milk"])
        .assert()
        .success();

    postits(&store)
        .args(["edit", "1"])
        .write_stdin(".\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit cancelled"));

    postits(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn delete_removes_by_position() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("post-its.json");

    postits(&store).args(["add", "A", "first"]).assert().success();
    postits(&store).args(["add", "B", "second"]).assert().success();

    // B is newest, so position 2 is A.
    postits(&store)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted: A"));

    postits(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("B"))
        .stdout(predicate::str::contains("A").not());
}

#[test]
fn delete_out_of_range_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("post-its.json");

    postits(&store)
        .args(["delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No note at position 7"));
}

#[test]
fn clear_requires_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("post-its.json");

    postits(&store).args(["add", "A", "first"]).assert().success();

    postits(&store)
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    postits(&store)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All notes cleared"));

    postits(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}
