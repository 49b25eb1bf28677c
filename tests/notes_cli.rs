use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn boardz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("boardz").unwrap();
    cmd.env("BOARDZ_HOME", home)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("RUST_LOG");
    cmd
}

fn saved_notes(home: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(home.join("notes.json")).unwrap();
    serde_json::from_str::<Vec<Value>>(&raw).unwrap()
}

fn titles(home: &Path) -> Vec<String> {
    saved_notes(home)
        .iter()
        .map(|n| n["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn fresh_board_lists_default_notes_without_saving() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery List"))
        .stdout(predicate::str::contains("Meeting Notes"))
        .stdout(predicate::str::contains("Idea for App"));

    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn no_subcommand_lists() {
    let home = TempDir::new().unwrap();
    boardz(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery List"));
}

#[test]
fn add_appends_and_persists() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .args(["add", "Shopping", "Buy rice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added"));

    assert_eq!(
        titles(home.path()),
        vec!["Grocery List", "Meeting Notes", "Idea for App", "Shopping"]
    );

    boardz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping  Buy rice"));
}

#[test]
fn blank_add_is_silently_rejected() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .args(["add", "", "Buy rice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing added"));

    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn edit_and_remove() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .args(["edit", "2", "--title", "Standup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated (2): Standup"));

    boardz(home.path())
        .args(["remove", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note removed (3): Idea for App"));

    let notes = saved_notes(home.path());
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[1]["id"], 2);
    assert_eq!(notes[1]["title"], "Standup");
    assert_eq!(
        notes[1]["content"],
        "Discuss new project timeline , assign atsks to team"
    );
}

#[test]
fn edit_unknown_note_fails() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .args(["edit", "99", "--title", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found: 99"));
}

#[test]
fn remove_unknown_note_warns() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .args(["remove", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No note with id 99"));

    assert_eq!(saved_notes(home.path()).len(), 3);
}

#[test]
fn corrupt_slot_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("notes.json"), "{ definitely not json").unwrap();

    boardz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery List"));
}

#[test]
fn board_session_keeps_draft_between_lines() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .arg("board")
        .write_stdin(
            "title Weekend\n\
             content Hike and picnic\n\
             submit\n\
             edit 1\n\
             content Milk only\n\
             submit\n\
             content Oat milk\n\
             submit\n\
             quit\n\
             title ignored after quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added"))
        .stdout(predicate::str::contains("Note updated (1)"));

    let notes = saved_notes(home.path());
    assert_eq!(notes.len(), 4);
    assert_eq!(notes[0]["content"], "Oat milk");
    assert_eq!(notes[3]["title"], "Weekend");
}

#[test]
fn board_reports_bad_lines_and_continues() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .arg("board")
        .write_stdin("frobnicate\ndelete 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown board command: frobnicate"))
        .stdout(predicate::str::contains("Note removed (1)"));

    assert_eq!(titles(home.path()), vec!["Meeting Notes", "Idea for App"]);
}

#[test]
fn count_argument_and_stdin() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .args(["count", "  hello   world  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 words  17 characters"));

    boardz(home.path())
        .arg("count")
        .write_stdin("one two three")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 words  13 characters"));
}

#[test]
fn config_changes_storage_key() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .args(["config", "storage-key", "board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key set to board"));

    boardz(home.path())
        .args(["add", "Shopping", "Buy rice"])
        .assert()
        .success();

    assert!(home.path().join("board.json").exists());
    assert!(!home.path().join("notes.json").exists());

    boardz(home.path())
        .args(["config", "storage-key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key = board"));
}

#[test]
fn config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn quiz_without_service_degrades() {
    let home = TempDir::new().unwrap();

    boardz(home.path())
        .args(["config", "trivia-api", "http://127.0.0.1:9/api.php"])
        .assert()
        .success();

    boardz(home.path())
        .env("NO_PROXY", "*")
        .arg("quiz")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No questions available. Please try again later.",
        ));
}
