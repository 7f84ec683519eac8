//! Integration tests for note commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_notepad, new_note, sideway_cmd};

#[test]
fn test_list_no_notes() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    sideway_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

#[test]
fn test_new_note_is_listed_newest_first() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    let groceries = new_note(temp.path(), "Groceries", "Milk, Eggs");
    let todo = new_note(temp.path(), "Todo", "Call Bob");

    let output = sideway_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with(&todo));
    assert!(lines[0].ends_with("Todo"));
    assert_eq!(lines[1], "    Call Bob");
    assert!(lines[2].starts_with(&groceries));
    assert_eq!(lines[3], "    Milk, Eggs");
}

#[test]
fn test_list_limit() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    new_note(temp.path(), "one", "");
    new_note(temp.path(), "two", "");

    sideway_cmd()
        .current_dir(temp.path())
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("two"))
        .stdout(predicate::str::contains("one").not());
}

#[test]
fn test_new_blank_title_uses_default() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    let id = new_note(temp.path(), "", "some text");

    sideway_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Untitled Note\nCreated: "))
        .stdout(predicate::str::contains("some text"))
        .stdout(predicate::str::contains("Updated").not());
}

#[test]
fn test_new_empty_note_rejected() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    sideway_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "  ", "--content", ""])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "Please enter a title or content for your note.",
        ));

    assert!(!temp
        .path()
        .join(".sideway/data/sideway_notepad_notes.json")
        .exists());
}

#[test]
fn test_edit_note() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    let id = new_note(temp.path(), "Groceries", "Milk, Eggs");

    sideway_cmd()
        .current_dir(temp.path())
        .args(["edit", &id, "--title", "Groceries v2", "--content", "Milk, Eggs, Bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated note {}", id)));

    sideway_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Groceries v2\n"))
        .stdout(predicate::str::contains("| Updated: "))
        .stdout(predicate::str::contains("Milk, Eggs, Bread"));
}

#[test]
fn test_edit_only_content_keeps_title() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    let id = new_note(temp.path(), "Todo", "Call Bob");

    sideway_cmd()
        .current_dir(temp.path())
        .args(["edit", &id, "--content", "Call Alice"])
        .assert()
        .success();

    sideway_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Todo\n"))
        .stdout(predicate::str::contains("Call Alice"));
}

#[test]
fn test_edit_and_show_unknown_id() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    sideway_cmd()
        .current_dir(temp.path())
        .args(["edit", "nonexistent", "--title", "x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Note not found: 'nonexistent'"));

    sideway_cmd()
        .current_dir(temp.path())
        .args(["show", "nonexistent"])
        .assert()
        .code(3);
}

#[test]
fn test_delete_with_yes() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    let keep = new_note(temp.path(), "Groceries", "Milk");
    let gone = new_note(temp.path(), "Todo", "Call Bob");

    sideway_cmd()
        .current_dir(temp.path())
        .args(["delete", &gone, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted note {}", gone)));

    sideway_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(keep))
        .stdout(predicate::str::contains(gone).not());
}

#[test]
fn test_delete_prompt_declined() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    let id = new_note(temp.path(), "Todo", "Call Bob");

    sideway_cmd()
        .current_dir(temp.path())
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Todo\n"))
        .stdout(predicate::str::contains("Cancelled"))
        .stderr(predicate::str::contains(
            "Are you sure you want to delete this note? [y/N]",
        ));

    sideway_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success();
}

#[test]
fn test_delete_prompt_accepted() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    let id = new_note(temp.path(), "Todo", "Call Bob");

    sideway_cmd()
        .current_dir(temp.path())
        .args(["delete", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted note"));

    sideway_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

#[test]
fn test_delete_unknown_id() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    sideway_cmd()
        .current_dir(temp.path())
        .args(["delete", "nonexistent", "--yes"])
        .assert()
        .code(3);
}

#[test]
fn test_notes_written_as_json_array() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    let id = new_note(temp.path(), "Groceries", "Milk");

    let raw = fs::read_to_string(temp.path().join(".sideway/data/sideway_notepad_notes.json"))
        .unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains(&format!("\"id\":\"{}\"", id)));
    assert!(raw.contains("\"createdAt\":\""));
    assert!(raw.contains("\"updatedAt\":\""));
}

#[test]
fn test_corrupt_store_reported_by_list() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    fs::write(
        temp.path().join(".sideway/data/sideway_notepad_notes.json"),
        "{ not json",
    )
    .unwrap();

    sideway_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load notes"));
}

#[test]
fn test_reads_legacy_records() {
    let temp = TempDir::new().unwrap();
    init_notepad(temp.path());

    fs::write(
        temp.path().join(".sideway/data/sideway_notepad_notes.json"),
        r#"[{"id":"1737104400000k3j9x2a1b","title":"Old note","content":"from the extension","createdAt":"2025-01-17T09:00:00.000Z","updatedAt":1737190800000}]"#,
    )
    .unwrap();

    sideway_cmd()
        .current_dir(temp.path())
        .args(["show", "1737104400000k3j9x2a1b"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created: 17-01-2025 | Updated: 18-01-2025",
        ));
}

#[test]
fn test_memory_backend_does_not_persist() {
    let temp = TempDir::new().unwrap();

    sideway_cmd()
        .arg("init")
        .arg(temp.path())
        .args(["--backend", "memory"])
        .assert()
        .success();

    new_note(temp.path(), "Ephemeral", "gone on exit");

    sideway_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}
