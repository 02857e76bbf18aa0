//! Integration tests for feed, feedback, hide and tips commands

use chrono::Local;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::moodrise_cmd;

fn init_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    moodrise_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_feed_shows_cards_for_category() {
    let temp = init_dir();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("educate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Educate Feed"))
        .stdout(predicate::str::contains("[edu_01]"));
}

#[test]
fn test_feed_rejects_unknown_category() {
    let temp = init_dir();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("memes")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid category: 'memes'"));
}

#[test]
fn test_feed_respects_limit() {
    let temp = init_dir();

    let output = moodrise_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("laugh")
        .arg("--limit")
        .arg("2")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let cards = stdout.lines().filter(|l| l.starts_with('[')).count();
    assert_eq!(cards, 2);
}

#[test]
fn test_feed_locked_out_at_daily_cap() {
    let temp = init_dir();

    let today = Local::now().date_naive().format("%Y-%m-%d");
    fs::write(
        temp.path().join(".moodrise/store.toml"),
        format!("MINUTES_{} = \"60\"\n", today),
    )
    .unwrap();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("laugh")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Daily cap reached"));

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("locked out"));
}

#[test]
fn test_feedback_updates_score_and_ordering() {
    let temp = init_dir();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("feedback")
        .arg("edu_03")
        .arg("smile")
        .assert()
        .success()
        .stdout(predicate::str::contains("'edu_03' now has score 1"));

    let output = moodrise_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("educate")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first_card = stdout.lines().find(|l| l.starts_with('[')).unwrap();
    assert!(first_card.starts_with("[edu_03]"));
}

#[test]
fn test_feedback_rejects_unknown_reaction() {
    let temp = init_dir();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("feedback")
        .arg("edu_01")
        .arg("meh")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid reaction: 'meh'"))
        .stderr(predicate::str::contains("smile, sad"));
}

#[test]
fn test_feedback_unknown_item_fails() {
    let temp = init_dir();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("feedback")
        .arg("edu_99")
        .arg("smile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown content item: 'edu_99'"));
}

#[test]
fn test_hide_removes_item_from_feed() {
    let temp = init_dir();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("hide")
        .arg("edu_01")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hidden 'edu_01'"));

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("educate")
        .assert()
        .success()
        .stdout(predicate::str::contains("[edu_01]").not())
        .stdout(predicate::str::contains("[edu_02]"));
}

#[test]
fn test_tips_prints_three_reminders() {
    let temp = init_dir();

    let output = moodrise_cmd()
        .current_dir(temp.path())
        .arg("tips")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let reminders = stdout.lines().filter(|l| l.starts_with('[')).count();
    assert_eq!(reminders, 3);
}

#[test]
fn test_tips_nudge_is_nonempty() {
    let temp = init_dir();

    let output = moodrise_cmd()
        .current_dir(temp.path())
        .arg("tips")
        .arg("--nudge")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!String::from_utf8(output.stdout).unwrap().trim().is_empty());
}
