//! Integration tests for the good-mood streak

use chrono::{Days, Local, NaiveDate};
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

fn days_ago(n: u64) -> NaiveDate {
    Local::now().date_naive().checked_sub_days(Days::new(n)).unwrap()
}

/// Seed END entries for past days directly into the store file
fn seed_ends(temp: &TempDir, ends: &[(NaiveDate, &str)]) {
    let mut contents = String::new();
    for (date, mood) in ends {
        contents.push_str(&format!("END_{} = \"{}\"\n", date.format("%Y-%m-%d"), mood));
    }
    fs::write(temp.path().join(".moodrise/store.toml"), contents).unwrap();
}

#[test]
fn test_streak_zero_with_no_history() {
    let temp = init_dir();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good-mood streak: 0 days"));
}

#[test]
fn test_streak_counts_todays_end() {
    let temp = init_dir();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("end")
        .arg("good")
        .assert()
        .success();

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good-mood streak: 1 days"));
}

#[test]
fn test_streak_breaks_on_bad_day() {
    let temp = init_dir();
    seed_ends(
        &temp,
        &[
            (days_ago(0), "GOOD"),
            (days_ago(1), "OKAY"),
            (days_ago(2), "LOW"),
            (days_ago(3), "GREAT"),
        ],
    );

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good-mood streak: 2 days"));
}

#[test]
fn test_streak_breaks_on_missing_day() {
    let temp = init_dir();
    seed_ends(
        &temp,
        &[
            (days_ago(0), "OKAY"),
            (days_ago(1), "GOOD"),
            // days_ago(2) has no END
            (days_ago(3), "GREAT"),
        ],
    );

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good-mood streak: 2 days"));
}

#[test]
fn test_streak_requires_todays_end() {
    let temp = init_dir();
    seed_ends(&temp, &[(days_ago(1), "GREAT"), (days_ago(2), "GREAT")]);

    moodrise_cmd()
        .current_dir(temp.path())
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("Good-mood streak: 0 days"));
}
