#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rcheckin::models::{AttendeeRecord, CheckInEvent};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ROSTER_JSON: &str = r#"[
    { "id": 1, "name": "Alice Smith", "confirmed": true },
    { "id": 2, "name": "Bob Jones", "confirmed": false },
    { "id": "C-3", "name": "Carla Alvarez", "confirmed": true }
]"#;

/// The CLI with HOME pointed at a per-test directory, so no real
/// configuration is ever read or written.
pub fn rci(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rcheckin");
    cmd.env("HOME", temp_home(name));
    cmd
}

pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write `content` as the roster file for a test and return its path.
pub fn write_roster(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendees.json", name));
    fs::write(&path, content).expect("write roster");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn roster() -> Vec<AttendeeRecord> {
    rcheckin::core::roster::parse_roster(ROSTER_JSON).expect("valid roster")
}

pub fn alice() -> AttendeeRecord {
    AttendeeRecord::new(1, "Alice Smith", true)
}

pub fn bob() -> AttendeeRecord {
    AttendeeRecord::new(2, "Bob Jones", false)
}

/// Event number `n`, with a timestamp that identifies it.
pub fn event(n: i64) -> CheckInEvent {
    let record = AttendeeRecord::new(n, &format!("Attendee {n}"), n % 2 == 0);
    CheckInEvent::from_record(&record, format!("10:00:{:02}", n % 60))
}
