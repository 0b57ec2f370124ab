use rcheckin::cli::commands::lookup::run_loop;
use rcheckin::core::session::Session;
use rcheckin::db::store::MemoryStore;
use std::io::Cursor;

mod common;
use common::roster;

fn run(input: &str) -> (String, Session<MemoryStore>) {
    let mut session = Session::with_roster(roster(), MemoryStore::new(), "%H:%M:%S");
    let mut out = Vec::new();
    run_loop(&mut session, Cursor::new(input.as_bytes()), &mut out, false).unwrap();
    (String::from_utf8(out).unwrap(), session)
}

#[test]
fn test_search_then_pick() {
    let (out, session) = run("al\n2\nquit\n");

    assert!(out.contains("Alice Smith"));
    assert!(out.contains("Carla Alvarez"));
    assert!(out.contains("Payment Confirmed"));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().entries()[0].name, "Carla Alvarez");
}

#[test]
fn test_pick_unconfirmed() {
    let (out, session) = run("jones\n1\n");

    assert!(out.contains("Payment Not Confirmed"));
    assert!(out.contains("Please direct to payment station"));
    assert!(!session.history().entries()[0].confirmed);
}

#[test]
fn test_short_query_shows_nothing() {
    let (out, session) = run("a\n1\n");

    assert!(!out.contains("Alice Smith"));
    assert!(!out.contains("(no matches)"));
    assert!(session.history().is_empty());
}

#[test]
fn test_no_matches_hint() {
    let (out, _) = run("zz\n");
    assert!(out.contains("(no matches)"));
}

#[test]
fn test_back_clears_suggestions() {
    let (_, session) = run("alice\nback\n1\n");
    assert!(session.history().is_empty());
}

#[test]
fn test_out_of_range_number_is_a_query() {
    let (_, session) = run("alice\n7\n");
    assert!(session.history().is_empty());
}

#[test]
fn test_history_command() {
    let (out, _) = run("history\n");
    assert!(out.contains("No check-ins yet"));

    let (out, session) = run("bob\n1\nbob\n1\nhistory\nexit\nalice\n1\n");
    assert_eq!(session.history().len(), 2);
    assert!(out.matches("Bob Jones").count() >= 3);
    assert!(!out.contains("Payment Confirmed"));
}
