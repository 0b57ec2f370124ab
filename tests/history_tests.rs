use rcheckin::core::history::{
    self, CORRUPT_HISTORY_KEY, CheckInLog, HISTORY_CAPACITY, HISTORY_KEY, NO_CHECKINS,
    RenderedList,
};
use rcheckin::db::store::{KvStore, MemoryStore, SqliteStore};
use rcheckin::errors::AppError;
use rcheckin::models::CheckInEvent;

mod common;
use common::{alice, event};

fn timestamps(log: &CheckInLog) -> Vec<String> {
    log.entries().iter().map(|e| e.timestamp.clone()).collect()
}

#[test]
fn test_prepended_puts_new_event_first() {
    let log = CheckInLog::from_entries(vec![event(2), event(1)]);
    let next = log.prepended(event(3));

    assert_eq!(next.entries(), &[event(3), event(2), event(1)]);
    // the original is untouched
    assert_eq!(log.len(), 2);
}

#[test]
fn test_prepended_matches_concat_then_truncate() {
    let full: Vec<CheckInEvent> = (1..=HISTORY_CAPACITY as i64).rev().map(event).collect();
    let log = CheckInLog::from_entries(full.clone());

    let next = log.prepended(event(100));

    let mut expected = vec![event(100)];
    expected.extend(full);
    expected.truncate(HISTORY_CAPACITY);
    assert_eq!(next.entries(), expected.as_slice());
}

#[test]
fn test_31st_append_evicts_oldest() {
    let mut store = MemoryStore::new();
    let mut log = CheckInLog::new();

    for n in 1..=30 {
        let evicted = history::append(&mut store, &mut log, event(n)).unwrap();
        assert!(evicted.is_none());
    }
    assert_eq!(log.len(), 30);

    let evicted = history::append(&mut store, &mut log, event(31)).unwrap();

    assert_eq!(evicted, Some(event(1)));
    assert_eq!(log.len(), 30);
    assert_eq!(log.newest(), Some(&event(31)));
    assert_eq!(log.entries().last(), Some(&event(2)));
}

#[test]
fn test_cap_holds_after_every_append() {
    let mut store = MemoryStore::new();
    let mut log = CheckInLog::new();

    for n in 1..=75 {
        history::append(&mut store, &mut log, event(n)).unwrap();
        assert!(log.len() <= HISTORY_CAPACITY);
        assert_eq!(log.len(), (n as usize).min(HISTORY_CAPACITY));
    }
}

#[test]
fn test_append_persists_whole_log() {
    let mut store = MemoryStore::new();
    let mut log = CheckInLog::new();

    history::append(&mut store, &mut log, event(1)).unwrap();
    history::append(&mut store, &mut log, event(2)).unwrap();

    let raw = store.get(HISTORY_KEY).unwrap().expect("history persisted");
    assert_eq!(CheckInLog::from_json(&raw).unwrap(), log);
    assert_eq!(history::load(&mut store), log);
}

#[test]
fn test_persisted_shape() {
    let log = CheckInLog::from_entries(vec![CheckInEvent::from_record(&alice(), "09:15:00")]);

    assert_eq!(
        log.to_json().unwrap(),
        r#"[{"id":1,"name":"Alice Smith","confirmed":true,"timestamp":"09:15:00"}]"#
    );
}

#[test]
fn test_load_absent_or_null_is_empty() {
    assert!(history::load(&mut MemoryStore::new()).is_empty());
    assert!(history::load(&mut MemoryStore::with_value(HISTORY_KEY, "null")).is_empty());
    assert!(history::load(&mut MemoryStore::with_value(HISTORY_KEY, "[]")).is_empty());
}

#[test]
fn test_load_reads_string_ids() {
    let raw = r#"[{"id":"C-3","name":"Carla Alvarez","confirmed":true,"timestamp":"8:01:02 AM"}]"#;
    let log = history::load(&mut MemoryStore::with_value(HISTORY_KEY, raw));

    assert_eq!(log.len(), 1);
    assert_eq!(log.entries()[0].id.to_string(), "C-3");
    assert_eq!(log.to_json().unwrap(), raw);
}

#[test]
fn test_corrupt_history_is_preserved_and_reported() {
    let raw = "{not json";
    let mut store = MemoryStore::with_value(HISTORY_KEY, raw);

    let mut log = history::load(&mut store);

    assert!(log.is_empty());
    assert_eq!(store.get(CORRUPT_HISTORY_KEY).unwrap().as_deref(), Some(raw));
    assert!(
        store
            .audit_lines
            .iter()
            .any(|(op, target, _)| op == "history_corrupt" && target == HISTORY_KEY)
    );

    // the next append replaces the unreadable value
    history::append(&mut store, &mut log, event(1)).unwrap();
    assert_eq!(timestamps(&history::load(&mut store)), vec![event(1).timestamp]);
    assert_eq!(store.get(CORRUPT_HISTORY_KEY).unwrap().as_deref(), Some(raw));
}

#[test]
fn test_wrong_shape_counts_as_corrupt() {
    let mut store = MemoryStore::with_value(HISTORY_KEY, r#"{"id":1}"#);
    assert!(history::load(&mut store).is_empty());
    assert!(store.get(CORRUPT_HISTORY_KEY).unwrap().is_some());
}

#[test]
fn test_append_writes_given_log_over_stored_value() {
    let stored = CheckInLog::from_entries(vec![event(1)]);
    let mut store = MemoryStore::with_value(HISTORY_KEY, &stored.to_json().unwrap());
    let mut log = CheckInLog::from_entries(vec![event(5)]);

    history::append(&mut store, &mut log, event(9)).unwrap();

    assert_eq!(log.entries(), &[event(9), event(5)]);
    assert_eq!(history::load(&mut store), log);
}

#[test]
fn test_append_preserves_value_corrupted_after_load() {
    let mut store = MemoryStore::new();
    let mut log = history::load(&mut store);
    history::append(&mut store, &mut log, event(1)).unwrap();

    store.set(HISTORY_KEY, "[broken").unwrap();
    history::append(&mut store, &mut log, event(2)).unwrap();

    assert_eq!(log.entries(), &[event(2), event(1)]);
    assert_eq!(history::load(&mut store), log);
    assert_eq!(
        store.get(CORRUPT_HISTORY_KEY).unwrap().as_deref(),
        Some("[broken")
    );
    assert!(
        store
            .audit_lines
            .iter()
            .any(|(op, _, _)| op == "history_corrupt")
    );
}

#[test]
fn test_render_empty_is_placeholder() {
    assert_eq!(
        history::render(&CheckInLog::new()),
        RenderedList::Placeholder(NO_CHECKINS)
    );
    assert_eq!(NO_CHECKINS, "No check-ins yet");
}

#[test]
fn test_load_then_render_reproduces_persisted_content() {
    let persisted = CheckInLog::from_entries(vec![event(3), event(2), event(1)]);
    let mut store = MemoryStore::with_value(HISTORY_KEY, &persisted.to_json().unwrap());

    let loaded = history::load(&mut store);

    match history::render(&loaded) {
        RenderedList::Rows(rows) => {
            assert_eq!(rows.len(), 3);
            for (row, ev) in rows.iter().zip(persisted.entries()) {
                assert_eq!(row.name, ev.name);
                assert_eq!(row.timestamp, ev.timestamp);
                assert_eq!(row.confirmed, ev.confirmed);
                assert_eq!(
                    row.badge,
                    if ev.confirmed { "Confirmed" } else { "Not Confirmed" }
                );
            }
        }
        other => panic!("expected rows, got {:?}", other),
    }
}

#[test]
fn test_clear_removes_history() {
    let mut store = MemoryStore::new();
    let mut log = CheckInLog::new();
    history::append(&mut store, &mut log, event(1)).unwrap();

    assert!(history::clear(&mut store, &mut log).unwrap());
    assert!(log.is_empty());
    assert!(store.get(HISTORY_KEY).unwrap().is_none());
    assert!(!history::clear(&mut store, &mut log).unwrap());
}

#[test]
fn test_sqlite_store_roundtrip() {
    let mut store = SqliteStore::in_memory().unwrap();
    let mut log = history::load(&mut store);
    assert!(log.is_empty());

    for n in 1..=32 {
        history::append(&mut store, &mut log, event(n)).unwrap();
    }

    let reloaded = history::load(&mut store);
    assert_eq!(reloaded, log);
    assert_eq!(reloaded.len(), 30);
    assert_eq!(reloaded.newest(), Some(&event(32)));
}

#[test]
fn test_sqlite_failed_update_writes_nothing() {
    let mut store = SqliteStore::in_memory().unwrap();
    store.set("k", "before").unwrap();

    let res = store.update("k", |_| Err(AppError::Other("boom".into())));

    assert!(res.is_err());
    assert_eq!(store.get("k").unwrap().as_deref(), Some("before"));
}

#[test]
fn test_sqlite_store_remove() {
    let mut store = SqliteStore::in_memory().unwrap();
    assert!(!store.remove("missing").unwrap());

    store.set("k", "v").unwrap();
    store.set("k", "w").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
    assert!(store.remove("k").unwrap());
    assert!(store.get("k").unwrap().is_none());
}

#[test]
fn test_migrations_are_idempotent() {
    use rcheckin::db::initialize::init_db;
    use rcheckin::db::migrate::table_exists;

    let conn = rusqlite::Connection::open_in_memory().unwrap();
    init_db(&conn).unwrap();
    init_db(&conn).unwrap();

    assert!(table_exists(&conn, "kv_store").unwrap());
    assert!(table_exists(&conn, "log").unwrap());

    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 2);
}
