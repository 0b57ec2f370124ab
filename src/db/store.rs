//! Local key-value storage.
//!
//! The check-in history is one whole value under one key. Every backend
//! offers `update`, an atomic read-modify-write of that value, so callers
//! never observe a half-applied change.

use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use std::collections::HashMap;

pub trait KvStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`. Returns whether something was removed.
    fn remove(&mut self, key: &str) -> AppResult<bool>;

    /// Atomically replace the value under `key` with `f(current)`.
    ///
    /// If `f` fails nothing is written.
    fn update<F>(&mut self, key: &str, f: F) -> AppResult<String>
    where
        F: FnOnce(Option<String>) -> AppResult<String>;

    /// Record an audit line for this store's owner.
    fn audit(&mut self, operation: &str, target: &str, message: &str);
}

// ---------------------------------------------------------------------------
// SQLite
// ---------------------------------------------------------------------------

fn read_value(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

fn write_value(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Store backed by the `kv_store` table of the rCheckin database.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (and migrate if needed) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn pool_mut(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        read_value(&self.pool.conn, key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        write_value(&self.pool.conn, key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<bool> {
        let n = self
            .pool
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(n > 0)
    }

    fn update<F>(&mut self, key: &str, f: F) -> AppResult<String>
    where
        F: FnOnce(Option<String>) -> AppResult<String>,
    {
        // IMMEDIATE takes the write lock up front, so a second process
        // cannot slip a write between our read and our write.
        let tx = self
            .pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = read_value(&tx, key)?;
        let next = f(current)?;
        write_value(&tx, key, &next)?;

        tx.commit()?;
        Ok(next)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Volatile store. Keeps audit lines in memory so they can be inspected.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    pub audit_lines: Vec<(String, String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<bool> {
        Ok(self.values.remove(key).is_some())
    }

    fn update<F>(&mut self, key: &str, f: F) -> AppResult<String>
    where
        F: FnOnce(Option<String>) -> AppResult<String>,
    {
        let next = f(self.values.get(key).cloned())?;
        self.values.insert(key.to_string(), next.clone());
        Ok(next)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        self.audit_lines
            .push((operation.to_string(), target.to_string(), message.to_string()));
    }
}
