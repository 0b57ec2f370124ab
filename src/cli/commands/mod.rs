pub mod checkin;
pub mod config;
pub mod history;
pub mod init;
pub mod log;
pub mod lookup;
pub mod roster;
pub mod search;

use crate::config::Config;
use crate::core::session::Session;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Open the configured database, creating its directory if needed.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    SqliteStore::open(&cfg.database)
}

/// Run the two-stage startup against the configured database and roster.
pub(crate) fn start_session(cfg: &Config) -> AppResult<Session<SqliteStore>> {
    let store = open_store(cfg)?;
    Ok(Session::start(cfg, store))
}
