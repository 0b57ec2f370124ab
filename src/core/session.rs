//! Session context: the roster, the check-in history and the store they
//! persist to, owned together and passed explicitly.

use crate::config::Config;
use crate::core::history::{self, CheckInLog, RenderedList};
use crate::core::matcher::match_roster;
use crate::core::roster::{find_by_id, load_roster};
use crate::core::selection;
use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::checkin::now_label;
use crate::models::{AttendeeId, AttendeeRecord, DisplayState};
use crate::ui::messages::error;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    /// The roster could not be loaded; searches return nothing.
    Degraded { reason: String },
}

pub struct Session<S: KvStore> {
    roster: Vec<AttendeeRecord>,
    log: CheckInLog,
    store: S,
    state: SessionState,
    timestamp_format: String,
}

impl<S: KvStore> Session<S> {
    /// Two-stage startup: roster (may fail → degraded), then history.
    pub fn start(cfg: &Config, store: S) -> Self {
        let roster = load_roster(Path::new(&cfg.roster));
        Self::with_roster_result(roster, store, &cfg.timestamp_format)
    }

    /// Start from an already loaded roster.
    pub fn with_roster(roster: Vec<AttendeeRecord>, store: S, timestamp_format: &str) -> Self {
        Self::with_roster_result(Ok(roster), store, timestamp_format)
    }

    fn with_roster_result(
        roster: AppResult<Vec<AttendeeRecord>>,
        mut store: S,
        timestamp_format: &str,
    ) -> Self {
        let (roster, state) = match roster {
            Ok(r) => (r, SessionState::Ready),
            Err(e) => {
                let reason = e.to_string();
                error(&reason);
                store.audit("roster_load_failed", "roster", &reason);
                (Vec::new(), SessionState::Degraded { reason })
            }
        };

        let log = history::load(&mut store);

        Self {
            roster,
            log,
            store,
            state,
            timestamp_format: timestamp_format.to_string(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.state, SessionState::Degraded { .. })
    }

    pub fn roster(&self) -> &[AttendeeRecord] {
        &self.roster
    }

    pub fn history(&self) -> &CheckInLog {
        &self.log
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn search(&self, query: &str) -> Vec<AttendeeRecord> {
        match_roster(query, &self.roster)
    }

    /// Select by id, check in, and return the detail panel.
    pub fn select(&mut self, id: &AttendeeId) -> AppResult<DisplayState> {
        let record = find_by_id(&self.roster, id)
            .cloned()
            .ok_or_else(|| AppError::AttendeeNotFound(id.to_string()))?;
        self.select_record(&record)
    }

    /// Check in `record`: persist a new history entry, then return the
    /// detail panel for it.
    pub fn select_record(&mut self, record: &AttendeeRecord) -> AppResult<DisplayState> {
        let stamp = now_label(&self.timestamp_format);
        let sel = selection::select(record, stamp);

        let target = format!("{} ({})", record.name, record.id);
        history::append(&mut self.store, &mut self.log, sel.event)?;
        self.store.audit("checkin", &target, &sel.display.status_label);

        Ok(sel.display)
    }

    pub fn render_history(&self) -> RenderedList {
        history::render(&self.log)
    }

    pub fn clear_history(&mut self) -> AppResult<bool> {
        history::clear(&mut self.store, &mut self.log)
    }
}
