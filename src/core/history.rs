//! Check-In Log: newest-first, capped history of check-ins, persisted as one
//! JSON array under a fixed key of the local store.

use crate::db::store::KvStore;
use crate::errors::AppResult;
use crate::models::CheckInEvent;
use crate::ui::messages::warning;
use crate::utils::formatting::confirmed_label;
use serde::{Deserialize, Serialize};

/// Key under which the history is persisted.
pub const HISTORY_KEY: &str = "checkHistory";

/// Key where an unreadable history is moved aside for manual recovery.
pub const CORRUPT_HISTORY_KEY: &str = "checkHistory.corrupt";

/// Maximum number of check-ins kept.
pub const HISTORY_CAPACITY: usize = 30;

/// Placeholder shown instead of an empty history.
pub const NO_CHECKINS: &str = "No check-ins yet";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckInLog {
    entries: Vec<CheckInEvent>,
}

impl CheckInLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap entries as-is, newest first. No capping is applied here: a
    /// loaded history is shown exactly as it was stored.
    pub fn from_entries(entries: Vec<CheckInEvent>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CheckInEvent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn newest(&self) -> Option<&CheckInEvent> {
        self.entries.first()
    }

    /// `[event] ++ self`, cut to [`HISTORY_CAPACITY`].
    pub fn prepended(&self, event: CheckInEvent) -> Self {
        let mut next = self.clone();
        next.push_front(event);
        next
    }

    /// Insert `event` at the front and drop what falls past the cap.
    /// Returns the evicted entry, if any.
    pub fn push_front(&mut self, event: CheckInEvent) -> Option<CheckInEvent> {
        self.entries.insert(0, event);
        let mut evicted = None;
        while self.entries.len() > HISTORY_CAPACITY {
            evicted = self.entries.pop();
        }
        evicted
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Parse a persisted value. A JSON `null` counts as no history.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let entries: Option<Vec<CheckInEvent>> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries.unwrap_or_default()))
    }
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

/// Read the persisted history.
///
/// Absent → empty. Unreadable store → empty, with a warning. Unparseable
/// value → empty; the raw value is copied to [`CORRUPT_HISTORY_KEY`] and the
/// event is reported on the operator channel and in the audit log.
pub fn load<S: KvStore>(store: &mut S) -> CheckInLog {
    let raw = match store.get(HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return CheckInLog::new(),
        Err(e) => {
            warning(format!("Could not read check-in history: {}", e));
            return CheckInLog::new();
        }
    };

    match CheckInLog::from_json(&raw) {
        Ok(log) => log,
        Err(e) => {
            quarantine(store, &raw, &e.to_string());
            CheckInLog::new()
        }
    }
}

fn quarantine<S: KvStore>(store: &mut S, raw: &str, reason: &str) {
    let saved = store.set(CORRUPT_HISTORY_KEY, raw);

    let message = match saved {
        Ok(()) => format!(
            "Unreadable check-in history ({}); previous value saved under '{}'",
            reason, CORRUPT_HISTORY_KEY
        ),
        Err(e) => format!(
            "Unreadable check-in history ({}); could not save a copy: {}",
            reason, e
        ),
    };

    warning(&message);
    store.audit("history_corrupt", HISTORY_KEY, &message);
}

/// Prepend `event`, trim to the cap, and overwrite the persisted value
/// with the result: `log` becomes `[event] ++ log` cut to
/// [`HISTORY_CAPACITY`], and that is exactly what is stored.
///
/// If the value being overwritten was unreadable it is moved aside to
/// [`CORRUPT_HISTORY_KEY`] and reported, as [`load`] does.
pub fn append<S: KvStore>(
    store: &mut S,
    log: &mut CheckInLog,
    event: CheckInEvent,
) -> AppResult<Option<CheckInEvent>> {
    let mut next = log.clone();
    let evicted = next.push_front(event);
    let json = next.to_json()?;

    let mut unreadable: Option<(String, String)> = None;
    store.update(HISTORY_KEY, |current| {
        if let Some(raw) = current
            && let Err(e) = CheckInLog::from_json(&raw)
        {
            unreadable = Some((raw, e.to_string()));
        }
        Ok(json)
    })?;

    if let Some((raw, reason)) = unreadable {
        quarantine(store, &raw, &reason);
    }

    *log = next;
    Ok(evicted)
}

/// Forget the persisted history. Returns whether there was one.
pub fn clear<S: KvStore>(store: &mut S, log: &mut CheckInLog) -> AppResult<bool> {
    let removed = store.remove(HISTORY_KEY)?;
    *log = CheckInLog::new();
    store.audit(
        "history_clear",
        HISTORY_KEY,
        if removed {
            "Check-in history cleared"
        } else {
            "Check-in history was already empty"
        },
    );
    Ok(removed)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub name: String,
    pub timestamp: String,
    pub confirmed: bool,
    pub badge: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedList {
    /// Single "no check-ins yet" element.
    Placeholder(&'static str),
    /// One row per event, newest first.
    Rows(Vec<HistoryRow>),
}

/// Describe the history panel for `log`.
pub fn render(log: &CheckInLog) -> RenderedList {
    if log.is_empty() {
        return RenderedList::Placeholder(NO_CHECKINS);
    }

    RenderedList::Rows(
        log.entries()
            .iter()
            .map(|e| HistoryRow {
                name: e.name.clone(),
                timestamp: e.timestamp.clone(),
                confirmed: e.confirmed,
                badge: confirmed_label(e.confirmed),
            })
            .collect(),
    )
}
