//! Roster document loading.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendeeId, AttendeeRecord};
use std::fs;
use std::path::Path;

/// Read the roster: a JSON array of `{ "id", "name", "confirmed" }` objects.
pub fn load_roster(path: &Path) -> AppResult<Vec<AttendeeRecord>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::RosterLoad(format!("{}: {}", path.display(), e)))?;

    parse_roster(&content).map_err(|e| AppError::RosterLoad(format!("{}: {}", path.display(), e)))
}

pub fn parse_roster(content: &str) -> serde_json::Result<Vec<AttendeeRecord>> {
    serde_json::from_str(content)
}

/// Find a record by id (numeric and textual ids compare loosely).
pub fn find_by_id<'a>(roster: &'a [AttendeeRecord], id: &AttendeeId) -> Option<&'a AttendeeRecord> {
    roster.iter().find(|a| a.id.matches(id))
}
