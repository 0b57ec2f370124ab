use super::attendee::{AttendeeId, AttendeeRecord};
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// A single check-in, as stored in the persisted history.
///
/// Field names match the stored JSON objects: `id`, `name`, `confirmed`,
/// `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInEvent {
    pub id: AttendeeId,
    pub name: String,
    pub confirmed: bool,
    pub timestamp: String,
}

impl CheckInEvent {
    /// Snapshot `record` with an explicit timestamp label.
    pub fn from_record(record: &AttendeeRecord, timestamp: impl Into<String>) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            confirmed: record.confirmed,
            timestamp: timestamp.into(),
        }
    }
}

/// Fallback used when the configured timestamp format is not valid strftime.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Current local time formatted with `format`, e.g. "14:05:09".
pub fn now_label(format: &str) -> String {
    let invalid = StrftimeItems::new(format).any(|i| matches!(i, Item::Error));
    let format = if invalid {
        DEFAULT_TIMESTAMP_FORMAT
    } else {
        format
    };
    Local::now().format(format).to_string()
}
