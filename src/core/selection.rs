//! Selection Handler: turn a chosen roster record into what the desk shows
//! and what the history stores.

use crate::models::{AttendeeRecord, CheckInEvent, DisplayState};

/// Result of selecting an attendee: the detail panel plus the event to log.
#[derive(Debug, Clone)]
pub struct Selection {
    pub display: DisplayState,
    pub event: CheckInEvent,
}

/// Build the selection for `record`, stamping the event with `timestamp`.
pub fn select(record: &AttendeeRecord, timestamp: impl Into<String>) -> Selection {
    Selection {
        display: DisplayState::for_record(record),
        event: CheckInEvent::from_record(record, timestamp),
    }
}
