use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendee identifier as found in the roster document.
///
/// Rosters exported from spreadsheets use numbers, hand-written ones often use
/// strings; both are accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttendeeId {
    Number(i64),
    Text(String),
}

impl AttendeeId {
    /// Parse an id typed on the command line: numeric when possible.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(n) => AttendeeId::Number(n),
            Err(_) => AttendeeId::Text(s.to_string()),
        }
    }

    /// Loose comparison: `Number(7)` and `Text("7")` are the same attendee.
    pub fn matches(&self, other: &AttendeeId) -> bool {
        self == other || self.to_string() == other.to_string()
    }
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendeeId::Number(n) => write!(f, "{}", n),
            AttendeeId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for AttendeeId {
    fn from(n: i64) -> Self {
        AttendeeId::Number(n)
    }
}

impl From<i32> for AttendeeId {
    fn from(n: i32) -> Self {
        AttendeeId::Number(n.into())
    }
}

impl From<&str> for AttendeeId {
    fn from(s: &str) -> Self {
        AttendeeId::Text(s.to_string())
    }
}

/// One roster entry. Loaded once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeRecord {
    pub id: AttendeeId,
    pub name: String,
    pub confirmed: bool,
}

impl AttendeeRecord {
    pub fn new(id: impl Into<AttendeeId>, name: &str, confirmed: bool) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            confirmed,
        }
    }
}
