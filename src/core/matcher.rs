//! Roster Matcher: case-insensitive substring filter over the roster.

use crate::models::AttendeeRecord;

/// Queries shorter than this (after trimming) produce no suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

/// Trim and lowercase a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `query` is long enough to show suggestions for.
pub fn is_searchable(query: &str) -> bool {
    normalize_query(query).chars().count() >= MIN_QUERY_CHARS
}

/// Return every record whose name contains `query`, ignoring case,
/// in roster order.
///
/// An empty result means "hide the suggestion list"; this is also what a
/// query shorter than [`MIN_QUERY_CHARS`] returns, whatever the roster holds.
pub fn match_roster(query: &str, roster: &[AttendeeRecord]) -> Vec<AttendeeRecord> {
    let needle = normalize_query(query);
    if needle.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    roster
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
