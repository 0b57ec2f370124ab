//! Domain records: roster entries, check-in events, detail panel state.

pub mod attendee;
pub mod checkin;
pub mod display;

pub use attendee::{AttendeeId, AttendeeRecord};
pub use checkin::CheckInEvent;
pub use display::DisplayState;
