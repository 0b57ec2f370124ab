use super::attendee::AttendeeRecord;
use serde::Serialize;

pub const STATUS_CONFIRMED: &str = "Payment Confirmed";
pub const STATUS_NOT_CONFIRMED: &str = "Payment Not Confirmed";
pub const ACTION_ADMIT: &str = "Access Granted - Please admit attendee";
pub const ACTION_PAYMENT: &str = "Please direct to payment station";

/// What the detail panel shows after an attendee has been selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub name: String,
    pub confirmed: bool,
    pub status_label: String,
    pub action_label: String,
}

impl DisplayState {
    pub fn for_record(record: &AttendeeRecord) -> Self {
        let (status, action) = if record.confirmed {
            (STATUS_CONFIRMED, ACTION_ADMIT)
        } else {
            (STATUS_NOT_CONFIRMED, ACTION_PAYMENT)
        };

        Self {
            name: record.name.clone(),
            confirmed: record.confirmed,
            status_label: status.to_string(),
            action_label: action.to_string(),
        }
    }
}
