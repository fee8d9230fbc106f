use serde::{Deserialize, Serialize};

/// An appointment window on a chosen date, as returned by
/// `GET /time-slots?date=...`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
}

impl TimeSlot {
    /// The "start-end" string the booking submission carries.
    pub fn as_slot_string(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }
}
