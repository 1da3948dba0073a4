use chrono::Utc;
use uuid::Uuid;

/// Generate a fresh event id for sources that do not supply one
pub fn new_event_id() -> String {
    Uuid::new_v4().to_string()
}

/// Convert a millisecond timestamp to whole seconds (floor division)
pub fn millis_to_seconds(millis: i64) -> i64 {
    millis.div_euclid(1000)
}

/// Current time in whole seconds since the Unix epoch
pub fn now_seconds() -> i64 {
    Utc::now().timestamp()
}
