use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch. Single wall-clock source for the crate.
///
/// A clock before 1970 is treated as 0 rather than panicking; telemetry
/// timestamps are producer-assigned anyway, this only stamps recordings.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
