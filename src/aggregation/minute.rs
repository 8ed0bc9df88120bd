//! Minute rounding helpers.
//!
//! Both ends of the aggregation range are derived from the same rounding
//! rule, so the rule lives in exactly one place.

use chrono::{NaiveDateTime, Timelike};

/// Round a timestamp down to the whole minute (seconds and sub-seconds
/// zeroed).
pub fn minute_floor(timestamp: NaiveDateTime) -> NaiveDateTime {
    // Zeroing the second and nanosecond fields cannot produce an invalid time.
    timestamp
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}

/// Round a timestamp up to the whole minute: an exact minute maps to itself,
/// anything with a sub-minute remainder maps to the next minute.
pub fn minute_ceil(timestamp: NaiveDateTime) -> NaiveDateTime {
    let floor = minute_floor(timestamp);
    if floor == timestamp {
        floor
    } else {
        floor + chrono::Duration::minutes(1)
    }
}
