use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Minute rounding helpers
pub mod minute;
/// Window configuration
pub mod config;
/// Per-minute aggregation driver
pub mod evaluator;
/// FIFO window state
pub mod sliding_window;

pub use config::WindowConfig;
pub use evaluator::aggregate;
pub use sliding_window::WindowQueue;

/// Timestamp format of the `date` field on emitted records.
const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One emitted per-minute aggregate.
///
/// Serializes as `{"date": "YYYY-MM-DD HH:MM:SS", "average_delivery_time": n}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// Minute boundary this record covers, always aligned to :00 seconds
    #[serde(rename = "date", with = "minute_format")]
    pub minute: NaiveDateTime,
    /// Mean duration of the events inside the trailing window, zero when
    /// the window is empty
    pub average_delivery_time: f64,
}

mod minute_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::MINUTE_FORMAT;

    pub fn serialize<S>(minute: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&minute.format(MINUTE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, MINUTE_FORMAT).map_err(serde::de::Error::custom)
    }
}
