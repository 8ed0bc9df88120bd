/// Error types for delivery metrics operations
use thiserror::Error;

/// Main error type for event decoding and aggregation
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Input is not well-formed JSON
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// An event record lacks a required field
    #[error("event {index}: missing field `{field}`")]
    MissingField {
        /// Zero-based position of the record in the source sequence
        index: usize,
        /// Name of the absent field
        field: &'static str,
    },

    /// An event record is not a JSON object
    #[error("event {index}: malformed record: {reason}")]
    InvalidRecord {
        /// Zero-based position of the record in the source sequence
        index: usize,
        /// What made the record unusable
        reason: &'static str,
    },

    /// The timestamp field is present but cannot be parsed
    #[error("event {index}: invalid timestamp `{value}`")]
    InvalidTimestamp {
        /// Zero-based position of the record in the source sequence
        index: usize,
        /// The raw timestamp value
        value: String,
    },

    /// The duration field is present but is not a non-negative integer
    #[error("event {index}: duration must be a non-negative integer, got {value}")]
    InvalidDuration {
        /// Zero-based position of the record in the source sequence
        index: usize,
        /// The raw duration value
        value: serde_json::Value,
    },

    /// Events arrived out of timestamp order
    #[error("event {index}: timestamp {timestamp} is earlier than the preceding event at {previous}")]
    OutOfOrder {
        /// Zero-based position of the offending event
        index: usize,
        /// Timestamp of the offending event
        timestamp: chrono::NaiveDateTime,
        /// Timestamp of the event that preceded it
        previous: chrono::NaiveDateTime,
    },

    /// Configuration is invalid or incomplete
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for delivery metrics operations
pub type Result<T> = std::result::Result<T, MetricsError>;
