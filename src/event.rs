/// Typed delivery events decoded from raw JSON records
use chrono::NaiveDateTime;
use serde_json::Value;

use crate::error::{MetricsError, Result};

/// Timestamp formats accepted on input. The producing system writes
/// space-separated timestamps with a fractional second part; the
/// `T`-separated ISO variant is accepted as well.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// A single translation delivery event.
///
/// Events have no identity beyond their fields; several events may share a
/// timestamp. Records carry other fields (`translation_id`, `client_name`,
/// `nr_words`, ...) which the aggregation ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryEvent {
    /// When the translation was delivered
    pub timestamp: NaiveDateTime,
    /// Delivery duration in seconds
    pub duration: u64,
}

impl DeliveryEvent {
    /// Create an event from already-validated parts.
    pub fn new(timestamp: NaiveDateTime, duration: u64) -> Self {
        Self {
            timestamp,
            duration,
        }
    }

    /// Decode one raw record, validating presence and type of both required
    /// fields eagerly.
    ///
    /// `index` is the zero-based position of the record in its source
    /// sequence and is carried into every error for diagnostics.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let record = value.as_object().ok_or(MetricsError::InvalidRecord {
            index,
            reason: "expected a JSON object",
        })?;

        let raw_timestamp = record
            .get("timestamp")
            .ok_or(MetricsError::MissingField {
                index,
                field: "timestamp",
            })?;
        let raw_timestamp = raw_timestamp
            .as_str()
            .ok_or_else(|| MetricsError::InvalidTimestamp {
                index,
                value: raw_timestamp.to_string(),
            })?;
        let timestamp = parse_timestamp(index, raw_timestamp)?;

        let raw_duration = record.get("duration").ok_or(MetricsError::MissingField {
            index,
            field: "duration",
        })?;
        let duration = raw_duration
            .as_u64()
            .ok_or_else(|| MetricsError::InvalidDuration {
                index,
                value: raw_duration.clone(),
            })?;

        Ok(Self {
            timestamp,
            duration,
        })
    }
}

/// Parse a timestamp in any of the accepted formats.
fn parse_timestamp(index: usize, raw: &str) -> Result<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    Err(MetricsError::InvalidTimestamp {
        index,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 12, 26)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_decode_full_record() {
        let record = json!({
            "timestamp": "2018-12-26 18:11:08.509654",
            "translation_id": "5aa5b2f39f7254a75aa5",
            "source_language": "en",
            "target_language": "fr",
            "client_name": "airliberty",
            "event_name": "translation_delivered",
            "nr_words": 30,
            "duration": 20
        });

        let event = DeliveryEvent::from_value(0, &record).unwrap();
        assert_eq!(event.duration, 20);
        assert_eq!(
            event.timestamp,
            at(18, 11, 8) + chrono::Duration::microseconds(509654)
        );
    }

    #[test]
    fn test_decode_t_separated_timestamp() {
        let record = json!({"timestamp": "2018-12-26T18:11:08", "duration": 5});
        let event = DeliveryEvent::from_value(0, &record).unwrap();
        assert_eq!(event.timestamp, at(18, 11, 8));
    }

    #[test]
    fn test_missing_timestamp() {
        let record = json!({"duration": 20});
        let err = DeliveryEvent::from_value(7, &record).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::MissingField {
                index: 7,
                field: "timestamp"
            }
        ));
    }

    #[test]
    fn test_missing_duration() {
        let record = json!({"timestamp": "2018-12-26 18:11:08"});
        let err = DeliveryEvent::from_value(0, &record).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::MissingField {
                field: "duration",
                ..
            }
        ));
    }

    #[test]
    fn test_unparsable_timestamp() {
        let record = json!({"timestamp": "26/12/2018 18:11", "duration": 20});
        let err = DeliveryEvent::from_value(0, &record).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let record = json!({"timestamp": "2018-12-26 18:11:08", "duration": -3});
        let err = DeliveryEvent::from_value(0, &record).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidDuration { .. }));
    }

    #[test]
    fn test_non_object_record_rejected() {
        let record = json!(["2018-12-26 18:11:08", 20]);
        let err = DeliveryEvent::from_value(0, &record).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidRecord { .. }));
    }
}
