//! Serialization of aggregate records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::aggregation::AggregateRecord;
use crate::error::Result;

/// Write the records as a JSON array, followed by a newline.
pub fn write_records<W: Write>(
    mut writer: W,
    records: &[AggregateRecord],
    pretty: bool,
) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the records to the given path, or to standard output when no path
/// is given.
pub fn write_to_path(
    path: Option<&Path>,
    records: &[AggregateRecord],
    pretty: bool,
) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            write_records(BufWriter::new(file), records, pretty)
        }
        None => write_records(io::stdout().lock(), records, pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<AggregateRecord> {
        let base = NaiveDate::from_ymd_opt(2018, 12, 26)
            .unwrap()
            .and_hms_opt(18, 11, 0)
            .unwrap();
        vec![
            AggregateRecord {
                minute: base,
                average_delivery_time: 0.0,
            },
            AggregateRecord {
                minute: base + chrono::Duration::minutes(1),
                average_delivery_time: 20.0,
            },
        ]
    }

    #[test]
    fn test_compact_output_round_trips() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &sample(), false).unwrap();

        assert!(buffer.ends_with(b"\n"));
        let parsed: Vec<AggregateRecord> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_pretty_output_round_trips() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &sample(), true).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\n  {"));
        let parsed: Vec<AggregateRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_empty_record_list_is_an_empty_array() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &[], false).unwrap();
        assert_eq!(buffer, b"[]\n");
    }
}
