//! File-backed event source.
//!
//! Yields typed [`DeliveryEvent`]s one at a time from a JSON input. Two
//! container formats are accepted, sniffed from the first non-whitespace
//! byte: a single JSON array of event objects, and line-delimited JSON
//! (one object per line, blank lines skipped). A malformed array document
//! fails at construction, before any aggregation runs; a malformed line or
//! an invalid record fails at the record that carries it.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::error::{MetricsError, Result};
use crate::event::DeliveryEvent;

/// Lazy, finite, forward-only sequence of delivery events.
#[derive(Debug)]
pub struct JsonEventSource<R> {
    records: RecordStream<R>,
    index: usize,
}

#[derive(Debug)]
enum RecordStream<R> {
    /// Raw records of an array document, decoded up front
    Array(std::vec::IntoIter<Value>),
    /// Line-delimited records, decoded lazily
    Lines(io::Lines<R>),
}

impl JsonEventSource<BufReader<File>> {
    /// Open an event source backed by a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> JsonEventSource<R> {
    /// Wrap a buffered reader, sniffing the container format.
    pub fn new(mut reader: R) -> Result<Self> {
        let records = match peek_byte(&mut reader)? {
            Some(b'[') => {
                let values: Vec<Value> = serde_json::from_reader(reader)?;
                RecordStream::Array(values.into_iter())
            }
            Some(_) => RecordStream::Lines(reader.lines()),
            None => RecordStream::Array(Vec::new().into_iter()),
        };
        Ok(Self { records, index: 0 })
    }
}

impl<R: BufRead> Iterator for JsonEventSource<R> {
    type Item = Result<DeliveryEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = match &mut self.records {
            RecordStream::Array(values) => values.next().map(Ok),
            RecordStream::Lines(lines) => loop {
                match lines.next() {
                    None => break None,
                    Some(Err(e)) => break Some(Err(MetricsError::Io(e))),
                    Some(Ok(line)) if line.trim().is_empty() => continue,
                    Some(Ok(line)) => {
                        break Some(
                            serde_json::from_str::<Value>(&line).map_err(MetricsError::from),
                        )
                    }
                }
            },
        }?;

        let index = self.index;
        self.index += 1;
        Some(value.and_then(|record| DeliveryEvent::from_value(index, &record)))
    }
}

/// First non-whitespace byte of the stream without consuming it, or `None`
/// for empty (or all-whitespace) input.
fn peek_byte<R: BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        if let Some(pos) = buf.iter().position(|b| !b.is_ascii_whitespace()) {
            return Ok(Some(buf[pos]));
        }
        let len = buf.len();
        reader.consume(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source(input: &str) -> JsonEventSource<Cursor<Vec<u8>>> {
        JsonEventSource::new(Cursor::new(input.as_bytes().to_vec())).unwrap()
    }

    #[test]
    fn test_sniffs_array_container() {
        let events: Vec<_> = source(r#"[{"timestamp": "2018-12-26 18:11:08", "duration": 20}]"#)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].duration, 20);
    }

    #[test]
    fn test_sniffs_line_delimited_container() {
        let input = "\n{\"timestamp\": \"2018-12-26 18:11:08\", \"duration\": 20}\n\n{\"timestamp\": \"2018-12-26 18:15:19\", \"duration\": 31}\n";
        let events: Vec<_> = source(input).collect::<Result<_>>().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].duration, 31);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(source("").next().is_none());
        assert!(source("  \n ").next().is_none());
    }

    #[test]
    fn test_malformed_array_fails_at_construction() {
        let result = JsonEventSource::new(Cursor::new(b"[{\"timestamp\":".to_vec()));
        assert!(matches!(result, Err(MetricsError::Decode(_))));
    }

    #[test]
    fn test_malformed_line_fails_at_that_record() {
        let input = "{\"timestamp\": \"2018-12-26 18:11:08\", \"duration\": 20}\nnot json\n";
        let mut events = source(input);
        assert!(events.next().unwrap().is_ok());
        assert!(matches!(events.next(), Some(Err(MetricsError::Decode(_)))));
    }
}
