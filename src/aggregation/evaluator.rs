//! Single-pass per-minute driver for the sliding-window average.

use tracing::debug;

use crate::aggregation::minute::minute_ceil;
use crate::aggregation::sliding_window::WindowQueue;
use crate::aggregation::{AggregateRecord, WindowConfig};
use crate::error::{MetricsError, Result};
use crate::event::DeliveryEvent;

/// Compute the per-minute trailing average of event durations.
///
/// Consumes the event sequence exactly once, holding at most the events
/// inside the current window plus one event of lookahead. One record is
/// emitted per whole minute from the start of the range through the
/// minute-ceiling of the last event's timestamp; a minute with no
/// qualifying events yields an average of zero.
///
/// The range starts at the minute-floor of the first event's timestamp,
/// except when that timestamp is exactly minute-aligned: then a synthetic
/// leading record for the minute before it establishes a zero baseline.
///
/// Events must arrive in non-decreasing timestamp order; a violation is
/// reported as [`MetricsError::OutOfOrder`]. Any error yielded by the
/// source aborts the pass with no partial output. An empty sequence
/// produces an empty record list.
pub fn aggregate<I>(events: I, window: &WindowConfig) -> Result<Vec<AggregateRecord>>
where
    I: IntoIterator<Item = Result<DeliveryEvent>>,
{
    let mut source = events.into_iter();
    let first = match source.next() {
        Some(event) => event?,
        None => {
            debug!("event sequence is empty, nothing to aggregate");
            return Ok(Vec::new());
        }
    };

    // Covers both boundary rules: ceil - 1 is the minute-floor for an
    // unaligned first event and the synthetic baseline minute for an
    // aligned one.
    let mut cursor = minute_ceil(first.timestamp) - chrono::Duration::minutes(1);
    let mut last_timestamp = first.timestamp;
    let mut admitted: usize = 0;
    let mut pending = Some(first);
    let mut queue = WindowQueue::new();
    let mut records = Vec::new();

    loop {
        // Admit every not-yet-admitted event inside the window end.
        while let Some(event) = pending.take() {
            if event.timestamp > cursor {
                pending = Some(event);
                break;
            }
            if event.timestamp < last_timestamp {
                return Err(MetricsError::OutOfOrder {
                    index: admitted,
                    timestamp: event.timestamp,
                    previous: last_timestamp,
                });
            }
            last_timestamp = event.timestamp;
            admitted += 1;
            queue.push(event);
            pending = source.next().transpose()?;
        }

        queue.evict_through(cursor - window.duration());
        records.push(AggregateRecord {
            minute: cursor,
            average_delivery_time: queue.mean(),
        });

        if pending.is_none() && cursor >= minute_ceil(last_timestamp) {
            break;
        }
        cursor += chrono::Duration::minutes(1);
    }

    debug!(
        events = admitted,
        records = records.len(),
        window_minutes = window.minutes(),
        "aggregation pass complete"
    );
    Ok(records)
}
