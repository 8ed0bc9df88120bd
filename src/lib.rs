//! Streaming per-minute moving average of translation delivery times.
//!
//! Consumes a chronologically-ordered sequence of timestamped duration
//! events in a single forward pass and emits, for every whole minute
//! spanning the event range, the mean duration of the events inside a
//! trailing window of configurable width. Only the events currently inside
//! the window are held in memory.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use delivery_metrics::{aggregate, DeliveryEvent, WindowConfig};
//!
//! # fn example() -> delivery_metrics::Result<()> {
//! let delivered = NaiveDate::from_ymd_opt(2018, 12, 26)
//!     .unwrap()
//!     .and_hms_opt(18, 11, 8)
//!     .unwrap();
//! let events = vec![DeliveryEvent::new(delivered, 20)];
//!
//! let window = WindowConfig::new(10)?;
//! let records = aggregate(events.into_iter().map(Ok), &window)?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].average_delivery_time, 0.0);
//! assert_eq!(records[1].average_delivery_time, 20.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Reading events from a file
//!
//! ```no_run
//! use delivery_metrics::{aggregate, JsonEventSource, WindowConfig};
//!
//! # fn example() -> delivery_metrics::Result<()> {
//! let source = JsonEventSource::open("events.json")?;
//! let records = aggregate(source, &WindowConfig::new(10)?)?;
//! serde_json::to_writer(std::io::stdout(), &records).ok();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use aggregation::{aggregate, AggregateRecord, WindowConfig};
pub use error::{MetricsError, Result};
pub use event::DeliveryEvent;
pub use source::JsonEventSource;

/// Sliding-window aggregation
pub mod aggregation;

/// Error types
pub mod error;

/// Typed delivery events
pub mod event;

/// Record output layer
pub mod output;

/// File-backed event source
pub mod source;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber with default settings
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}
