use std::collections::VecDeque;

use chrono::NaiveDateTime;

use crate::event::DeliveryEvent;

/// FIFO queue of the events currently inside the trailing window.
///
/// Events enter at the tail as the source yields them and leave from the
/// head as the window start advances, so an event is pushed and popped at
/// most once over a whole pass. A running duration sum keeps the mean O(1).
#[derive(Debug, Default)]
pub struct WindowQueue {
    /// Time-ordered events in the window, ties in arrival order
    entries: VecDeque<DeliveryEvent>,
    /// Sum of the durations of all queued events
    duration_sum: u128,
}

impl WindowQueue {
    /// Create an empty window queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event at the tail of the window.
    pub fn push(&mut self, event: DeliveryEvent) {
        self.duration_sum += u128::from(event.duration);
        self.entries.push_back(event);
    }

    /// Drop every event at the head whose timestamp is at or before `bound`.
    ///
    /// `bound` is the exclusive start of the window: an event exactly at the
    /// boundary leaves the window.
    pub fn evict_through(&mut self, bound: NaiveDateTime) {
        while let Some(front) = self.entries.front() {
            if front.timestamp > bound {
                break;
            }
            if let Some(evicted) = self.entries.pop_front() {
                self.duration_sum -= u128::from(evicted.duration);
            }
        }
    }

    /// Arithmetic mean of the queued durations, zero for an empty window.
    pub fn mean(&self) -> f64 {
        if self.entries.is_empty() {
            0.0
        } else {
            self.duration_sum as f64 / self.entries.len() as f64
        }
    }

    /// Number of events currently in the window.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the window holds no events.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
