// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording viewer activity.
//!
//! Events are stored in a memory-bounded circular buffer owned by the
//! viewer controller. Every recorded event is also forwarded to `tracing`
//! at debug level so that hosts with a subscriber see the same history.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`ViewerEvent`]: Enum representing the events worth keeping
//! - [`ViewerDiagnostics`]: Recorder combining both

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{DiagnosticEvent, ViewerEvent};

/// Bounded history of [`ViewerEvent`]s.
#[derive(Debug, Clone)]
pub struct ViewerDiagnostics {
    events: CircularBuffer<DiagnosticEvent>,
}

impl ViewerDiagnostics {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: CircularBuffer::with_capacity(capacity),
        }
    }

    /// Records an event.
    pub fn record(&mut self, event: ViewerEvent) {
        tracing::debug!(?event, "viewer event");
        self.events.push(DiagnosticEvent::new(event));
    }

    /// Iterates over recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &ViewerEvent> {
        self.events.iter().map(|recorded| &recorded.event)
    }

    /// Iterates over recorded events with their capture time.
    pub fn timeline(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ViewerEvent> {
        self.events.last().map(|recorded| &recorded.event)
    }

    /// Counts recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&ViewerEvent) -> bool) -> usize {
        self.events().filter(|event| predicate(event)).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for ViewerDiagnostics {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}
