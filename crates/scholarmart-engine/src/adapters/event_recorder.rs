//! # Event Sinks
//!
//! Two [`EventSink`] adapters: one that records events for assertions and one
//! that forwards them to the `tracing` subscriber. Delivery is best-effort in
//! both; neither can fail an operation.

use crate::events::MarketplaceEvent;
use crate::ports::outbound::EventSink;
use std::sync::Mutex;
use tracing::info;

// =============================================================================
// RECORDING SINK
// =============================================================================

/// Collects emitted events in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<MarketplaceEvent>>,
}

impl RecordingEventSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    #[must_use]
    pub fn events(&self) -> Vec<MarketplaceEvent> {
        self.events.lock().unwrap().clone()
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<MarketplaceEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    /// Number of events emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// True if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: MarketplaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

// =============================================================================
// TRACING SINK
// =============================================================================

/// Forwards events to the active `tracing` subscriber as info records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: MarketplaceEvent) {
        info!(event = event.name(), payload = ?event, "marketplace event");
    }
}

// =============================================================================
// TESTS
// =============================================================================
