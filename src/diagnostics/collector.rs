// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing notification events.
//!
//! Producers hold a [`DiagnosticsHandle`] and send events through a bounded
//! channel. The collector drains the channel into a circular buffer when its
//! owner calls [`DiagnosticsCollector::process_pending`].

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, NotificationEvent};

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sending never blocks: events are dropped when the
/// channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<NotificationEvent>,
}

impl DiagnosticsHandle {
    /// Records an event without blocking.
    pub fn log(&self, event: NotificationEvent) {
        let _ = self.event_tx.try_send(event);
    }
}

/// Central collector for notification diagnostics.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<NotificationEvent>,
    event_rx: Receiver<NotificationEvent>,
    event_tx: Sender<NotificationEvent>,
    started_at: DateTime<Utc>,
}

/// JSON document written by [`DiagnosticsCollector::export_json`].
#[derive(Debug, Serialize)]
struct DiagnosticReport<'a> {
    generator: &'static str,
    version: &'static str,
    started_at: DateTime<Utc>,
    exported_at: DateTime<Utc>,
    event_count: usize,
    events: Vec<&'a NotificationEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &NotificationEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes every stored event as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<_> = self.buffer.iter().collect();
        let report = DiagnosticReport {
            generator: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            started_at: self.started_at,
            exported_at: Utc::now(),
            event_count: events.len(),
            events,
        };
        serde_json::to_string_pretty(&report)
    }
}
