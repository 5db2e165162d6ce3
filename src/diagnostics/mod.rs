// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording the notification lifecycle.
//!
//! Events are sent through a [`DiagnosticsHandle`], stored by the
//! [`DiagnosticsCollector`] in a memory-bounded [`CircularBuffer`] and can be
//! exported as a JSON report.

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{NotificationEvent, NotificationEventKind};
pub use export::export_to_file;
