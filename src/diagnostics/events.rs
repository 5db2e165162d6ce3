// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the notification lifecycle.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::notifications::{Category, Lifetime, NotificationId};

/// What happened to a notification.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NotificationEventKind {
    /// A notification was added to the queue.
    Emitted {
        id: NotificationId,
        category: Category,
        /// Requested lifetime, `0` for persistent notifications.
        lifetime_ms: u64,
    },
    /// The expiry timer removed the notification.
    Expired { id: NotificationId },
    /// The notification was dismissed before expiring.
    Dismissed { id: NotificationId },
    /// The whole queue was cleared.
    Cleared { count: usize },
}

/// A lifecycle event with its wall-clock timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: NotificationEventKind,
}

impl NotificationEvent {
    /// Creates a new event stamped with the current time.
    #[must_use]
    pub fn new(kind: NotificationEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    #[must_use]
    pub fn emitted(id: NotificationId, category: Category, lifetime: Lifetime) -> Self {
        Self::new(NotificationEventKind::Emitted {
            id,
            category,
            lifetime_ms: lifetime.as_millis(),
        })
    }

    #[must_use]
    pub fn expired(id: NotificationId) -> Self {
        Self::new(NotificationEventKind::Expired { id })
    }

    #[must_use]
    pub fn dismissed(id: NotificationId) -> Self {
        Self::new(NotificationEventKind::Dismissed { id })
    }

    #[must_use]
    pub fn cleared(count: usize) -> Self {
        Self::new(NotificationEventKind::Cleared { count })
    }
}
