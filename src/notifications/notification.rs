// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `NotificationId`,
//! the display `Category` and the requested `Lifetime`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;

/// Unique identifier for a notification.
///
/// Combines the wall-clock creation time (milliseconds since the Unix epoch)
/// with a process-wide sequence number, so two notifications created within
/// the same millisecond still get different identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NotificationId {
    created_ms: i64,
    sequence: u64,
}

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        static SEQUENCE: AtomicU64 = AtomicU64::new(0);
        Self {
            created_ms: chrono::Utc::now().timestamp_millis(),
            sequence: SEQUENCE.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Milliseconds since the Unix epoch at which the ID was generated.
    #[must_use]
    pub fn created_ms(self) -> i64 {
        self.created_ms
    }

    /// Process-wide sequence component.
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.sequence
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.created_ms, self.sequence)
    }
}

/// Display category of a notification.
///
/// The category only affects presentation (accent colour, label). The queue
/// itself never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Informational message.
    #[default]
    Info,
    /// Operation completed successfully.
    Success,
    /// Something failed.
    Error,
    /// Something needs attention but did not fail.
    Warning,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Info,
        Category::Success,
        Category::Error,
        Category::Warning,
    ];

    /// Parses a category name, falling back to [`Category::Info`] for
    /// anything unrecognised.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Category::Success,
            "error" => Category::Error,
            "warning" | "warn" => Category::Warning,
            _ => Category::Info,
        }
    }

    /// Lowercase name of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// How long a notification stays in the queue before it expires on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Removed automatically once the duration has elapsed.
    Expires(Duration),
    /// Stays until dismissed.
    Persistent,
}

impl Lifetime {
    /// Builds a lifetime from a signed millisecond count.
    ///
    /// Zero or negative values yield [`Lifetime::Persistent`].
    #[must_use]
    pub fn from_millis(duration_ms: i64) -> Self {
        match u64::try_from(duration_ms) {
            Ok(ms) if ms > 0 => Lifetime::Expires(Duration::from_millis(ms)),
            _ => Lifetime::Persistent,
        }
    }

    /// Returns the expiry delay, if any.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Lifetime::Expires(duration) => Some(duration),
            Lifetime::Persistent => None,
        }
    }

    /// Returns the lifetime in milliseconds, `0` for persistent.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.duration()
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// A notification to be displayed to the user.
///
/// Notifications are immutable once created.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    category: Category,
    message: String,
    lifetime: Lifetime,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with a fresh identifier.
    pub fn new(category: Category, message: impl Into<String>, lifetime: Lifetime) -> Self {
        Self::with_id(NotificationId::new(), category, message, lifetime)
    }

    /// Creates a notification with a caller-supplied identifier.
    pub fn with_id(
        id: NotificationId,
        category: Category,
        message: impl Into<String>,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            id,
            category,
            message: message.into(),
            lifetime,
            created_at: Instant::now(),
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the display category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the requested lifetime.
    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Instant at which the notification stops being active.
    ///
    /// `None` for persistent notifications.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.lifetime
            .duration()
            .and_then(|d| self.created_at.checked_add(d))
    }

    /// Returns whether the lifetime has run out at `now`.
    #[must_use]
    pub fn is_lapsed_at(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }

    /// Time left before expiry, `None` for persistent notifications.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.lifetime
            .duration()
            .map(|d| d.saturating_sub(self.created_at.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Category::Info, "test", Lifetime::Persistent);
        let n2 = Notification::new(Category::Info, "test", Lifetime::Persistent);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn ids_in_same_millisecond_differ_by_sequence() {
        let ids: Vec<_> = (0..64).map(|_| NotificationId::new()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(ids.windows(2).all(|w| w[0].sequence() < w[1].sequence()));
    }

    #[test]
    fn default_category_is_info() {
        assert_eq!(Category::default(), Category::Info);
    }

    #[test]
    fn unknown_category_normalises_to_info() {
        assert_eq!(Category::parse("fatal"), Category::Info);
        assert_eq!(Category::parse(""), Category::Info);
        assert_eq!(Category::from("  SUCCESS "), Category::Success);
        assert_eq!(Category::from("warn"), Category::Warning);
        assert_eq!(Category::from("error"), Category::Error);
    }

    #[test]
    fn category_display_matches_parse() {
        for category in Category::ALL {
            assert_eq!(Category::parse(&category.to_string()), category);
        }
    }

    #[test]
    fn lifetime_from_non_positive_millis_is_persistent() {
        assert_eq!(Lifetime::from_millis(0), Lifetime::Persistent);
        assert_eq!(Lifetime::from_millis(-250), Lifetime::Persistent);
        assert_eq!(
            Lifetime::from_millis(3000),
            Lifetime::Expires(Duration::from_millis(3000))
        );
    }

    #[test]
    fn persistent_lifetime_has_no_remaining_time() {
        let notification = Notification::new(Category::Error, "boom", Lifetime::Persistent);
        assert!(notification.remaining().is_none());
        assert_eq!(notification.lifetime().as_millis(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn lapses_exactly_at_deadline() {
        let notification =
            Notification::new(Category::Info, "brief", Lifetime::from_millis(3000));
        let created = notification.created_at();

        assert!(!notification.is_lapsed_at(created + Duration::from_millis(2999)));
        assert!(notification.is_lapsed_at(created + Duration::from_millis(3000)));
        assert_eq!(
            notification.deadline(),
            Some(created + Duration::from_millis(3000))
        );
    }

    #[test]
    fn persistent_notification_never_lapses() {
        let notification = Notification::new(Category::Info, "stay", Lifetime::Persistent);
        let far = notification.created_at() + Duration::from_secs(86_400);
        assert!(notification.deadline().is_none());
        assert!(!notification.is_lapsed_at(far));
    }

    #[test]
    fn remaining_never_exceeds_lifetime() {
        let notification =
            Notification::new(Category::Success, "saved", Lifetime::from_millis(500));
        let remaining = notification.remaining().unwrap();
        assert!(remaining <= Duration::from_millis(500));
    }
}
