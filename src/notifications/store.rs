// SPDX-License-Identifier: MPL-2.0
//! Ordered storage of the active notifications.
//!
//! Insertion order is display order. The store has no notion of time; expiry
//! is driven by the [`Notifier`](super::Notifier).

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Holds the currently active notifications, oldest first.
#[derive(Debug, Default)]
pub struct Store {
    entries: VecDeque<Notification>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification at the end of the sequence.
    pub fn add(&mut self, notification: Notification) {
        self.entries.push_back(notification);
    }

    /// Removes the notification with the given ID.
    ///
    /// Returns the removed notification, or `None` when it was already gone
    /// (for example an expiry that fires after a manual dismissal).
    pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.entries.iter().position(|n| n.id() == id)?;
        self.entries.remove(pos)
    }

    /// Returns the notification with the given ID.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    /// Returns whether a notification with this ID is active.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over the active notifications in display order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no notification is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every notification, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Category, Lifetime};

    fn info(message: &str) -> Notification {
        Notification::new(Category::Info, message, Lifetime::Persistent)
    }

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = Store::new();
        store.add(info("A"));
        store.add(info("B"));
        store.add(info("C"));

        let messages: Vec<_> = store.iter().map(Notification::message).collect();
        assert_eq!(messages, vec!["A", "B", "C"]);
    }

    #[test]
    fn remove_drops_only_the_matching_entry() {
        let mut store = Store::new();
        let first = info("A");
        let first_id = first.id();
        store.add(first);
        store.add(info("B"));

        let removed = store.remove(first_id).expect("entry should be present");
        assert_eq!(removed.message(), "A");

        let messages: Vec<_> = store.iter().map(Notification::message).collect();
        assert_eq!(messages, vec!["B"]);
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let mut store = Store::new();
        store.add(info("A"));
        let stranger = info("not stored").id();

        assert!(store.remove(stranger).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().map(Notification::message), Some("A"));
    }

    #[test]
    fn remove_twice_is_harmless() {
        let mut store = Store::new();
        let n = info("A");
        let id = n.id();
        store.add(n);

        assert!(store.remove(id).is_some());
        assert!(store.remove(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn get_and_contains_find_by_id() {
        let mut store = Store::new();
        let n = Notification::new(Category::Warning, "disk almost full", Lifetime::Persistent);
        let id = n.id();
        store.add(n);

        assert!(store.contains(id));
        assert_eq!(store.get(id).map(Notification::category), Some(Category::Warning));
    }

    #[test]
    fn clear_reports_count() {
        let mut store = Store::new();
        for i in 0..5 {
            store.add(info(&format!("test-{i}")));
        }

        assert_eq!(store.clear(), 5);
        assert!(store.is_empty());
    }
}
