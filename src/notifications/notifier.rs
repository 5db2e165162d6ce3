// SPDX-License-Identifier: MPL-2.0
//! Notification emitter and expiry scheduling.
//!
//! The `Notifier` owns the [`Store`] and is the only thing that mutates it.
//! Each expiring notification gets a tokio task that sleeps for the
//! requested duration and then posts the notification ID back on a channel.
//! The owner drains that channel from its own loop ([`Notifier::process_expired`]
//! on a UI tick, or [`Notifier::expire_next`] from async code), so every
//! store mutation happens on the owner's thread and no locking is needed.
//!
//! Reads never depend on that draining: a notification whose deadline has
//! passed is treated as gone by every accessor, and the next mutation drops
//! it from the store.

use super::notification::{Category, Lifetime, Notification, NotificationId};
use super::store::Store;
use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::diagnostics::{DiagnosticsHandle, NotificationEvent};
use std::collections::HashMap;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Category and lifetime used by the convenience emitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyDefaults {
    pub category: Category,
    pub lifetime: Lifetime,
}

impl Default for NotifyDefaults {
    fn default() -> Self {
        Self {
            category: Category::Info,
            lifetime: Lifetime::from_millis(DEFAULT_NOTIFICATION_DURATION_MS),
        }
    }
}

/// Public entry point for raising notifications.
#[derive(Debug)]
pub struct Notifier {
    store: Store,
    runtime: Handle,
    /// Expiry tasks that have not fired yet, keyed by notification.
    pending: HashMap<NotificationId, JoinHandle<()>>,
    expired_tx: UnboundedSender<NotificationId>,
    expired_rx: UnboundedReceiver<NotificationId>,
    defaults: NotifyDefaults,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Notifier {
    /// Creates a notifier whose expiry timers run on `runtime`.
    #[must_use]
    pub fn new(runtime: Handle) -> Self {
        Self::with_defaults(runtime, NotifyDefaults::default())
    }

    /// Creates a notifier with custom defaults for the convenience emitters.
    #[must_use]
    pub fn with_defaults(runtime: Handle, defaults: NotifyDefaults) -> Self {
        let (expired_tx, expired_rx) = mpsc::unbounded_channel();
        Self {
            store: Store::new(),
            runtime,
            pending: HashMap::new(),
            expired_tx,
            expired_rx,
            defaults,
            diagnostics: None,
        }
    }

    /// Creates a notifier on the tokio runtime of the calling context.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    #[must_use]
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    /// Sets the diagnostics handle used to record lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns the defaults used by the convenience emitters.
    #[must_use]
    pub fn defaults(&self) -> NotifyDefaults {
        self.defaults
    }

    /// Raises a notification.
    ///
    /// A positive `duration_ms` schedules automatic removal after that many
    /// milliseconds. Zero or negative keeps the notification until it is
    /// dismissed.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        category: Category,
        duration_ms: i64,
    ) -> NotificationId {
        self.push(message, category, Lifetime::from_millis(duration_ms))
    }

    /// Raises a notification with an explicit [`Lifetime`].
    pub fn push(
        &mut self,
        message: impl Into<String>,
        category: Category,
        lifetime: Lifetime,
    ) -> NotificationId {
        self.expire_lapsed();
        let id = self.fresh_id();
        self.store
            .add(Notification::with_id(id, category, message, lifetime));

        if let Some(delay) = lifetime.duration() {
            let expired_tx = self.expired_tx.clone();
            let task = self.runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                // Receiver is gone only once the notifier itself is dropped.
                let _ = expired_tx.send(id);
            });
            self.pending.insert(id, task);
        }

        self.log(NotificationEvent::emitted(id, category, lifetime));
        id
    }

    /// Raises a notification with the default category and lifetime.
    pub fn notify_default(&mut self, message: impl Into<String>) -> NotificationId {
        let NotifyDefaults { category, lifetime } = self.defaults;
        self.push(message, category, lifetime)
    }

    /// Raises a notification that never expires on its own.
    pub fn notify_persistent(
        &mut self,
        message: impl Into<String>,
        category: Category,
    ) -> NotificationId {
        self.push(message, category, Lifetime::Persistent)
    }

    /// Raises an info notification with the default lifetime.
    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(message, Category::Info, self.defaults.lifetime)
    }

    /// Raises a success notification with the default lifetime.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(message, Category::Success, self.defaults.lifetime)
    }

    /// Raises a warning notification with the default lifetime.
    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(message, Category::Warning, self.defaults.lifetime)
    }

    /// Raises an error notification with the default lifetime.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(message, Category::Error, self.defaults.lifetime)
    }

    /// Dismisses a notification and cancels its pending expiry.
    ///
    /// Returns `true` if the notification was still active. A notification
    /// past its deadline counts as expired, not dismissed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.expire_lapsed();
        if let Some(task) = self.pending.remove(&id) {
            task.abort();
        }

        let removed = self.store.remove(id).is_some();
        if removed {
            self.log(NotificationEvent::dismissed(id));
        }
        removed
    }

    /// Applies every expiry that has fired since the last call.
    ///
    /// Returns the IDs that were actually removed. Expiries for notifications
    /// that were already dismissed are ignored.
    pub fn process_expired(&mut self) -> Vec<NotificationId> {
        let mut expired = self.expire_lapsed();
        while let Ok(id) = self.expired_rx.try_recv() {
            if self.expire(id) {
                expired.push(id);
            }
        }
        expired
    }

    /// Waits for the next expiry and applies it.
    ///
    /// Returns `None` immediately when no expiry is pending.
    pub async fn expire_next(&mut self) -> Option<NotificationId> {
        loop {
            if let Ok(id) = self.expired_rx.try_recv() {
                if self.expire(id) {
                    return Some(id);
                }
                continue;
            }

            if self.pending.is_empty() {
                return None;
            }

            let id = self.expired_rx.recv().await?;
            if self.expire(id) {
                return Some(id);
            }
        }
    }

    /// Removes every notification and cancels all pending expiries.
    pub fn clear(&mut self) -> usize {
        self.expire_lapsed();
        self.cancel_pending();
        let count = self.store.clear();
        if count > 0 {
            self.log(NotificationEvent::cleared(count));
        }
        count
    }

    /// Tears the queue down: cancels every timer and empties the store.
    ///
    /// Called on application shutdown so no expiry fires afterwards.
    pub fn shutdown(&mut self) {
        self.clear();
        while self.expired_rx.try_recv().is_ok() {}
    }

    /// Returns the active notifications in display order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        let now = Instant::now();
        self.store.iter().filter(move |n| !n.is_lapsed_at(now))
    }

    /// Returns the active notification with the given ID.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.store
            .get(id)
            .filter(|n| !n.is_lapsed_at(Instant::now()))
    }

    /// Returns whether the notification is still active.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if no notification is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns whether there is anything to render or expire.
    ///
    /// Stays true while lapsed entries await [`Notifier::process_expired`].
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.store.is_empty() || !self.pending.is_empty()
    }

    /// Returns the number of expiry timers that have not been applied yet.
    #[must_use]
    pub fn pending_expiries(&self) -> usize {
        self.pending.len()
    }

    fn fresh_id(&self) -> NotificationId {
        loop {
            let id = NotificationId::new();
            if !self.store.contains(id) {
                return id;
            }
        }
    }

    /// Drops every stored notification whose deadline has passed.
    fn expire_lapsed(&mut self) -> Vec<NotificationId> {
        let now = Instant::now();
        let lapsed: Vec<_> = self
            .store
            .iter()
            .filter(|n| n.is_lapsed_at(now))
            .map(Notification::id)
            .collect();

        let mut expired = Vec::with_capacity(lapsed.len());
        for id in lapsed {
            if let Some(task) = self.pending.remove(&id) {
                task.abort();
            }
            if self.expire(id) {
                expired.push(id);
            }
        }
        expired
    }

    fn expire(&mut self, id: NotificationId) -> bool {
        self.pending.remove(&id);
        let removed = self.store.remove(id).is_some();
        if removed {
            self.log(NotificationEvent::expired(id));
        }
        removed
    }

    fn cancel_pending(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }

    fn log(&self, event: NotificationEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
