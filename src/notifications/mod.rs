// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Notifications are transient messages raised by the application. They stay
//! in an ordered queue until their lifetime elapses or they are dismissed.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `NotificationId`, `Category` and `Lifetime`
//! - [`store`] - `Store`, the ordered list of active notifications
//! - [`notifier`] - `Notifier`, the entry point that assigns IDs and schedules expiry
//!
//! # Usage
//!
//! ```no_run
//! use iced_toasts::notifications::{Category, Notifier};
//!
//! # async fn demo() {
//! let mut notifier = Notifier::current();
//! notifier.notify("Saved", Category::Success, 3000);
//! notifier.notify("Offline", Category::Warning, 0); // stays until dismissed
//!
//! // From the UI tick:
//! notifier.process_expired();
//! # }
//! ```

mod notification;
mod notifier;
mod store;

pub use notification::{Category, Lifetime, Notification, NotificationId};
pub use notifier::{Notifier, NotifyDefaults};
pub use store::Store;
