// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification queue with timed expiry.
//!
//! The [`notifications`] module holds the queue itself and has no UI
//! dependency. The [`ui`] and [`app`] modules render it with Iced.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod ui;
