// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::Category;
use crate::ui::toast;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raise a notification of the given category with the default lifetime.
    Raise(Category),
    /// Raise a notification that stays until dismissed.
    RaisePersistent(Category),
    /// Drop every notification.
    ClearAll,
    Toast(toast::Message),
    Tick(Instant), // Periodic tick applying fired expiries
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Runtime that drives notification expiry timers.
    pub runtime: tokio::runtime::Handle,
    /// Where to write the diagnostics report on exit, if anywhere.
    pub diagnostics_path: Option<PathBuf>,
}
