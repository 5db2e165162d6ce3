// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the notification queue to an Iced window.
//!
//! The `App` owns the [`Notifier`] for the lifetime of the window: it is
//! created at boot from the loaded configuration and shut down when the
//! window is closed, so no expiry timer outlives the UI.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::{self, BufferCapacity, DiagnosticsCollector};
use crate::error::Result;
use crate::notifications::{Category, Notifier};
use crate::ui::theming::ThemeMode;
use crate::ui::toast;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    notifier: Notifier,
    diagnostics: DiagnosticsCollector,
    diagnostics_path: Option<PathBuf>,
    theme_mode: ThemeMode,
    max_visible: usize,
    /// Number of notifications raised from the control panel.
    raised: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.notifier.len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and sets up the notifier and diagnostics.
    ///
    /// A configuration problem is reported as a persistent warning toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::with_config(flags, &config, config_warning), Task::none())
    }

    fn with_config(flags: Flags, config: &config::Config, warning: Option<String>) -> Self {
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let mut notifier =
            Notifier::with_defaults(flags.runtime, config.notifications.notify_defaults());
        notifier.set_diagnostics(diagnostics.handle());

        if let Some(warning) = warning {
            notifier.notify_persistent(warning, Category::Warning);
        }

        Self {
            notifier,
            diagnostics,
            diagnostics_path: flags.diagnostics_path,
            theme_mode: config.general.theme_mode,
            max_visible: config.notifications.max_visible(),
            raised: 0,
        }
    }

    fn title(&self) -> String {
        match self.notifier.len() {
            0 => "Iced Toasts".to_string(),
            n => format!("({n}) Iced Toasts"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifier.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Raise(category) => {
                let text = self.next_message(category);
                let lifetime = self.notifier.defaults().lifetime;
                self.notifier.push(text, category, lifetime);
                Task::none()
            }
            Message::RaisePersistent(category) => {
                let text = self.next_message(category);
                self.notifier.notify_persistent(text, category);
                Task::none()
            }
            Message::ClearAll => {
                self.notifier.clear();
                Task::none()
            }
            Message::Toast(toast_message) => {
                toast::handle_message(&mut self.notifier, &toast_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifier.process_expired();
                self.diagnostics.process_pending();
                Task::none()
            }
            Message::WindowCloseRequested(_window_id) => {
                if let Err(err) = self.shutdown() {
                    eprintln!("Failed to export diagnostics: {err}");
                }
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            notifier: &self.notifier,
            max_visible: self.max_visible,
        })
    }

    fn next_message(&mut self, category: Category) -> String {
        self.raised += 1;
        format!("{} notification #{}", category, self.raised)
    }

    /// Cancels every pending expiry and writes the diagnostics report.
    fn shutdown(&mut self) -> Result<()> {
        self.notifier.shutdown();
        self.diagnostics.process_pending();
        match &self.diagnostics_path {
            Some(path) => diagnostics::export_to_file(&self.diagnostics, path),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NotificationEventKind;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn test_app(config: &config::Config, warning: Option<String>) -> App {
        let flags = Flags {
            runtime: tokio::runtime::Handle::current(),
            diagnostics_path: None,
        };
        App::with_config(flags, config, warning)
    }

    #[tokio::test(start_paused = true)]
    async fn config_warning_becomes_persistent_toast() {
        let app = test_app(&config::Config::default(), Some("bad config".into()));

        let first = app.notifier.iter().next().expect("warning toast");
        assert_eq!(first.category(), Category::Warning);
        assert_eq!(first.message(), "bad config");
        assert_eq!(app.notifier.pending_expiries(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn raise_uses_configured_lifetime_and_tick_expires() {
        let mut config = config::Config::default();
        config.notifications.default_duration_ms = Some(200);
        let mut app = test_app(&config, None);

        let _ = app.update(Message::Raise(Category::Success));
        assert_eq!(app.notifier.len(), 1);
        assert_eq!(app.title(), "(1) Iced Toasts");

        tokio::time::sleep(Duration::from_millis(250)).await;
        let _ = app.update(Message::Tick(Instant::now()));

        assert!(app.notifier.is_empty());
        assert_eq!(app.title(), "Iced Toasts");
    }

    #[tokio::test(start_paused = true)]
    async fn toast_dismiss_and_clear_all() {
        let mut app = test_app(&config::Config::default(), None);
        let _ = app.update(Message::RaisePersistent(Category::Error));
        let _ = app.update(Message::Raise(Category::Info));
        let _ = app.update(Message::Raise(Category::Warning));

        let first = app.notifier.iter().next().map(|n| n.id()).expect("toast");
        let _ = app.update(Message::Toast(toast::Message::Dismiss(first)));
        assert_eq!(app.notifier.len(), 2);

        let _ = app.update(Message::ClearAll);
        assert!(app.notifier.is_empty());
        assert_eq!(app.notifier.pending_expiries(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_exports_diagnostics() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("diagnostics.json");
        let mut app = test_app(&config::Config::default(), None);
        app.diagnostics_path = Some(path.clone());

        let _ = app.update(Message::Raise(Category::Info));
        app.shutdown().expect("export should succeed");

        assert!(app.notifier.is_empty());
        let kinds: Vec<_> = app.diagnostics.events().map(|e| e.kind.clone()).collect();
        assert!(matches!(kinds.last(), Some(NotificationEventKind::Cleared { count: 1 })));
        assert!(path.exists());
    }
}
