// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config, NotificationsConfig};
use iced_toasts::notifications::{Category, Lifetime, Notifier};
use std::fs;
use tempfile::tempdir;

#[test]
fn config_saved_to_override_dir_is_loaded_back() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut saved = Config::default();
    saved.notifications = NotificationsConfig {
        default_duration_ms: Some(1500),
        default_category: Some(Category::Success),
        max_visible: Some(4),
    };
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);
}

#[test]
fn hand_written_settings_with_unknown_category_load() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"dark\"\n\n[notifications]\ndefault_duration_ms = -1\ndefault_category = \"shout\"\n",
    )
    .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let defaults = loaded.notifications.notify_defaults();
    assert_eq!(defaults.category, Category::Info);
    assert_eq!(defaults.lifetime, Lifetime::Persistent);
}

#[tokio::test(start_paused = true)]
async fn notifier_built_from_config_uses_its_defaults() {
    let mut section = NotificationsConfig::default();
    section.default_duration_ms = Some(0);

    let mut notifier =
        Notifier::with_defaults(tokio::runtime::Handle::current(), section.notify_defaults());
    notifier.info("kept");

    assert_eq!(notifier.pending_expiries(), 0);
    assert_eq!(notifier.len(), 1);
}
