// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Default lifetime and visible toast count
//! - **Timing**: UI tick interval used to apply expiries
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default lifetime of a notification, in milliseconds.
pub const DEFAULT_NOTIFICATION_DURATION_MS: i64 = 3000;

/// Default number of toasts shown at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;

/// Minimum number of toasts shown at once.
pub const MIN_MAX_VISIBLE_TOASTS: usize = 1;

/// Maximum number of toasts shown at once.
pub const MAX_MAX_VISIBLE_TOASTS: usize = 10;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Interval of the UI tick that applies fired expiries (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept by the diagnostics collector.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_NOTIFICATION_DURATION_MS > 0);

    assert!(MIN_MAX_VISIBLE_TOASTS > 0);
    assert!(MAX_MAX_VISIBLE_TOASTS >= MIN_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS >= MIN_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS <= MAX_MAX_VISIBLE_TOASTS);

    assert!(TICK_INTERVAL_MS > 0);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_duration_default_is_three_seconds() {
        assert_eq!(DEFAULT_NOTIFICATION_DURATION_MS, 3000);
    }

    #[test]
    fn tick_is_shorter_than_default_lifetime() {
        assert!(i64::try_from(TICK_INTERVAL_MS).unwrap() < DEFAULT_NOTIFICATION_DURATION_MS);
    }
}
