// SPDX-License-Identifier: MPL-2.0
//! Iced presentation layer for the notification queue.

pub mod design_tokens;
pub mod theming;
pub mod toast;
