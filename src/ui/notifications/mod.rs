// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Fetch failures (single-page and bulk-select) surface here as blocking
//! error toasts that require manual dismissal; nothing else in the
//! application reports errors to the user.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
