// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: the widgets in
//! this module render [`crate::browser::State`] and emit
//! [`crate::browser::Message`] values, nothing else.
//!
//! - [`table`] - The paginated, selectable artwork table with its pager
//! - [`dialog`] - Modal dialog for the cross-page bulk selection
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod dialog;
pub mod notifications;
pub mod styles;
pub mod table;
