// SPDX-License-Identifier: MPL-2.0
//! `artic_table` is a paginated, selectable table of Art Institute of Chicago
//! artwork records, built with the Iced GUI framework.
//!
//! It renders one page of records at a time from the public artworks API and
//! maintains a selection set that spans pages, including a "select the first
//! N records" bulk operation that walks pages sequentially.

pub mod api;
pub mod app;
pub mod browser;
pub mod error;
pub mod test_utils;
pub mod ui;
