// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::ArtworkPage;
use crate::browser;
use crate::error::Error;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// widget messages while keeping a single update entrypoint; the async
/// completions carry their fetch results back into the state machine.
#[derive(Debug, Clone)]
pub enum Message {
    /// A table or dialog interaction.
    Browser(browser::Message),
    /// A page fetch resolved. `seq` identifies the request that issued it so
    /// stale responses can be discarded.
    PageLoaded {
        seq: u64,
        result: Result<ArtworkPage, Error>,
    },
    /// The cross-page bulk selection loop finished.
    BulkSelectFinished(Result<Vec<i64>, Error>),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional artworks endpoint override (e.g. a local mock server).
    pub api_base: Option<String>,
}
