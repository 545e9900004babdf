// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for unit and integration tests.
//!
//! Provides minimal artwork/page builders and a scripted in-memory
//! [`ArtworkSource`] so the state machine and the bulk-selection loop can be
//! exercised without a network.

use crate::api::{Artwork, ArtworkPage, ArtworkSource, Pagination};
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Builds a bare artwork record with the given identifier.
pub fn artwork(id: i64) -> Artwork {
    Artwork {
        id,
        title: Some(format!("Artwork #{id}")),
        place_of_origin: None,
        artist_display: None,
        inscriptions: None,
        date_start: None,
        date_end: None,
        image_id: None,
    }
}

/// Builds a page response around the given records.
pub fn page_response(data: Vec<Artwork>, total: u64) -> ArtworkPage {
    ArtworkPage {
        data,
        pagination: Pagination { total },
    }
}

/// Scripted [`ArtworkSource`]: serves pre-recorded responses in order and
/// records every `(page, limit)` request it sees.
#[derive(Debug, Default)]
pub struct FakeSource {
    responses: Mutex<VecDeque<Result<ArtworkPage>>>,
    requests: Mutex<Vec<(u32, u32)>>,
}

impl FakeSource {
    pub fn new(responses: Vec<Result<ArtworkPage>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The `(page, limit)` pairs requested so far, in order.
    pub fn requests(&self) -> Vec<(u32, u32)> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl ArtworkSource for FakeSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage> {
        self.requests.lock().expect("requests lock").push((page, limit));
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| Err(Error::Http("no scripted response".to_string())))
    }
}
