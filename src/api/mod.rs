// SPDX-License-Identifier: MPL-2.0
//! Read-only client for the Art Institute of Chicago artworks API.
//!
//! The [`ArtworkSource`] trait is the seam between the UI and the network:
//! the application drives it through [`ArtworkClient`], tests drive it through
//! in-memory fakes. One operation, one request shape — `GET
//! <base>?page=<n>&limit=<m>` — with no retries, timeouts, or backoff; a
//! failed request fails once and is reported.

mod types;

pub use types::{Artwork, ArtworkPage, Pagination, IIIF_BASE_URL};

use crate::error::{Error, Result};
use std::future::Future;

/// Default base URL of the artworks endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Anything that can serve one page of artwork records.
pub trait ArtworkSource {
    /// Fetches page `page` (1-based) with `limit` records per page.
    fn fetch_page(&self, page: u32, limit: u32) -> impl Future<Output = Result<ArtworkPage>> + Send;
}

/// HTTP-backed [`ArtworkSource`].
#[derive(Debug, Clone)]
pub struct ArtworkClient {
    client: reqwest::Client,
    base_url: String,
}

impl ArtworkClient {
    /// Creates a client against the given endpoint base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("ArticTable/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a client against the public API.
    pub fn default_endpoint() -> Result<Self> {
        Self::new(DEFAULT_API_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ArtworkSource for ArtworkClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
            .map_err(Error::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        // Schema validation happens here, not at first field access: a body
        // missing `data` or `pagination.total` comes back as `Malformed`.
        let body = response.json::<ArtworkPage>().await.map_err(Error::from)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_configured_base_url() {
        let client = ArtworkClient::new("http://localhost:9000/artworks").expect("client");
        assert_eq!(client.base_url(), "http://localhost:9000/artworks");
    }

    #[test]
    fn default_endpoint_targets_public_api() {
        let client = ArtworkClient::default_endpoint().expect("client");
        assert_eq!(client.base_url(), DEFAULT_API_BASE_URL);
    }
}
