// SPDX-License-Identifier: MPL-2.0
//! Typed wire format of the Art Institute of Chicago artworks endpoint.
//!
//! Deserialization is strict about the envelope (`data` + `pagination.total`
//! must be present) and lenient about the record fields, all of which the API
//! serves as nullable. A response missing the envelope is rejected at the
//! boundary instead of blowing up at first field access.

use serde::Deserialize;

/// Base URL of the IIIF image service. Only used to *construct* display URLs;
/// the application never fetches from it.
pub const IIIF_BASE_URL: &str = "https://www.artic.edu/iiif/2";

/// One artwork record as served by the API.
///
/// Records live for the duration of the page that contains them and are
/// replaced wholesale on every page change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artwork {
    /// Unique identifier within the API's dataset.
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
    /// IIIF image reference token. May be absent; see [`Artwork::image_url`].
    #[serde(default)]
    pub image_id: Option<String>,
}

impl Artwork {
    /// Synthesizes the IIIF display URL for this record.
    ///
    /// A missing token yields a syntactically valid but non-resolving URL —
    /// degraded display, not an error.
    pub fn image_url(&self) -> String {
        let token = self.image_id.as_deref().unwrap_or("");
        format!("{}/{}/full/200,/0/default.jpg", IIIF_BASE_URL, token)
    }
}

/// Pagination envelope. The server-reported total is authoritative as of the
/// response that carried it and is never recomputed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub total: u64,
}

/// One page of artwork records plus its pagination envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArtworkPage {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

impl ArtworkPage {
    /// Identifiers of the records on this page, in response order.
    pub fn ids(&self) -> Vec<i64> {
        self.data.iter().map(|artwork| artwork.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": 129884,
            "title": "Starry Night and the Astronauts",
            "place_of_origin": "United States",
            "artist_display": "Alma Thomas",
            "inscriptions": null,
            "date_start": 1972,
            "date_end": 1972,
            "image_id": "e966799b-97ee-1cc6-bd2f-a94b4b8bb8f9"
        }"#;
        let artwork: Artwork = serde_json::from_str(json).expect("valid record");
        assert_eq!(artwork.id, 129884);
        assert_eq!(artwork.date_start, Some(1972));
        assert!(artwork.inscriptions.is_none());
    }

    #[test]
    fn deserializes_record_with_missing_fields() {
        let artwork: Artwork = serde_json::from_str(r#"{"id": 7}"#).expect("valid record");
        assert_eq!(artwork.id, 7);
        assert!(artwork.title.is_none());
        assert!(artwork.image_id.is_none());
    }

    #[test]
    fn rejects_record_without_id() {
        let result: Result<Artwork, _> = serde_json::from_str(r#"{"title": "Untitled"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_page_without_pagination() {
        let result: Result<ArtworkPage, _> = serde_json::from_str(r#"{"data": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn page_ids_preserve_response_order() {
        let page: ArtworkPage = serde_json::from_str(
            r#"{"data": [{"id": 3}, {"id": 1}, {"id": 2}], "pagination": {"total": 3}}"#,
        )
        .expect("valid page");
        assert_eq!(page.ids(), vec![3, 1, 2]);
    }

    #[test]
    fn image_url_includes_token() {
        let artwork: Artwork =
            serde_json::from_str(r#"{"id": 1, "image_id": "abc-123"}"#).expect("valid record");
        assert_eq!(
            artwork.image_url(),
            "https://www.artic.edu/iiif/2/abc-123/full/200,/0/default.jpg"
        );
    }

    #[test]
    fn image_url_degrades_without_token() {
        let artwork: Artwork = serde_json::from_str(r#"{"id": 1}"#).expect("valid record");
        assert_eq!(
            artwork.image_url(),
            "https://www.artic.edu/iiif/2//full/200,/0/default.jpg"
        );
    }
}
