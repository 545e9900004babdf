// SPDX-License-Identifier: MPL-2.0
//! Cross-page bulk selection: "select the first N records of the dataset".
//!
//! The loop is strictly sequential — each page is requested only after the
//! previous response resolved — so the accumulated identifiers are
//! deterministic in page-then-within-page order. That trades latency for
//! order-correctness; it is not a performance concern.

use crate::api::{ArtworkPage, ArtworkSource};
use crate::error::Result;

/// Collects the identifiers of the first `target` records, walking pages of
/// `page_size` starting at page 1.
///
/// Terminates when `target` identifiers were taken or when a page comes back
/// empty (dataset exhausted); either exit is a success and the caller
/// overwrites the global selection with the returned list. Any fetch error
/// aborts the loop, and the partial accumulation is discarded with it.
///
/// A `target` of zero yields an empty list without issuing a single request.
pub async fn select_across_pages<S>(source: &S, target: usize, page_size: u32) -> Result<Vec<i64>>
where
    S: ArtworkSource,
{
    let mut selected = Vec::with_capacity(target);
    let mut remaining = target;
    let mut page = 1u32;

    while remaining > 0 {
        let response: ArtworkPage = source.fetch_page(page, page_size).await?;
        if response.data.is_empty() {
            break;
        }

        let take = remaining.min(response.data.len());
        selected.extend(response.data[..take].iter().map(|artwork| artwork.id));
        remaining -= take;
        page += 1;
    }

    Ok(selected)
}
