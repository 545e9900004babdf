// SPDX-License-Identifier: MPL-2.0
//! Pure operations on the cross-page selection set.
//!
//! The selection holds artwork identifiers, never row objects, so it can span
//! pages that are not currently loaded. Every widget-level interaction
//! (per-row checkbox, header select-all, double-click isolate) reduces to one
//! of the functions below.

use std::collections::BTreeSet;

/// Merges the visible page's checkbox state into the global selection.
///
/// Result: `(selection − ids_on_page) ∪ selected_on_page`. Removing the whole
/// page before re-adding its checked rows is the only merge that cannot lose
/// selections made on pages that are not currently rendered.
pub fn merge_page_selection(
    selection: &BTreeSet<i64>,
    selected_on_page: &[i64],
    ids_on_page: &[i64],
) -> BTreeSet<i64> {
    let mut merged: BTreeSet<i64> = selection
        .iter()
        .copied()
        .filter(|id| !ids_on_page.contains(id))
        .collect();
    merged.extend(selected_on_page.iter().copied());
    merged
}

/// Replaces the whole selection with a single identifier (double-click
/// isolate). Overwrites, never merges.
pub fn select_single(id: i64) -> BTreeSet<i64> {
    BTreeSet::from([id])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[i64]) -> BTreeSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn merge_keeps_ids_from_other_pages() {
        // Ids 100..=102 belong to a page that is not rendered.
        let selection = set(&[100, 101, 102, 1]);
        let merged = merge_page_selection(&selection, &[2, 3], &[1, 2, 3, 4]);
        assert_eq!(merged, set(&[100, 101, 102, 2, 3]));
    }

    #[test]
    fn merge_drops_deselected_visible_ids() {
        let selection = set(&[1, 2]);
        let merged = merge_page_selection(&selection, &[], &[1, 2, 3]);
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_is_stable_across_page_revisits() {
        // Select on page 1, then page 2, then edit page 1 again: page-2 ids
        // must survive a page-1-only edit.
        let page1 = [1, 2, 3];
        let page2 = [4, 5, 6];

        let selection = merge_page_selection(&BTreeSet::new(), &[1, 2], &page1);
        let selection = merge_page_selection(&selection, &[5], &page2);
        let selection = merge_page_selection(&selection, &[3], &page1);

        assert_eq!(selection, set(&[3, 5]));
    }

    #[test]
    fn merge_with_empty_page_is_identity() {
        let selection = set(&[9, 10]);
        assert_eq!(merge_page_selection(&selection, &[], &[]), selection);
    }

    #[test]
    fn select_single_always_yields_one_id() {
        assert_eq!(select_single(42), set(&[42]));
    }
}
