// SPDX-License-Identifier: MPL-2.0
//! End-to-end exercises of the browser state machine and the bulk-selection
//! loop, driven the way the application shell drives them: widget messages
//! in, events out, async fetch results fed back.

use artic_table::browser::{self, bulk, Dialog, Event, Message, State, PAGE_SIZE};
use artic_table::error::Error;
use artic_table::test_utils::{artwork, page_response, FakeSource};

/// Loads `page` into the state as the application shell would.
fn load_page(state: &mut State, page: u32, ids: Vec<i64>, total: u64) {
    let seq = state.begin_fetch(page);
    let applied = state.apply_page(
        seq,
        page_response(ids.into_iter().map(artwork).collect(), total),
    );
    assert!(applied, "a fresh response must be applied");
}

#[test]
fn page_change_requests_exactly_the_next_page() {
    let mut state = State::new();
    load_page(&mut state, 1, (1..=12).collect(), 36);

    let event = browser::update(&mut state, Message::NextPage);
    assert_eq!(event, Event::FetchPage(2));

    load_page(&mut state, 2, (13..=24).collect(), 36);
    let shown: Vec<i64> = state.artworks().iter().map(|a| a.id).collect();
    assert_eq!(shown, (13..=24).collect::<Vec<i64>>());
    assert_eq!(state.page(), 2);
}

#[test]
fn selection_merge_survives_page_round_trip() {
    let mut state = State::new();

    // Page 1: select rows 1 and 2.
    load_page(&mut state, 1, (1..=12).collect(), 60);
    browser::update(&mut state, Message::RowToggled(1, true));
    browser::update(&mut state, Message::RowToggled(2, true));

    // Page 2: select rows 14 and 15.
    load_page(&mut state, 2, (13..=24).collect(), 60);
    browser::update(&mut state, Message::RowToggled(14, true));
    browser::update(&mut state, Message::RowToggled(15, true));

    // Back on page 1: change the page-1 selection only.
    load_page(&mut state, 1, (1..=12).collect(), 60);
    browser::update(&mut state, Message::RowToggled(2, false));
    browser::update(&mut state, Message::RowToggled(3, true));

    // Page-2 ids are never lost by a page-1-only edit.
    let selected: Vec<i64> = state.selection().iter().copied().collect();
    assert_eq!(selected, vec![1, 3, 14, 15]);
}

#[test]
fn failed_fetch_changes_nothing_but_the_loading_flag() {
    let mut state = State::new();
    load_page(&mut state, 1, (1..=12).collect(), 36);
    browser::update(&mut state, Message::PageToggled(true));

    let event = browser::update(&mut state, Message::NextPage);
    assert_eq!(event, Event::FetchPage(2));
    let seq = state.begin_fetch(2);
    assert!(state.is_loading());

    assert!(state.fetch_failed(seq));

    assert!(!state.is_loading());
    assert_eq!(state.total(), 36);
    assert_eq!(state.selected_count(), 12);
    let shown: Vec<i64> = state.artworks().iter().map(|a| a.id).collect();
    assert_eq!(shown, (1..=12).collect::<Vec<i64>>());
}

#[test]
fn out_of_order_responses_leave_the_latest_request_in_charge() {
    let mut state = State::new();
    let slow = state.begin_fetch(1);
    let fast = state.begin_fetch(2);

    // The newer response lands first.
    assert!(state.apply_page(fast, page_response(vec![artwork(20)], 40)));
    // The older one resolves afterwards and is dropped.
    assert!(!state.apply_page(slow, page_response(vec![artwork(10)], 40)));

    assert_eq!(state.artworks()[0].id, 20);
    assert_eq!(state.page(), 2);
    assert!(!state.is_loading());
}

#[test]
fn clear_selection_is_idempotent() {
    let mut state = State::new();
    load_page(&mut state, 1, (1..=12).collect(), 36);
    browser::update(&mut state, Message::PageToggled(true));

    browser::update(&mut state, Message::ClearSelection);
    assert_eq!(state.selected_count(), 0);
    browser::update(&mut state, Message::ClearSelection);
    assert_eq!(state.selected_count(), 0);
}

#[tokio::test]
async fn bulk_selection_full_flow_selects_first_n_ids() {
    let mut state = State::new();
    load_page(&mut state, 1, (1..=12).collect(), 24);

    browser::update(&mut state, Message::OpenDialog);
    browser::update(&mut state, Message::DialogInputChanged("15".to_string()));
    let event = browser::update(&mut state, Message::SubmitDialog);
    assert_eq!(event, Event::BulkSelect(15));

    state.begin_bulk();
    let source = FakeSource::new(vec![
        Ok(page_response((1..=12).map(artwork).collect(), 24)),
        Ok(page_response((13..=24).map(artwork).collect(), 24)),
    ]);
    let ids = bulk::select_across_pages(&source, 15, PAGE_SIZE)
        .await
        .expect("bulk selection");
    state.bulk_finished(ids);

    // Every request used the fixed page size, pages were walked in order.
    assert_eq!(source.requests(), vec![(1, PAGE_SIZE), (2, PAGE_SIZE)]);

    let selected: Vec<i64> = state.selection().iter().copied().collect();
    assert_eq!(selected, (1..=15).collect::<Vec<i64>>());
    assert_eq!(state.dialog(), Dialog::Closed);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn bulk_selection_on_empty_dataset_is_not_an_error() {
    let mut state = State::new();
    load_page(&mut state, 1, vec![], 0);

    state.begin_bulk();
    let source = FakeSource::new(vec![Ok(page_response(vec![], 0))]);
    let ids = bulk::select_across_pages(&source, 10, PAGE_SIZE)
        .await
        .expect("exhaustion is success");
    state.bulk_finished(ids);

    assert_eq!(state.selected_count(), 0);
    assert_eq!(state.dialog(), Dialog::Closed);
}

#[tokio::test]
async fn bulk_selection_failure_keeps_prior_selection_and_open_dialog() {
    let mut state = State::new();
    load_page(&mut state, 1, (1..=12).collect(), 24);
    browser::update(&mut state, Message::RowToggled(3, true));
    browser::update(&mut state, Message::OpenDialog);

    state.begin_bulk();
    let source = FakeSource::new(vec![
        Ok(page_response((1..=12).map(artwork).collect(), 24)),
        Err(Error::Status(502)),
    ]);
    let result = bulk::select_across_pages(&source, 20, PAGE_SIZE).await;
    assert!(result.is_err());
    state.bulk_failed();

    // Partial accumulation discarded; dialog stays open for a retry.
    let selected: Vec<i64> = state.selection().iter().copied().collect();
    assert_eq!(selected, vec![3]);
    assert_eq!(state.dialog(), Dialog::Open);
    assert!(!state.is_loading());
}
