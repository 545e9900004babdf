// SPDX-License-Identifier: MPL-2.0
//! Artwork browser state machine.
//!
//! Owns everything the table view renders: the pagination cursor, the current
//! page of records, the server-reported total, the loading flag, the
//! cross-page selection set, and the bulk-selection dialog. All transitions
//! are synchronous and pure; network side effects are requested through
//! [`Event`] values and their results fed back via the `apply_*`/`*_failed`
//! methods, so the whole machine is unit-testable without a renderer.

pub mod bulk;
pub mod selection;

use crate::api::{Artwork, ArtworkPage};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Fixed page size for the session.
pub const PAGE_SIZE: u32 = 12;

/// Two clicks on the same row within this window count as a double-click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Bulk-selection dialog states. Opens only on the explicit header trigger;
/// closes on cancel, backdrop dismissal, or a completed bulk selection.
/// A failed bulk selection keeps it open so the user can retry the same
/// target count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Open,
}

/// Messages emitted by the table and dialog widgets.
#[derive(Debug, Clone)]
pub enum Message {
    PreviousPage,
    NextPage,
    /// A row checkbox was toggled.
    RowToggled(i64, bool),
    /// The header select-all checkbox was toggled.
    PageToggled(bool),
    /// A row was clicked anywhere outside its checkbox.
    RowClicked(i64),
    ClearSelection,
    OpenDialog,
    /// Cancel button or backdrop click.
    DismissDialog,
    DialogInputChanged(String),
    SubmitDialog,
}

/// Side effects requested from the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Fetch the given 1-based page at [`PAGE_SIZE`].
    FetchPage(u32),
    /// Run the cross-page bulk selection for the given target count.
    BulkSelect(usize),
}

/// Complete browser state.
#[derive(Debug)]
pub struct State {
    /// Pagination cursor, 1-based.
    page: u32,
    page_size: u32,
    /// Records of the currently displayed page only.
    artworks: Vec<Artwork>,
    /// Server-reported total, authoritative as of the last fetch.
    total: u64,
    loading: bool,
    selection: BTreeSet<i64>,
    dialog: Dialog,
    dialog_input: String,
    /// Latest issued request sequence number. Responses carrying an older
    /// number are stale and dropped instead of clobbering newer data.
    request_seq: u64,
    last_click: Option<(i64, Instant)>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            artworks: Vec::new(),
            total: 0,
            loading: false,
            selection: BTreeSet::new(),
            dialog: Dialog::Closed,
            dialog_input: String::new(),
            request_seq: 0,
            last_click: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages implied by the last known total; at least 1.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selection(&self) -> &BTreeSet<i64> {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.contains(&id)
    }

    /// Whether every row on the visible page is selected (and the page is
    /// non-empty). Drives the header checkbox.
    pub fn page_fully_selected(&self) -> bool {
        !self.artworks.is_empty() && self.artworks.iter().all(|a| self.is_selected(a.id))
    }

    pub fn dialog(&self) -> Dialog {
        self.dialog
    }

    pub fn dialog_input(&self) -> &str {
        &self.dialog_input
    }

    /// Parses the dialog input as a target count, bounded below by 1 and
    /// above by the last known total.
    pub fn dialog_target(&self) -> Option<usize> {
        let parsed: u64 = self.dialog_input.trim().parse().ok()?;
        if parsed == 0 {
            return None;
        }
        Some(usize::try_from(parsed.min(self.total.max(1))).unwrap_or(usize::MAX))
    }

    // ---- fetch lifecycle -------------------------------------------------

    /// Moves the cursor to `page` and marks a fetch in flight. Returns the
    /// sequence number the eventual response must carry to be applied.
    pub fn begin_fetch(&mut self, page: u32) -> u64 {
        self.page = page.max(1);
        self.loading = true;
        self.request_seq += 1;
        self.request_seq
    }

    /// Applies a successful page response. A stale sequence number means a
    /// newer request superseded this one; the response is dropped and the
    /// loading flag (owned by the newer request) is left alone.
    pub fn apply_page(&mut self, seq: u64, response: ArtworkPage) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.artworks = response.data;
        self.total = response.pagination.total;
        self.loading = false;
        true
    }

    /// Records a failed page fetch. Rows, total, and selection stay exactly
    /// as they were; only the loading flag is released. Stale failures are
    /// dropped like stale successes.
    pub fn fetch_failed(&mut self, seq: u64) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        true
    }

    // ---- bulk selection lifecycle ----------------------------------------

    /// Marks the multi-page bulk selection as running.
    pub fn begin_bulk(&mut self) {
        self.loading = true;
    }

    /// Overwrites the selection with the accumulated ids (full replace, also
    /// on exhaustion-terminated runs) and closes the dialog.
    pub fn bulk_finished(&mut self, ids: Vec<i64>) {
        self.selection = ids.into_iter().collect();
        self.loading = false;
        self.dialog = Dialog::Closed;
    }

    /// Releases the loading flag after a failed bulk selection. The selection
    /// keeps its prior value and the dialog stays open for a retry.
    pub fn bulk_failed(&mut self) {
        self.loading = false;
    }

    // ---- selection -------------------------------------------------------

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn visible_ids(&self) -> Vec<i64> {
        self.artworks.iter().map(|a| a.id).collect()
    }

    fn merge_visible(&mut self, selected_on_page: Vec<i64>) {
        self.selection =
            selection::merge_page_selection(&self.selection, &selected_on_page, &self.visible_ids());
    }

    fn toggle_row(&mut self, id: i64, checked: bool) {
        let mut selected_on_page: Vec<i64> = self
            .visible_ids()
            .into_iter()
            .filter(|visible| self.selection.contains(visible))
            .collect();
        if checked {
            if !selected_on_page.contains(&id) {
                selected_on_page.push(id);
            }
        } else {
            selected_on_page.retain(|selected| *selected != id);
        }
        self.merge_visible(selected_on_page);
    }

    fn toggle_page(&mut self, checked: bool) {
        let selected_on_page = if checked { self.visible_ids() } else { Vec::new() };
        self.merge_visible(selected_on_page);
    }

    /// Registers a raw row click at `now`; returns `true` when it completes a
    /// double-click on the same row.
    fn register_click(&mut self, id: i64, now: Instant) -> bool {
        let is_double = matches!(
            self.last_click,
            Some((last_id, at)) if last_id == id && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
        );
        self.last_click = if is_double { None } else { Some((id, now)) };
        is_double
    }
}

/// Processes a widget message and returns the side effect the shell should
/// perform.
pub fn update(state: &mut State, message: Message) -> Event {
    update_at(state, message, Instant::now())
}

/// [`update`] with an explicit clock, for double-click tests.
pub fn update_at(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::PreviousPage => {
            if state.page > 1 {
                Event::FetchPage(state.page - 1)
            } else {
                Event::None
            }
        }
        Message::NextPage => {
            if state.page < state.total_pages() {
                Event::FetchPage(state.page + 1)
            } else {
                Event::None
            }
        }
        Message::RowToggled(id, checked) => {
            state.toggle_row(id, checked);
            Event::None
        }
        Message::PageToggled(checked) => {
            state.toggle_page(checked);
            Event::None
        }
        Message::RowClicked(id) => {
            if state.register_click(id, now) {
                state.selection = selection::select_single(id);
            }
            Event::None
        }
        Message::ClearSelection => {
            state.clear_selection();
            Event::None
        }
        Message::OpenDialog => {
            state.dialog = Dialog::Open;
            state.dialog_input.clear();
            Event::None
        }
        Message::DismissDialog => {
            state.dialog = Dialog::Closed;
            Event::None
        }
        Message::DialogInputChanged(input) => {
            // Keep only digits; the input is a plain text widget.
            state.dialog_input = input.chars().filter(char::is_ascii_digit).collect();
            Event::None
        }
        Message::SubmitDialog => {
            if state.loading {
                return Event::None;
            }
            match state.dialog_target() {
                Some(target) => Event::BulkSelect(target),
                None => Event::None,
            }
        }
    }
}
