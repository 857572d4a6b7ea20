//! Per-entity list controllers.
//!
//! A controller mediates between [`QueryState`](crate::query::QueryState),
//! the backend gateway, and local mutation operations. It owns the currently
//! displayed page and a loading/error status; the view layer re-reads that
//! state after each call.
//!
//! All state mutation happens on the UI thread in response to discrete
//! events, so the controllers use interior-mutability cells and take `&self`
//! everywhere. Their futures are not `Send`; drive them on a current-thread
//! executor. Call `refresh(0)` once when the owning view activates.

use std::cell::{Cell, RefCell};

use crate::backend::PageResult;
use crate::backend::errors::{BackendError, BackendResult};
use crate::pagination::{self, PageToken};
use crate::query::{CollectionQuery, QueryState};

pub mod orders;
pub mod students;

pub use orders::OrderController;
pub use students::StudentController;

/// Fetch lifecycle of one controller: `Idle → Loading → (Idle | Error)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

/// Shared state cell of a list controller: the query, the held page, the
/// fetch status and the stale-response guard.
///
/// Only the newest issued fetch may apply its result. `begin_fetch` hands out
/// a monotonically increasing sequence token; `finish_fetch` discards any
/// outcome whose token has been superseded, so a slow stale response can
/// never overwrite a newer page.
#[derive(Debug)]
pub struct CollectionState<T> {
    query: RefCell<QueryState>,
    page: RefCell<PageResult<T>>,
    status: Cell<FetchStatus>,
    error_message: RefCell<Option<String>>,
    fetch_seq: Cell<u64>,
}

impl<T: Clone> CollectionState<T> {
    pub fn new(query: QueryState) -> Self {
        Self {
            query: RefCell::new(query),
            page: RefCell::new(PageResult::default()),
            status: Cell::new(FetchStatus::Idle),
            error_message: RefCell::new(None),
            fetch_seq: Cell::new(0),
        }
    }

    // Fetch lifecycle ----------------------------------------------------

    /// Claims the next fetch slot: marks the controller Loading, clears any
    /// stale error, merges `page` into the query and renders the descriptor.
    pub(crate) fn begin_fetch(&self, page: usize) -> (u64, CollectionQuery) {
        let seq = self.fetch_seq.get().wrapping_add(1);
        self.fetch_seq.set(seq);
        self.status.set(FetchStatus::Loading);
        self.error_message.replace(None);

        let mut query = self.query.borrow_mut();
        query.set_page(page);
        (seq, query.to_query())
    }

    /// Applies a fetch outcome unless a newer fetch superseded it. The held
    /// page is replaced wholesale on success and left untouched on failure
    /// (the last good page stays visible). Returns whether the outcome was
    /// applied.
    pub(crate) fn finish_fetch(
        &self,
        seq: u64,
        result: BackendResult<PageResult<T>>,
        fallback: &str,
    ) -> bool {
        if self.fetch_seq.get() != seq {
            // Stale response; the newer request owns the status cell.
            return false;
        }
        match result {
            Ok(page) => {
                self.page.replace(page);
                self.status.set(FetchStatus::Idle);
            }
            Err(err) => {
                log::error!("{fallback}: {err}");
                self.error_message.replace(Some(err.user_message(fallback)));
                self.status.set(FetchStatus::Error);
            }
        }
        true
    }

    // Mutation support ---------------------------------------------------

    /// Errors are not sticky: every operation clears the previous message
    /// before attempting its own work.
    pub(crate) fn clear_error(&self) {
        self.error_message.replace(None);
        if self.status.get() == FetchStatus::Error {
            self.status.set(FetchStatus::Idle);
        }
    }

    pub(crate) fn record_failure(&self, err: &BackendError, fallback: &str) {
        log::error!("{fallback}: {err}");
        self.error_message.replace(Some(err.user_message(fallback)));
    }

    /// Swaps the first item matching `matches` for `item`, in place. Used by
    /// edit operations, which do not change counts or page position.
    pub(crate) fn replace_item_by(&self, matches: impl Fn(&T) -> bool, item: T) {
        let mut page = self.page.borrow_mut();
        if let Some(slot) = page.items.iter_mut().find(|existing| matches(existing)) {
            *slot = item;
        }
    }

    pub(crate) fn with_query(&self, mutate: impl FnOnce(&mut QueryState)) {
        mutate(&mut self.query.borrow_mut());
    }

    // View-facing accessors ----------------------------------------------

    pub fn items(&self) -> Vec<T> {
        self.page.borrow().items.clone()
    }

    /// Zero-indexed page the server last reported.
    pub fn page_index(&self) -> usize {
        self.page.borrow().page
    }

    pub fn total_pages(&self) -> usize {
        self.page.borrow().total_pages
    }

    pub fn total_count(&self) -> usize {
        self.page.borrow().total_count
    }

    pub fn page_size(&self) -> usize {
        self.page.borrow().page_size
    }

    pub fn status(&self) -> FetchStatus {
        self.status.get()
    }

    pub fn is_loading(&self) -> bool {
        self.status.get() == FetchStatus::Loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.error_message.borrow().clone()
    }

    /// Page controls for the held page, bounded with gap markers.
    pub fn window(&self) -> Vec<PageToken> {
        let page = self.page.borrow();
        pagination::page_window(page.page, page.total_pages)
    }

    /// 1-indexed visible item bounds for "Showing X–Y of Z" labels.
    pub fn item_range(&self) -> (usize, usize) {
        let page = self.page.borrow();
        pagination::item_range(page.page, page.page_size, page.total_count)
    }
}
