//! Page state plus global selection, driven by the presentation layer.
//!
//! The controller can be driven two ways:
//! - the async methods ([`SelectionController::load_page`],
//!   [`SelectionController::bulk_select`]) await a [`PageSource`] inline;
//! - the split-phase methods (`begin_*` / `finish_*`) let the TUI run the
//!   fetch in a background task and report the result later.
//!
//! Both paths share the same state transitions.

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use super::bulk::{collect_first_n, parse_bulk_count, validate_count, BulkSelectError, PageSource};
use super::store::SelectionStore;
use crate::api::error::Result as FetchResult;
use crate::api::types::{Artwork, ArtworkPage, RecordId};

/// An owned, read-only view of the controller for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSnapshot {
    /// 0-based index of the displayed page.
    pub page_index: u32,
    /// Number of pages implied by the reported total.
    pub page_count: u32,
    /// Records per page.
    pub page_size: u32,
    /// Records on the displayed page.
    pub records: Vec<Artwork>,
    /// Selected IDs among the displayed records, in page order.
    pub selected_on_page: Vec<RecordId>,
    /// Total records in the collection.
    pub total_records: u64,
    /// Size of the global selection.
    pub selected_total: usize,
    /// Whether a fetch is in flight.
    pub loading: bool,
}

/// Owns the displayed page and the global selection set.
#[derive(Debug)]
pub struct SelectionController {
    store: SelectionStore,
    page_size: u32,
    current_page: u32,
    records: Vec<Artwork>,
    total: u64,
    loading: bool,
    pending_page: Option<u32>,
    bulk_in_flight: bool,
}

impl SelectionController {
    /// Create a controller with an empty selection and no page loaded.
    pub fn new(page_size: u32) -> Self {
        Self {
            store: SelectionStore::new(),
            page_size,
            current_page: 0,
            records: Vec::new(),
            total: 0,
            loading: false,
            pending_page: None,
            bulk_in_flight: false,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 0-based index of the displayed page.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Records on the displayed page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Total records reported by the last successful fetch.
    pub fn total_records(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_bulk_in_flight(&self) -> bool {
        self.bulk_in_flight
    }

    /// The page index whose fetch is outstanding, if any.
    pub fn pending_page(&self) -> Option<u32> {
        self.pending_page
    }

    /// The global selection.
    pub fn selection(&self) -> &SelectionStore {
        &self.store
    }

    /// Check if a record is selected, whether or not it is displayed.
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.store.contains(id)
    }

    /// Number of pages implied by the reported total.
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(self.page_size as u64);
        pages.min(u32::MAX as u64) as u32
    }

    fn page_ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|a| a.id).collect()
    }

    /// Selected IDs among the displayed records, in page order.
    pub fn selected_on_page(&self) -> Vec<RecordId> {
        self.store.project(&self.page_ids())
    }

    /// Take an owned snapshot for rendering.
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            page_index: self.current_page,
            page_count: self.page_count(),
            page_size: self.page_size,
            records: self.records.clone(),
            selected_on_page: self.selected_on_page(),
            total_records: self.total,
            selected_total: self.store.len(),
            loading: self.loading,
        }
    }

    // ------------------------------------------------------------------
    // Page loading
    // ------------------------------------------------------------------

    /// Mark a page fetch as started.
    ///
    /// A later request supersedes an earlier one that has not finished.
    pub fn begin_page_load(&mut self, page_index: u32) {
        debug!(page_index, "Page load started");
        self.pending_page = Some(page_index);
        self.loading = true;
    }

    /// Apply the result of a page fetch.
    ///
    /// Returns `Ok(false)` when the result belongs to a superseded request and
    /// was discarded. On failure the previous page stays displayed. The
    /// selection set is never touched.
    pub fn finish_page_load(
        &mut self,
        page_index: u32,
        result: FetchResult<ArtworkPage>,
    ) -> FetchResult<bool> {
        if self.pending_page != Some(page_index) {
            debug!(page_index, pending = ?self.pending_page, "Discarding stale page result");
            return Ok(false);
        }

        self.pending_page = None;
        self.loading = self.bulk_in_flight;

        match result {
            Ok(page) => {
                debug!(page_index, records = page.len(), total = page.total, "Page loaded");
                self.records = page.records;
                self.total = page.total;
                self.current_page = page_index;
                Ok(true)
            }
            Err(e) => {
                warn!(page_index, error = %e, "Page fetch failed, keeping previous page");
                Err(e)
            }
        }
    }

    /// Fetch and display a page.
    #[instrument(skip(self, source))]
    pub async fn load_page<S: PageSource + ?Sized>(
        &mut self,
        source: &S,
        page_index: u32,
    ) -> FetchResult<()> {
        self.begin_page_load(page_index);
        let result = source.fetch_page(page_index, self.page_size).await;
        self.finish_page_load(page_index, result).map(|_| ())
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Apply the selection reported for the displayed page.
    ///
    /// Adds every ID in `newly_selected` and removes every displayed ID that
    /// is missing from it. Selections on other pages are untouched.
    pub fn toggle_selection(&mut self, newly_selected: &[RecordId]) {
        let page_ids = self.page_ids();
        self.store.toggle(&page_ids, newly_selected);
        debug!(
            on_page = newly_selected.len(),
            total = self.store.len(),
            "Selection changed"
        );
    }

    /// Flip one displayed record. Returns its new state.
    ///
    /// IDs that are not on the displayed page are ignored.
    pub fn toggle_record(&mut self, id: RecordId) -> bool {
        if !self.records.iter().any(|a| a.id == id) {
            return false;
        }

        let mut selected = self.selected_on_page();
        let now_selected = if let Some(pos) = selected.iter().position(|s| *s == id) {
            selected.remove(pos);
            false
        } else {
            selected.push(id);
            true
        };
        self.toggle_selection(&selected);
        now_selected
    }

    /// Select every displayed record, or clear them if all are selected.
    pub fn toggle_page(&mut self) {
        let page_ids = self.page_ids();
        if page_ids.is_empty() {
            return;
        }
        let all_selected = page_ids.iter().all(|id| self.store.contains(*id));
        if all_selected {
            self.toggle_selection(&[]);
        } else {
            self.toggle_selection(&page_ids);
        }
    }

    // ------------------------------------------------------------------
    // Bulk select
    // ------------------------------------------------------------------

    /// Validate a bulk-select request and mark it in flight.
    ///
    /// Returns the validated count. A request made while another one is
    /// running is rejected with `InProgress`.
    pub fn begin_bulk_select(&mut self, n: i64) -> Result<u64, BulkSelectError> {
        if self.bulk_in_flight {
            return Err(BulkSelectError::InProgress);
        }
        let n = validate_count(n, self.total)?;
        info!(count = n, "Bulk select started");
        self.bulk_in_flight = true;
        self.loading = true;
        Ok(n)
    }

    /// Parse the bulk-select input box and start the request.
    pub fn begin_bulk_select_input(&mut self, input: &str) -> Result<u64, BulkSelectError> {
        let n = parse_bulk_count(input)?;
        self.begin_bulk_select(n)
    }

    /// Apply the IDs collected by a bulk-select walk.
    ///
    /// On success every ID joins the selection and page 0 is marked pending;
    /// the caller is expected to fetch it. The displayed page and its index
    /// only change once that fetch lands, so a failed reload leaves the
    /// previous page on screen. On failure nothing changes.
    ///
    /// Returns the number of distinct records collected. A record repeated
    /// across pages (the collection shifting between fetches) counts once.
    pub fn finish_bulk_select(
        &mut self,
        result: FetchResult<Vec<RecordId>>,
    ) -> Result<usize, BulkSelectError> {
        self.bulk_in_flight = false;
        self.loading = self.pending_page.is_some();

        let ids = result.map_err(|e| {
            warn!(error = %e, "Bulk select failed, selection unchanged");
            BulkSelectError::Fetch(e)
        })?;

        let collected = ids.len();
        let distinct: HashSet<RecordId> = ids.into_iter().collect();
        let count = distinct.len();
        if count < collected {
            warn!(collected, count, "Bulk select collected repeated records");
        }
        let added = self.store.insert_all(distinct);
        info!(count, added, total = self.store.len(), "Bulk select applied");

        self.begin_page_load(0);
        Ok(count)
    }

    /// Select the first `n` records of the collection in page order.
    ///
    /// Returns the number of records selected, which is less than `n` only
    /// when paging yields fewer records than the reported total. Page 0 is
    /// reloaded afterwards; a failure there is logged, not returned.
    #[instrument(skip(self, source))]
    pub async fn bulk_select<S: PageSource + ?Sized>(
        &mut self,
        source: &S,
        n: i64,
    ) -> Result<usize, BulkSelectError> {
        let n = self.begin_bulk_select(n)?;
        let result = collect_first_n(source, n, self.page_size).await;
        let count = self.finish_bulk_select(result)?;

        let page = source.fetch_page(0, self.page_size).await;
        if let Err(e) = self.finish_page_load(0, page) {
            warn!(error = %e, "Reloading first page after bulk select failed");
        }
        Ok(count)
    }
}
