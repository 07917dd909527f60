//! Cross-page selection bookkeeping.
//!
//! The selection set is kept separately from whichever page is displayed, so
//! selections survive pagination. Bulk selection walks pages in order until
//! the requested number of records has been collected.

mod bulk;
mod controller;
mod store;

pub use bulk::{collect_first_n, parse_bulk_count, validate_count, BulkSelectError, PageSource};
pub use controller::{ControllerSnapshot, SelectionController};
pub use store::SelectionStore;

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory page source for tests.

    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::PageSource;
    use crate::api::error::{ApiError, Result};
    use crate::api::types::{Artwork, ArtworkPage};

    /// Serves records with IDs `0..count` and logs every request.
    pub struct FakeSource {
        count: u64,
        reported_total: u64,
        fail_on: Option<u32>,
        requests: Mutex<Vec<(u32, u32)>>,
    }

    impl FakeSource {
        pub fn new(count: u64) -> Self {
            Self {
                count,
                reported_total: count,
                fail_on: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_reported_total(mut self, total: u64) -> Self {
            self.reported_total = total;
            self
        }

        pub fn failing_on(mut self, page_index: u32) -> Self {
            self.fail_on = Some(page_index);
            self
        }

        pub fn requests(&self) -> Vec<(u32, u32)> {
            self.requests.lock().unwrap().clone()
        }

        pub fn clear_requests(&self) {
            self.requests.lock().unwrap().clear();
        }
    }

    #[async_trait]
    impl PageSource for FakeSource {
        async fn fetch_page(&self, page_index: u32, page_size: u32) -> Result<ArtworkPage> {
            self.requests.lock().unwrap().push((page_index, page_size));

            if self.fail_on == Some(page_index) {
                return Err(ApiError::ServerError("HTTP 503: unavailable".to_string()));
            }

            let start = page_index as u64 * page_size as u64;
            let end = (start + page_size as u64).min(self.count);
            let records = (start..end)
                .map(|id| Artwork::new(id, format!("Artwork {}", id)))
                .collect();
            Ok(ArtworkPage::new(records, self.reported_total))
        }
    }
}
