//! Bulk selection of the first N records across pages.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::api::error::{ApiError, Result as FetchResult};
use crate::api::types::{ArtworkPage, RecordId};

/// A paginated source of artworks.
///
/// `page_index` is 0-based. Implementations return at most `page_size`
/// records together with the collection's reported total.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a single page.
    async fn fetch_page(&self, page_index: u32, page_size: u32) -> FetchResult<ArtworkPage>;
}

/// Errors from a bulk-select request.
#[derive(Debug, Error)]
pub enum BulkSelectError {
    /// The requested count is zero, negative or not a number.
    #[error("Please enter a valid positive number.")]
    InvalidCount,

    /// The requested count exceeds the number of records available.
    #[error("Only {available} rows are available.")]
    OutOfRange { available: u64 },

    /// Another bulk selection has not finished yet.
    #[error("A bulk selection is already in progress.")]
    InProgress,

    /// A page fetch failed while collecting records.
    #[error("Failed to fetch artworks: {0}")]
    Fetch(#[from] ApiError),
}

/// Parse the text typed into the bulk-select box.
///
/// The whole trimmed input must be an integer; anything else is
/// `InvalidCount`. Range checks happen in [`validate_count`].
pub fn parse_bulk_count(input: &str) -> Result<i64, BulkSelectError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| BulkSelectError::InvalidCount)
}

/// Check a requested count against the collection total.
pub fn validate_count(n: i64, total: u64) -> Result<u64, BulkSelectError> {
    if n <= 0 {
        return Err(BulkSelectError::InvalidCount);
    }
    let n = n as u64;
    if n > total {
        return Err(BulkSelectError::OutOfRange { available: total });
    }
    Ok(n)
}

/// Collect the IDs of the first `n` records in page order.
///
/// Pages are fetched strictly sequentially starting at page 0. The walk stops
/// once `n` IDs are collected or a page comes back shorter than `page_size`,
/// so the result may hold fewer than `n` IDs when the reported total
/// overstates what paging yields. Nothing is returned on a failed fetch.
#[instrument(skip(source))]
pub async fn collect_first_n<S: PageSource + ?Sized>(
    source: &S,
    n: u64,
    page_size: u32,
) -> FetchResult<Vec<RecordId>> {
    if page_size == 0 {
        return Err(ApiError::InvalidRequest(
            "page size must be positive".to_string(),
        ));
    }

    let mut collected: Vec<RecordId> = Vec::new();
    let mut page_index = 0u32;

    while (collected.len() as u64) < n {
        let page = source.fetch_page(page_index, page_size).await?;
        let remaining = (n - collected.len() as u64) as usize;

        collected.extend(page.records.iter().take(remaining).map(|a| a.id));
        debug!(
            page_index,
            fetched = page.len(),
            collected = collected.len(),
            "Bulk select page processed"
        );

        if page.is_short(page_size) {
            debug!(page_index, "Short page, collection exhausted");
            break;
        }
        page_index += 1;
    }

    info!(
        requested = n,
        collected = collected.len(),
        pages = page_index + 1,
        "Bulk select collection finished"
    );
    Ok(collected)
}
