//! Async task management for non-blocking page fetches.
//!
//! Fetches run in background tokio tasks so the UI keeps rendering and
//! handling input. Results come back to the main loop over an unbounded
//! channel:
//! 1. The app records the request on the controller (`begin_*`)
//! 2. A task is spawned via `TaskSpawner`
//! 3. When the task completes it sends an `ApiMessage`
//! 4. The main loop drains the channel with `try_recv()` and hands each
//!    result to the controller (`finish_*`)

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{ArtworkPage, RecordId};
use crate::selection::{collect_first_n, PageSource};

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// A single page fetch finished.
    PageFetched {
        page_index: u32,
        result: Result<ArtworkPage, ApiError>,
    },

    /// A bulk-select walk finished.
    BulkCollected {
        requested: u64,
        result: Result<Vec<RecordId>, ApiError>,
    },
}

/// Spawns background tasks against a shared page source.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
    source: Arc<dyn PageSource>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender and source.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>, source: Arc<dyn PageSource>) -> Self {
        Self { tx, source }
    }

    /// Spawn a task to fetch one page.
    pub fn spawn_fetch_page(&self, page_index: u32, page_size: u32) {
        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        debug!(page_index, page_size, "Spawning page fetch");
        tokio::spawn(async move {
            let result = source.fetch_page(page_index, page_size).await;
            let _ = tx.send(ApiMessage::PageFetched { page_index, result });
        });
    }

    /// Spawn a task that collects the first `requested` record IDs.
    ///
    /// Pages inside the walk are fetched one after another.
    pub fn spawn_bulk_select(&self, requested: u64, page_size: u32) {
        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        debug!(requested, page_size, "Spawning bulk select");
        tokio::spawn(async move {
            let result = collect_first_n(source.as_ref(), requested, page_size).await;
            let _ = tx.send(ApiMessage::BulkCollected { requested, result });
        });
    }
}

/// Create a new task channel and spawner.
///
/// Returns a tuple of (receiver, spawner). The receiver should be polled
/// in the main event loop, and the spawner should be used to spawn tasks.
pub fn create_task_channel(
    source: Arc<dyn PageSource>,
) -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::testing::FakeSource;

    #[tokio::test]
    async fn test_spawn_fetch_page_reports_result() {
        let (mut rx, spawner) = create_task_channel(Arc::new(FakeSource::new(30)));
        spawner.spawn_fetch_page(1, 12);

        match rx.recv().await {
            Some(ApiMessage::PageFetched { page_index, result }) => {
                assert_eq!(page_index, 1);
                let page = result.unwrap();
                assert_eq!(page.records[0].id, 12);
            }
            other => panic!("Expected PageFetched, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_bulk_select_reports_ids() {
        let (mut rx, spawner) = create_task_channel(Arc::new(FakeSource::new(30)));
        spawner.spawn_bulk_select(15, 12);

        match rx.recv().await {
            Some(ApiMessage::BulkCollected { requested, result }) => {
                assert_eq!(requested, 15);
                assert_eq!(result.unwrap(), (0..15).collect::<Vec<_>>());
            }
            other => panic!("Expected BulkCollected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_fetch_page_reports_failure() {
        let (mut rx, spawner) = create_task_channel(Arc::new(FakeSource::new(30).failing_on(0)));
        spawner.spawn_fetch_page(0, 12);

        match rx.recv().await {
            Some(ApiMessage::PageFetched { result, .. }) => assert!(result.is_err()),
            other => panic!("Expected PageFetched, got {:?}", other),
        }
    }
}
