//! Error types for ferry-sync.

use thiserror::Error;

use ferry_source::FetchError;
use ferry_store::StoreError;

/// All errors that can abort a sync pass.
///
/// Per-file fetch failures and per-key delete failures never surface here;
/// they are caught inside the pass and recorded as outcomes. What does
/// abort: the top-level listing or API fetch, inventory reads, and uploads.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A fetch the pass cannot continue without.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// An inventory read or upload failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
