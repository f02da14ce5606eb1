//! The API job: mirror one JSON response under a fixed key.

use serde::Serialize;

use ferry_core::ObjectKey;
use ferry_source::Fetcher;
use ferry_store::ObjectStore;

use crate::error::SyncError;

/// JSON payloads are stored with a fixed content type, whatever the API
/// response declared.
const API_CONTENT_TYPE: &str = "application/json";

/// Outcome of the API pass.
///
/// The response carries no `Last-Modified`, so there is no timestamp rule:
/// the payload is always uploaded and the outcome only records whether the
/// key already existed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApiOutcome {
    UploadedNew { key: ObjectKey },
    UploadedUpdated { key: ObjectKey },
    WouldUploadNew { key: ObjectKey },
    WouldUploadUpdated { key: ObjectKey },
}

/// Run one API sync pass: GET the endpoint, forward the body verbatim.
///
/// Any fetch or store failure aborts the pass.
pub fn sync_api(
    fetcher: &Fetcher,
    store: &dyn ObjectStore,
    url: &str,
    key: &ObjectKey,
    dry_run: bool,
) -> Result<ApiOutcome, SyncError> {
    let body = fetcher.get_bytes(url)?;
    tracing::info!(url, bytes = body.len(), "fetched API payload");
    apply_payload(store, key, &body, dry_run)
}

pub(crate) fn apply_payload(
    store: &dyn ObjectStore,
    key: &ObjectKey,
    body: &[u8],
    dry_run: bool,
) -> Result<ApiOutcome, SyncError> {
    // Whole-bucket scan: the fixed key is not namespaced under a prefix.
    let inventory: ferry_core::Inventory = store.list(None)?.into_iter().collect();
    let existed = inventory.contains(key);

    if dry_run {
        tracing::info!(key = %key, "[dry-run] would upload API payload");
        return Ok(if existed {
            ApiOutcome::WouldUploadUpdated { key: key.clone() }
        } else {
            ApiOutcome::WouldUploadNew { key: key.clone() }
        });
    }

    store.put(key, body, API_CONTENT_TYPE)?;
    tracing::info!(key = %key, "uploaded API payload");
    Ok(if existed {
        ApiOutcome::UploadedUpdated { key: key.clone() }
    } else {
        ApiOutcome::UploadedNew { key: key.clone() }
    })
}
