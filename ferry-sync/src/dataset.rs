//! The dataset job: mirror a remote directory listing into the store.

use std::collections::BTreeSet;

use serde::Serialize;

use ferry_core::{KeyPrefix, ObjectKey};
use ferry_source::FileSource;
use ferry_store::ObjectStore;

use crate::error::SyncError;
use crate::plan::{classify, deletions, SyncAction};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Outcome of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UploadOutcome {
    /// Key was absent; object uploaded.
    UploadedNew { key: ObjectKey },
    /// Source was strictly newer; object overwritten.
    UploadedUpdated { key: ObjectKey },
    /// Stored object is current; nothing written.
    Unchanged { key: ObjectKey },
    /// `--dry-run`: the object *would* have been uploaded.
    WouldUploadNew { key: ObjectKey },
    /// `--dry-run`: the object *would* have been overwritten.
    WouldUploadUpdated { key: ObjectKey },
    /// The per-file fetch failed; file skipped, pass continued.
    Skipped { name: String, reason: String },
}

/// Outcome of one deletion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted { key: ObjectKey },
    /// `--dry-run`: the object *would* have been deleted.
    WouldDelete { key: ObjectKey },
    /// Best-effort: the failure is recorded and the batch continues.
    Failed { key: ObjectKey, reason: String },
}

/// Everything one dataset pass did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetReport {
    pub uploads: Vec<UploadOutcome>,
    pub deletes: Vec<DeleteOutcome>,
}

impl DatasetReport {
    pub fn uploaded_count(&self) -> usize {
        self.uploads
            .iter()
            .filter(|outcome| {
                matches!(
                    outcome,
                    UploadOutcome::UploadedNew { .. }
                        | UploadOutcome::UploadedUpdated { .. }
                        | UploadOutcome::WouldUploadNew { .. }
                        | UploadOutcome::WouldUploadUpdated { .. }
                )
            })
            .count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.uploads
            .iter()
            .filter(|outcome| matches!(outcome, UploadOutcome::Unchanged { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.uploads
            .iter()
            .filter(|outcome| matches!(outcome, UploadOutcome::Skipped { .. }))
            .count()
    }
}

// ---------------------------------------------------------------------------
// sync_dataset
// ---------------------------------------------------------------------------

/// Run one dataset sync pass.
///
/// Sequence: enumerate the listing (abort on failure), snapshot the
/// inventory under `prefix` once, then fetch/classify/upload each file in
/// listing order, then delete inventory keys no longer present at the
/// source. Per-file fetch failures skip that file; upload failures abort;
/// delete failures are best-effort.
pub fn sync_dataset(
    source: &dyn FileSource,
    store: &dyn ObjectStore,
    prefix: &KeyPrefix,
    dry_run: bool,
) -> Result<DatasetReport, SyncError> {
    let names = source.list_names()?;

    // One snapshot for the whole pass; decisions and the deletion set both
    // read it, writes never update it.
    let inventory = store.list(Some(prefix))?.into_iter().collect();

    let mut uploads = Vec::with_capacity(names.len());
    let mut source_keys = BTreeSet::new();

    for name in &names {
        let key = prefix.join(name);
        // Derived from the listing, before the fetch: a fetch failure must
        // not expose the key to the deletion pass.
        source_keys.insert(key.clone());

        let file = match source.fetch(name) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(file = %name, error = %err, "fetch failed; skipping file");
                uploads.push(UploadOutcome::Skipped {
                    name: name.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match classify(&key, file.last_modified, &inventory) {
            SyncAction::UploadNew if dry_run => {
                tracing::info!(key = %key, "[dry-run] would upload new file");
                uploads.push(UploadOutcome::WouldUploadNew { key });
            }
            SyncAction::UploadUpdated if dry_run => {
                tracing::info!(key = %key, "[dry-run] would upload updated file");
                uploads.push(UploadOutcome::WouldUploadUpdated { key });
            }
            SyncAction::UploadNew => {
                store.put(&key, &file.content, &file.content_type)?;
                tracing::info!(key = %key, "uploaded new file");
                uploads.push(UploadOutcome::UploadedNew { key });
            }
            SyncAction::UploadUpdated => {
                store.put(&key, &file.content, &file.content_type)?;
                tracing::info!(key = %key, "uploaded updated file");
                uploads.push(UploadOutcome::UploadedUpdated { key });
            }
            SyncAction::Skip => {
                tracing::debug!(key = %key, "no new or updated file");
                uploads.push(UploadOutcome::Unchanged { key });
            }
        }
    }

    let mut deletes = Vec::new();
    for key in deletions(&inventory, &source_keys) {
        if dry_run {
            tracing::info!(key = %key, "[dry-run] would delete stored object");
            deletes.push(DeleteOutcome::WouldDelete { key });
            continue;
        }
        match store.delete(&key) {
            Ok(()) => {
                tracing::info!(key = %key, "deleted stored object no longer at source");
                deletes.push(DeleteOutcome::Deleted { key });
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "delete failed; continuing");
                deletes.push(DeleteOutcome::Failed {
                    key,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(DatasetReport { uploads, deletes })
}
