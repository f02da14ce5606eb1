//! The object store capability trait.

use ferry_core::{KeyPrefix, ObjectKey, RemoteObject};

use crate::error::StoreError;

/// The three operations a sync pass needs from the destination store.
///
/// `put` is an idempotent overwrite with no conditional-write check; a
/// concurrent external writer can race a pass (accepted, single-writer
/// assumption). `delete` of an absent key is not an error.
pub trait ObjectStore {
    /// Full listing of stored objects, optionally scoped to a prefix.
    ///
    /// O(object count) per call; callers take this snapshot once per pass.
    fn list(&self, prefix: Option<&KeyPrefix>) -> Result<Vec<RemoteObject>, StoreError>;

    fn put(&self, key: &ObjectKey, content: &[u8], content_type: &str) -> Result<(), StoreError>;

    fn delete(&self, key: &ObjectKey) -> Result<(), StoreError>;
}
