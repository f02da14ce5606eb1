//! In-memory [`ObjectStore`] with a recorded call log.
//!
//! Tests seed it with remote state, run a sync pass against it, and assert
//! on both the resulting contents and the exact put/delete call sequence.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use ferry_core::{KeyPrefix, ObjectKey, RemoteObject};

use crate::error::StoreError;
use crate::store::ObjectStore;

/// One stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content: Vec<u8>,
    pub content_type: String,
    pub last_modified: DateTime<Utc>,
}

/// A mutating call made against the store, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Put {
        key: ObjectKey,
        content_type: String,
    },
    Delete {
        key: ObjectKey,
    },
}

/// In-memory store. `put` stamps objects with the current time, mirroring
/// how the real store assigns last-modified on upload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<ObjectKey, StoredObject>>,
    calls: Mutex<Vec<StoreCall>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object as pre-existing remote state (no call is recorded).
    pub fn seed(&self, key: ObjectKey, last_modified: DateTime<Utc>) {
        self.objects.lock().expect("store lock").insert(
            key,
            StoredObject {
                content: Vec::new(),
                content_type: "application/octet-stream".to_owned(),
                last_modified,
            },
        );
    }

    pub fn get(&self, key: &ObjectKey) -> Option<StoredObject> {
        self.objects.lock().expect("store lock").get(key).cloned()
    }

    pub fn keys(&self) -> Vec<ObjectKey> {
        self.objects
            .lock()
            .expect("store lock")
            .keys()
            .cloned()
            .collect()
    }

    /// Every mutating call so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().expect("call lock").clone()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().expect("store lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStore for MemoryStore {
    fn list(&self, prefix: Option<&KeyPrefix>) -> Result<Vec<RemoteObject>, StoreError> {
        let filter = prefix.map(KeyPrefix::filter).unwrap_or_default();
        Ok(self
            .objects
            .lock()
            .expect("store lock")
            .iter()
            .filter(|(key, _)| key.0.starts_with(&filter))
            .map(|(key, object)| RemoteObject {
                key: key.clone(),
                last_modified: object.last_modified,
            })
            .collect())
    }

    fn put(&self, key: &ObjectKey, content: &[u8], content_type: &str) -> Result<(), StoreError> {
        self.calls.lock().expect("call lock").push(StoreCall::Put {
            key: key.clone(),
            content_type: content_type.to_owned(),
        });
        self.objects.lock().expect("store lock").insert(
            key.clone(),
            StoredObject {
                content: content.to_vec(),
                content_type: content_type.to_owned(),
                last_modified: Utc::now(),
            },
        );
        Ok(())
    }

    fn delete(&self, key: &ObjectKey) -> Result<(), StoreError> {
        self.calls
            .lock()
            .expect("call lock")
            .push(StoreCall::Delete { key: key.clone() });
        // Absent keys are fine; store-level delete is idempotent.
        self.objects.lock().expect("store lock").remove(key);
        Ok(())
    }
}
