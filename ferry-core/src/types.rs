//! Domain types for a sync pass.
//!
//! Keys are strongly typed; a raw `String` never crosses a crate boundary as
//! an object identity. All timestamps are `DateTime<Utc>`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed object key in the destination store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectKey(pub String);

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ObjectKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ObjectKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// The key prefix under which directory-sourced objects are stored.
///
/// Normalized on construction (no trailing `/`), so that
/// [`KeyPrefix::join`] is a pure, collision-free function of the source
/// file name: `<prefix>/<name>`, or `<name>` for the empty prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPrefix(String);

impl KeyPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut p: String = prefix.into();
        while p.ends_with('/') {
            p.pop();
        }
        Self(p)
    }

    /// Derive the object key for a source file name.
    pub fn join(&self, name: &str) -> ObjectKey {
        if self.0.is_empty() {
            ObjectKey(name.to_owned())
        } else {
            ObjectKey(format!("{}/{}", self.0, name))
        }
    }

    /// The listing filter string: `<prefix>/`, or empty for the empty prefix.
    pub fn filter(&self) -> String {
        if self.0.is_empty() {
            String::new()
        } else {
            format!("{}/", self.0)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for KeyPrefix {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// A file fetched from the source during one sync pass.
///
/// Ephemeral: lives only between its fetch and the upload decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub url: String,
    pub content: Vec<u8>,
    pub content_type: String,
    pub last_modified: DateTime<Utc>,
}

/// An object already present in the destination store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteObject {
    pub key: ObjectKey,
    pub last_modified: DateTime<Utc>,
}

/// The inventory snapshot: key → last-modified, read once per sync pass.
///
/// Not live-updated during the pass; a store object modified by another
/// actor between the listing and a write is compared against stale data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory(BTreeMap<ObjectKey, DateTime<Utc>>);

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: RemoteObject) {
        self.0.insert(object.key, object.last_modified);
    }

    pub fn last_modified(&self, key: &ObjectKey) -> Option<DateTime<Utc>> {
        self.0.get(key).copied()
    }

    pub fn contains(&self, key: &ObjectKey) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &ObjectKey> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RemoteObject> for Inventory {
    fn from_iter<I: IntoIterator<Item = RemoteObject>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for object in iter {
            inventory.insert(object);
        }
        inventory
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
