//! # ferry-store
//!
//! Destination-side object store access behind the [`ObjectStore`]
//! capability trait: [`S3Store`] for production, [`MemoryStore`] for tests
//! and call-sequence assertions.

pub mod error;
pub mod memory;
pub mod s3;
pub mod store;

pub use error::StoreError;
pub use memory::{MemoryStore, StoreCall, StoredObject};
pub use s3::S3Store;
pub use store::ObjectStore;
