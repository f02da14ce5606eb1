//! # ferry-sync
//!
//! The sync decision engine and job runners.
//!
//! [`plan`] holds the pure classification and deletion-set rules;
//! [`sync_dataset`] runs a full directory pass (listing → inventory
//! snapshot → per-file decisions → deletion pass) and [`sync_api`] mirrors
//! a single JSON payload.

pub mod api;
pub mod dataset;
pub mod error;
pub mod plan;

pub use api::{sync_api, ApiOutcome};
pub use dataset::{sync_dataset, DatasetReport, DeleteOutcome, UploadOutcome};
pub use error::SyncError;
pub use plan::{classify, deletions, SyncAction};
