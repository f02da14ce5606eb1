//! Ferry core library — domain types, configuration, errors.
//!
//! Public API surface:
//! - [`types`] — keys, prefixes, source/remote file snapshots, inventory
//! - [`config`] — store settings and environment-sourced credentials
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{AwsCredentials, StoreConfig};
pub use error::ConfigError;
pub use types::{Inventory, KeyPrefix, ObjectKey, RemoteObject, SourceFile};
