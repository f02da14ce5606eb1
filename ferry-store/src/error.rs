//! Error types for ferry-store.

use thiserror::Error;

/// All errors that can arise from object store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The credential pair was rejected by the client library.
    #[error("failed to build store credentials: {0}")]
    Credentials(#[from] s3::creds::error::CredentialsError),

    /// A store API call failed (connectivity, permissions, non-success
    /// response).
    #[error("store request failed: {0}")]
    Request(#[from] s3::error::S3Error),

    /// A listed object carried a last-modified value the store client did
    /// not return in RFC-3339 form.
    #[error("unparseable last-modified {value:?} for stored object {key}: {source}")]
    Timestamp {
        key: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
