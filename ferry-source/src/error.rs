//! Error types for ferry-source.

use thiserror::Error;

/// All errors that can arise while fetching from a source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure: the request never completed (DNS, refused,
    /// reset, TLS). No retry is attempted.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    /// The server answered with a non-success status code.
    #[error("{url} returned HTTP {code}")]
    HttpStatus { url: String, code: u16 },

    /// The response body could not be read.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// A response header the sync pass depends on was absent.
    #[error("{url} response is missing the {header} header")]
    MissingHeader { url: String, header: &'static str },

    /// A `Last-Modified` value did not parse as an RFC-1123 date.
    #[error("unparseable Last-Modified value {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
