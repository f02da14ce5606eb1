//! # ferry-source
//!
//! Source-side acquisition: blocking HTTP fetches, directory-listing
//! parsing, and `Last-Modified` handling.
//!
//! The [`FileSource`] trait is the seam between the sync engine and the
//! network; [`HttpDirectorySource`] is the production implementation.

pub mod error;
pub mod fetch;
pub mod httpdate;
pub mod listing;
pub mod source;

pub use error::FetchError;
pub use fetch::Fetcher;
pub use httpdate::parse_http_date;
pub use listing::{parse_listing, PARENT_DIRECTORY_LINK};
pub use source::{FileSource, HttpDirectorySource};
