//! The seam between the sync engine and the network.

use ferry_core::SourceFile;

use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::listing::parse_listing;

/// A directory of source files that can be enumerated and fetched one at a
/// time.
///
/// The engine only sees this trait, so tests substitute a static fake.
pub trait FileSource {
    /// Enumerate file names in source order.
    fn list_names(&self) -> Result<Vec<String>, FetchError>;

    /// Fetch one file by name.
    fn fetch(&self, name: &str) -> Result<SourceFile, FetchError>;
}

/// An HTML directory listing served over HTTP.
pub struct HttpDirectorySource {
    fetcher: Fetcher,
    base_url: String,
}

impl HttpDirectorySource {
    /// `base_url` is the listing URL; file URLs are `<base_url><name>`.
    pub fn new(fetcher: Fetcher, base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { fetcher, base_url }
    }

    fn file_url(&self, name: &str) -> String {
        format!("{}{}", self.base_url, name)
    }
}

impl FileSource for HttpDirectorySource {
    fn list_names(&self) -> Result<Vec<String>, FetchError> {
        let html = self.fetcher.get_text(&self.base_url)?;
        let names = parse_listing(&html);
        tracing::info!(count = names.len(), url = %self.base_url, "parsed directory listing");
        Ok(names)
    }

    fn fetch(&self, name: &str) -> Result<SourceFile, FetchError> {
        self.fetcher.get_file(&self.file_url(name), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_joins_base_and_name() {
        let source = HttpDirectorySource::new(Fetcher::new(), "https://example.com/pub/pr/");
        assert_eq!(
            source.file_url("pr.class"),
            "https://example.com/pub/pr/pr.class"
        );
    }

    #[test]
    fn base_url_without_trailing_slash_is_normalized() {
        let source = HttpDirectorySource::new(Fetcher::new(), "https://example.com/pub/pr");
        assert_eq!(
            source.file_url("pr.class"),
            "https://example.com/pub/pr/pr.class"
        );
    }
}
