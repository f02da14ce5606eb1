//! Directory-listing markup parsing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Link text the listing uses for the parent-directory entry.
pub const PARENT_DIRECTORY_LINK: &str = "[To Parent Directory]";

static ANCHOR_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<a\b[^>]*>(.*?)</a>").expect("anchor pattern"));

/// Extract file names from directory-listing HTML.
///
/// Returns anchor link texts in document order, excluding entries equal to
/// [`PARENT_DIRECTORY_LINK`]. No de-duplication: a name repeated in the
/// listing is returned twice and each occurrence gets its own upload
/// decision (last write wins).
pub fn parse_listing(html: &str) -> Vec<String> {
    ANCHOR_TEXT
        .captures_iter(html)
        .map(|captures| captures[1].to_owned())
        .filter(|text| text != PARENT_DIRECTORY_LINK)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"<html><head><title>/pub/time.series/pr/</title></head><body><H1>/pub/time.series/pr/</H1><hr>
<br><A HREF="/pub/time.series/">[To Parent Directory]</A><br><br>
 2/21/2024  7:30 AM  4348 <br><A HREF="/pub/time.series/pr/pr.class">pr.class</A><br>
 2/21/2024  7:30 AM  7766 <br><A HREF="/pub/time.series/pr/pr.contacts">pr.contacts</A><br>
 2/21/2024  7:30 AM 98521 <br><A HREF="/pub/time.series/pr/pr.data.0.Current">pr.data.0.Current</A><br>
</body></html>"#;

    #[test]
    fn excludes_exactly_the_parent_link() {
        let names = parse_listing(LISTING);
        assert_eq!(names, vec!["pr.class", "pr.contacts", "pr.data.0.Current"]);
    }

    #[test]
    fn n_anchors_with_one_parent_link_yield_n_minus_one_entries() {
        let names = parse_listing(LISTING);
        let anchors = LISTING.to_ascii_lowercase().matches("<a ").count();
        assert_eq!(names.len(), anchors - 1);
    }

    #[test]
    fn preserves_document_order_not_sorted_order() {
        let html = r#"<a href="/z">zeta</a><a href="/a">alpha</a><a href="/m">mid</a>"#;
        assert_eq!(parse_listing(html), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn keeps_duplicate_names() {
        let html = r#"<a href="/1">pr.txt</a><a href="/2">pr.txt</a>"#;
        assert_eq!(parse_listing(html), vec!["pr.txt", "pr.txt"]);
    }

    #[test]
    fn empty_markup_yields_no_entries() {
        assert!(parse_listing("").is_empty());
        assert!(parse_listing("<html><body>no links here</body></html>").is_empty());
    }

    #[test]
    fn lowercase_anchors_are_matched_too() {
        let html = r#"<a href="/pub/">[To Parent Directory]</a><a href="/f">file.txt</a>"#;
        assert_eq!(parse_listing(html), vec!["file.txt"]);
    }
}
