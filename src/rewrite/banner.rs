//! Staging banner for the documentation landing page.
//!
//! Only the index page gets a banner, and only on staging builds. The
//! banner is recognised by [`BANNER_SIGNATURE`]; a page containing that
//! phrase anywhere is considered already bannered.

use std::path::Path;

/// Phrase that marks a page as already carrying the banner.
pub const BANNER_SIGNATURE: &str = "Development Environment";

/// File name of the landing page.
pub const INDEX_DOCUMENT: &str = "index.mdx";

const FRONT_MATTER_DELIMITER: &str = "---";

/// Whether `path` is the landing page.
pub fn is_index_document(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name == INDEX_DOCUMENT)
}

/// Render the callout block for the given staging values.
///
/// # Example
///
/// ```
/// use docenv::rewrite::{render_banner, BANNER_SIGNATURE};
///
/// let banner = render_banner("https://staging.example.com", "sk_test_123");
/// assert!(banner.starts_with("<Warning>"));
/// assert!(banner.contains(BANNER_SIGNATURE));
/// assert!(banner.contains("`https://staging.example.com`"));
/// assert!(banner.contains("`sk_test_123`"));
/// ```
pub fn render_banner(base_url: &str, api_key: &str) -> String {
    format!(
        "<Warning>\n\
         \x20 **{BANNER_SIGNATURE}:** This documentation is using staging credentials and pointing to the development API.\n\
         \n\
         \x20 **Base URL:** `{base_url}`\n\
         \n\
         \x20 **Test API Key:** `{api_key}`\n\
         </Warning>\n\
         \n"
    )
}

/// Byte offset just past the closing front matter delimiter.
///
/// The closing delimiter is the first `---` starting at or after offset 3,
/// i.e. after the opening one. Returns `None` when there is none.
pub fn front_matter_end(content: &str) -> Option<usize> {
    let start = (FRONT_MATTER_DELIMITER.len()..=content.len())
        .find(|&i| content.is_char_boundary(i))?;
    content[start..]
        .find(FRONT_MATTER_DELIMITER)
        .map(|offset| start + offset + FRONT_MATTER_DELIMITER.len())
}

/// Insert `banner` after the front matter.
///
/// Returns `None` if the page already has a banner or has no closing
/// front matter delimiter.
pub fn insert_banner(content: &str, banner: &str) -> Option<String> {
    if content.contains(BANNER_SIGNATURE) {
        return None;
    }
    let end = front_matter_end(content)?;

    let mut updated = String::with_capacity(content.len() + banner.len() + 2);
    updated.push_str(&content[..end]);
    updated.push_str("\n\n");
    updated.push_str(banner);
    updated.push_str(&content[end..]);
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://staging.example.com";
    const KEY: &str = "sk_test_123";

    #[test]
    fn index_document_detection() {
        assert!(is_index_document(Path::new("index.mdx")));
        assert!(is_index_document(Path::new("/docs/site/index.mdx")));
        assert!(!is_index_document(Path::new("/docs/index.md")));
        assert!(!is_index_document(Path::new("/docs/reindex.mdx")));
        assert!(!is_index_document(Path::new("/docs/index.mdx/guide.mdx")));
    }

    #[test]
    fn banner_has_expected_lines() {
        let banner = render_banner(URL, KEY);
        let lines: Vec<_> = banner.lines().collect();
        assert_eq!(lines[0], "<Warning>");
        assert!(lines[1].starts_with("  **Development Environment:**"));
        assert_eq!(lines[3], "  **Base URL:** `https://staging.example.com`");
        assert_eq!(lines[5], "  **Test API Key:** `sk_test_123`");
        assert_eq!(lines[6], "</Warning>");
        assert!(banner.ends_with("</Warning>\n\n"));
    }

    #[test]
    fn front_matter_end_finds_closing_delimiter() {
        let content = "---\ntitle: X\n---\nBody";
        assert_eq!(front_matter_end(content), Some(16));
        assert_eq!(&content[..16], "---\ntitle: X\n---");
    }

    #[test]
    fn front_matter_end_without_closing_delimiter() {
        assert_eq!(front_matter_end("---\ntitle: X\nBody"), None);
        assert_eq!(front_matter_end("No front matter at all"), None);
        assert_eq!(front_matter_end(""), None);
        assert_eq!(front_matter_end("--"), None);
    }

    #[test]
    fn front_matter_end_handles_multibyte_prefix() {
        // offset 3 falls inside the first character
        let content = "é€x\n---\nBody";
        let end = front_matter_end(content).unwrap();
        assert_eq!(&content[end..], "\nBody");
    }

    #[test]
    fn insert_after_front_matter() {
        let banner = render_banner(URL, KEY);
        let updated = insert_banner("---\ntitle: X\n---\nBody", &banner).unwrap();
        assert_eq!(updated, format!("---\ntitle: X\n---\n\n{banner}\nBody"));
    }

    #[test]
    fn insert_is_skipped_when_signature_present() {
        let banner = render_banner(URL, KEY);
        let once = insert_banner("---\ntitle: X\n---\nBody", &banner).unwrap();
        assert!(insert_banner(&once, &banner).is_none());
    }

    #[test]
    fn insert_is_skipped_without_front_matter() {
        let banner = render_banner(URL, KEY);
        assert!(insert_banner("# Title\n\nBody", &banner).is_none());
    }
}
