//! Markdown/MDX page rewriting.
//!
//! Runs in order: known base URLs, known API keys, `YOUR_API_KEY`
//! placeholders, then (staging landing page only) the banner. Each step
//! records its own change flag so the debug log can say what happened.

use std::path::Path;

use crate::environment::ResolvedEnvironment;
use crate::error::Result;

use super::banner::{insert_banner, is_index_document, render_banner};
use super::pattern::Replacements;
use super::{read_document, write_document, Rewriter};

/// What a prose rewrite touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProseChanges {
    pub urls: bool,
    pub keys: bool,
    pub placeholders: bool,
    pub banner: bool,
}

impl ProseChanges {
    /// Whether anything changed.
    pub fn any(&self) -> bool {
        self.urls || self.keys || self.placeholders || self.banner
    }
}

/// Result of rewriting one page in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProseRewrite {
    pub content: String,
    pub changes: ProseChanges,
}

/// Rewrite page content.
///
/// `banner` is the rendered callout to insert, or `None` when this page
/// must not get one.
pub fn rewrite_prose(
    content: &str,
    replacements: &Replacements,
    banner: Option<&str>,
) -> ProseRewrite {
    let mut changes = ProseChanges::default();

    let (updated, urls) = replacements.replace_urls(content);
    changes.urls = urls;

    let (updated, keys) = replacements.replace_keys(&updated);
    changes.keys = keys;

    let (mut updated, placeholders) = replacements.replace_placeholders(&updated);
    changes.placeholders = placeholders;

    if let Some(with_banner) = banner.and_then(|b| insert_banner(&updated, b)) {
        updated = with_banner;
        changes.banner = true;
    }

    ProseRewrite {
        content: updated,
        changes,
    }
}

/// Rewriter for `.md` and `.mdx` pages.
#[derive(Debug, Clone)]
pub struct ProseRewriter {
    replacements: Replacements,
    banner: Option<String>,
}

impl ProseRewriter {
    /// Create a rewriter for the resolved environment.
    ///
    /// The banner is only prepared for staging.
    pub fn new(replacements: Replacements, resolved: &ResolvedEnvironment) -> Self {
        let banner = resolved
            .name
            .is_staging()
            .then(|| render_banner(&resolved.base_url, &resolved.api_key));
        Self {
            replacements,
            banner,
        }
    }

    /// Compute the rewrite for `content` as if it lived at `path`.
    pub fn rewrite(&self, path: &Path, content: &str) -> ProseRewrite {
        let banner = self
            .banner
            .as_deref()
            .filter(|_| is_index_document(path));
        rewrite_prose(content, &self.replacements, banner)
    }
}

impl Rewriter for ProseRewriter {
    fn rewrite_file(&self, path: &Path) -> Result<bool> {
        let Some(content) = read_document(path)? else {
            return Ok(false);
        };
        let rewrite = self.rewrite(path, &content);

        if !rewrite.changes.any() {
            return Ok(false);
        }

        tracing::debug!("Rewriting {}: {:?}", path.display(), rewrite.changes);
        write_document(path, &rewrite.content)?;
        Ok(true)
    }
}
