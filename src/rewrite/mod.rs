//! In-place rewriting of documentation files.
//!
//! - [`pattern`] - escaped literal patterns shared by both rewriters
//! - [`structured`] - JSON specification files (OpenAPI)
//! - [`prose`] - Markdown/MDX pages, including placeholder keys
//! - [`banner`] - staging banner for the landing page
//!
//! Every rewriter reads the whole file, computes the new content, and writes
//! it back only when something changed. A file that is not valid UTF-8 is
//! skipped with a warning and left untouched.

pub mod banner;
pub mod pattern;
pub mod prose;
pub mod structured;

use std::fs;
use std::path::Path;

use crate::error::{DocenvError, Result};

pub use banner::{insert_banner, is_index_document, render_banner, BANNER_SIGNATURE};
pub use pattern::{literal_pattern, LiteralReplacement, Replacements, API_KEY_PLACEHOLDER};
pub use prose::{rewrite_prose, ProseChanges, ProseRewrite, ProseRewriter};
pub use structured::{rewrite_structured, StructuredRewriter};

/// Rewrites a single file in place.
///
/// Implemented by [`StructuredRewriter`] and [`ProseRewriter`] so the tree
/// walker can dispatch on extension without knowing the format.
pub trait Rewriter {
    /// Rewrite `path`, returning whether the file was written.
    fn rewrite_file(&self, path: &Path) -> Result<bool>;
}

/// Read a document as UTF-8 text.
///
/// Returns `None` (after logging a warning) when the file is not valid
/// UTF-8, so the caller can skip it without writing.
pub fn read_document(path: &Path) -> Result<Option<String>> {
    let bytes = fs::read(path).map_err(|source| DocenvError::FileIo {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(Some(content)),
        Err(e) => {
            tracing::warn!(
                "Skipping {}: not valid UTF-8 ({})",
                path.display(),
                e.utf8_error()
            );
            Ok(None)
        }
    }
}

/// Write a document back in place.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| DocenvError::FileIo {
        path: path.to_path_buf(),
        source,
    })
}
