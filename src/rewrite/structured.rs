//! JSON specification rewriting.
//!
//! The file is treated as text, not parsed: URLs and keys are replaced
//! wherever they appear, including inside descriptions and examples.

use std::path::Path;

use crate::error::Result;

use super::pattern::Replacements;
use super::{read_document, write_document, Rewriter};

/// Apply URL and key substitutions to structured content.
pub fn rewrite_structured(content: &str, replacements: &Replacements) -> String {
    replacements.replace_urls_and_keys(content)
}

/// Rewriter for `.json` specification files.
#[derive(Debug, Clone)]
pub struct StructuredRewriter {
    replacements: Replacements,
}

impl StructuredRewriter {
    /// Create a rewriter using the run's substitutions.
    pub fn new(replacements: Replacements) -> Self {
        Self { replacements }
    }
}

impl Rewriter for StructuredRewriter {
    fn rewrite_file(&self, path: &Path) -> Result<bool> {
        let Some(content) = read_document(path)? else {
            return Ok(false);
        };
        let updated = rewrite_structured(&content, &self.replacements);

        if updated == content {
            tracing::debug!("Unchanged: {}", path.display());
            return Ok(false);
        }

        write_document(path, &updated)?;
        Ok(true)
    }
}
