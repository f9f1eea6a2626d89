//! Documentation tree traversal.
//!
//! A build makes three passes over the docs root:
//!
//! 1. `openapi.json` at the root plus every `.json` file directly inside
//!    `openapi/` (structured rewriter)
//! 2. every `.mdx` file anywhere under the root (prose rewriter)
//! 3. every `.md` file anywhere under `docs/` (prose rewriter)
//!
//! A pass whose starting point does not exist is skipped.
//! Symlinks are not followed.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;
use crate::rewrite::Rewriter;
use crate::ui::UserInterface;

/// Root-level OpenAPI document.
pub const OPENAPI_FILE: &str = "openapi.json";
/// Directory of additional OpenAPI documents (not searched recursively).
pub const OPENAPI_DIR: &str = "openapi";
/// Directory holding plain Markdown pages.
pub const DOCS_DIR: &str = "docs";

/// Files updated per pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub openapi: usize,
    pub mdx: usize,
    pub markdown: usize,
}

impl BuildReport {
    /// Files updated across all passes.
    pub fn total(&self) -> usize {
        self.openapi + self.mdx + self.markdown
    }
}

/// Run all three passes over `root`.
pub fn build_tree(
    root: &Path,
    structured: &dyn Rewriter,
    prose: &dyn Rewriter,
    ui: &mut dyn UserInterface,
) -> Result<BuildReport> {
    let openapi = rewrite_openapi(root, structured, ui)?;

    let mdx = if root.is_dir() {
        walk(root, ".mdx", prose, ui)?
    } else {
        tracing::debug!("Skipping .mdx pass, {} does not exist", root.display());
        0
    };

    let docs = root.join(DOCS_DIR);
    let markdown = if docs.is_dir() {
        walk(&docs, ".md", prose, ui)?
    } else {
        tracing::debug!("Skipping .md pass, {} does not exist", docs.display());
        0
    };

    Ok(BuildReport {
        openapi,
        mdx,
        markdown,
    })
}

/// Rewrite `openapi.json` and the `.json` files directly inside `openapi/`.
pub fn rewrite_openapi(
    root: &Path,
    rewriter: &dyn Rewriter,
    ui: &mut dyn UserInterface,
) -> Result<usize> {
    let mut updated = 0;

    let document = root.join(OPENAPI_FILE);
    if document.is_file() && rewrite_one(&document, rewriter, ui)? {
        updated += 1;
    }

    let dir = root.join(OPENAPI_DIR);
    if dir.is_dir() {
        let entries = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in entries {
            let entry = entry?;
            if entry.file_type().is_file()
                && has_suffix(entry.path(), ".json")
                && rewrite_one(entry.path(), rewriter, ui)?
            {
                updated += 1;
            }
        }
    }

    Ok(updated)
}

/// Recursively rewrite every file under `dir` whose name ends with `suffix`.
///
/// Returns the number of files written. Any traversal, read, or write
/// failure aborts the walk.
pub fn walk(
    dir: &Path,
    suffix: &str,
    rewriter: &dyn Rewriter,
    ui: &mut dyn UserInterface,
) -> Result<usize> {
    let mut updated = 0;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_suffix(entry.path(), suffix) {
            continue;
        }
        if rewrite_one(entry.path(), rewriter, ui)? {
            updated += 1;
        }
    }

    Ok(updated)
}

fn rewrite_one(path: &Path, rewriter: &dyn Rewriter, ui: &mut dyn UserInterface) -> Result<bool> {
    let written = rewriter.rewrite_file(path)?;
    if written {
        ui.message(&format!("Updated: {}", path.display()));
    }
    Ok(written)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}
