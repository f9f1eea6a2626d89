//! Current branch detection.
//!
//! Detection never fails. When git cannot report a branch (not a
//! repository, git missing, no commits yet) the result falls back to
//! [`DEFAULT_BRANCH`] and records why in [`BranchSource::Fallback`].

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context};

/// Branch assumed when detection fails. Maps to production.
pub const DEFAULT_BRANCH: &str = "main";

/// How the branch name was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchSource {
    /// Explicitly set via `--branch`.
    Flag,
    /// Reported by `git rev-parse --abbrev-ref HEAD`.
    Git,
    /// Detection failed; [`DEFAULT_BRANCH`] was substituted.
    Fallback { reason: String },
}

impl std::fmt::Display for BranchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--branch flag"),
            Self::Git => write!(f, "git"),
            Self::Fallback { .. } => write!(f, "default"),
        }
    }
}

/// A branch name together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDetection {
    /// The branch name.
    pub branch: String,
    /// How the branch was determined.
    pub source: BranchSource,
}

impl BranchDetection {
    /// A branch given explicitly on the command line.
    pub fn from_flag(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            source: BranchSource::Flag,
        }
    }

    /// The fallback result, carrying the failure reason.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            source: BranchSource::Fallback {
                reason: reason.into(),
            },
        }
    }

    /// Whether detection failed and the default branch was substituted.
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, BranchSource::Fallback { .. })
    }

    /// The failure reason, if this is a fallback.
    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.source {
            BranchSource::Fallback { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Detect the current branch of the repository at `root` using git.
///
/// # Example
///
/// ```
/// use docenv::environment::detect_branch;
/// use tempfile::TempDir;
///
/// // Either a real branch or the fallback; never an error
/// let temp = TempDir::new().unwrap();
/// let detection = detect_branch(temp.path());
/// if detection.is_fallback() {
///     assert_eq!(detection.branch, "main");
/// }
/// ```
pub fn detect_branch(root: &Path) -> BranchDetection {
    detect_branch_with(|| git_current_branch(root))
}

/// Detect with a custom branch lookup (for testing).
pub fn detect_branch_with<F>(lookup: F) -> BranchDetection
where
    F: FnOnce() -> anyhow::Result<String>,
{
    match lookup() {
        Ok(branch) => BranchDetection {
            branch: branch.trim().to_string(),
            source: BranchSource::Git,
        },
        Err(e) => {
            tracing::debug!("Branch detection failed: {:#}", e);
            BranchDetection::fallback(format!("{:#}", e))
        }
    }
}

/// Ask git for the abbreviated name of HEAD.
fn git_current_branch(root: &Path) -> anyhow::Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(root)
        .output()
        .context("failed to run git")?;

    if !output.status.success() {
        bail!("{}", String::from_utf8_lossy(&output.stderr).trim());
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    tracing::debug!("git reports branch '{}'", branch);
    Ok(branch)
}
