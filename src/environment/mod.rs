//! Branch detection and environment resolution.
//!
//! The resolver runs once per invocation:
//!
//! 1. Detect the branch (`--branch` flag, else `git rev-parse`, else `main`)
//! 2. Map the branch to an environment (`dev`/`development` are staging,
//!    everything else is production)
//! 3. Look the environment up in the configuration table

pub mod branch;
pub mod resolver;

pub use branch::{
    detect_branch, detect_branch_with, BranchDetection, BranchSource, DEFAULT_BRANCH,
};
pub use resolver::{EnvironmentName, ResolvedEnvironment};
