//! Environment resolution.
//!
//! Maps a branch to an environment name and looks up that environment's
//! base URL and API key in the configuration table.

use crate::config::{EnvironmentConfig, PRODUCTION, STAGING};
use crate::error::{DocenvError, Result};

use super::branch::BranchDetection;

/// Deployment environment a branch maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentName {
    Production,
    Staging,
}

impl EnvironmentName {
    /// Map a branch to its environment.
    ///
    /// Case-sensitive: only `dev` and `development` are staging.
    ///
    /// # Example
    ///
    /// ```
    /// use docenv::environment::EnvironmentName;
    ///
    /// assert_eq!(EnvironmentName::for_branch("dev"), EnvironmentName::Staging);
    /// assert_eq!(EnvironmentName::for_branch("Dev"), EnvironmentName::Production);
    /// assert_eq!(EnvironmentName::for_branch(""), EnvironmentName::Production);
    /// ```
    pub fn for_branch(branch: &str) -> Self {
        match branch {
            "dev" | "development" => Self::Staging,
            _ => Self::Production,
        }
    }

    /// The key of this environment in the configuration table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION,
            Self::Staging => STAGING,
        }
    }

    /// Whether this is a non-production environment.
    pub fn is_staging(&self) -> bool {
        matches!(self, Self::Staging)
    }
}

impl std::fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The environment selected for this run. Created once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    /// The branch the environment was derived from.
    pub branch: BranchDetection,
    /// The environment name.
    pub name: EnvironmentName,
    /// Base URL to write into documents.
    pub base_url: String,
    /// API key to write into documents.
    pub api_key: String,
}

impl ResolvedEnvironment {
    /// Resolve the environment for a detected branch.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEnvironment` if the mapped environment has no
    /// entry in `config`.
    ///
    /// # Example
    ///
    /// ```
    /// use docenv::config::{EnvironmentConfig, EnvironmentSettings};
    /// use docenv::environment::{BranchDetection, EnvironmentName, ResolvedEnvironment};
    ///
    /// let config = EnvironmentConfig::new()
    ///     .with_environment("production", EnvironmentSettings::new("https://api.example.com", "live"))
    ///     .with_environment("staging", EnvironmentSettings::new("https://staging.example.com", "test"));
    ///
    /// let resolved = ResolvedEnvironment::resolve(&config, BranchDetection::from_flag("dev")).unwrap();
    /// assert_eq!(resolved.name, EnvironmentName::Staging);
    /// assert_eq!(resolved.base_url, "https://staging.example.com");
    /// ```
    pub fn resolve(config: &EnvironmentConfig, branch: BranchDetection) -> Result<Self> {
        let name = EnvironmentName::for_branch(&branch.branch);
        let settings = config
            .get(name.as_str())
            .ok_or_else(|| DocenvError::UnknownEnvironment {
                name: name.as_str().to_string(),
            })?;

        tracing::debug!(
            "Branch '{}' ({}) resolved to {}",
            branch.branch,
            branch.source,
            name
        );

        Ok(Self {
            branch,
            name,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    /// The four summary lines printed before rewriting.
    ///
    /// The API key is printed in clear text so operators can confirm which
    /// credentials end up in the published docs.
    pub fn summary_lines(&self) -> [String; 4] {
        [
            format!("Branch: {}", self.branch.branch),
            format!("Environment: {}", self.name),
            format!("Base URL: {}", self.base_url),
            format!("API Key: {}", self.api_key),
        ]
    }
}
