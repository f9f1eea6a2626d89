//! Configuration schema types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the production environment entry.
pub const PRODUCTION: &str = "production";

/// Name of the staging environment entry.
pub const STAGING: &str = "staging";

/// Connection parameters for one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSettings {
    /// Base URL shown in request examples and OpenAPI `servers`.
    pub base_url: String,

    /// API key shown in request examples.
    pub api_key: String,
}

impl EnvironmentSettings {
    /// Create settings from a base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// The environment table, keyed by environment name.
///
/// Loaded once at startup and treated as read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentConfig {
    environments: BTreeMap<String, EnvironmentSettings>,
}

impl EnvironmentConfig {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests.
    pub fn with_environment(mut self, name: &str, settings: EnvironmentSettings) -> Self {
        self.environments.insert(name.to_string(), settings);
        self
    }

    /// Look up an environment by name.
    pub fn get(&self, name: &str) -> Option<&EnvironmentSettings> {
        self.environments.get(name)
    }

    /// The `production` entry, if present.
    pub fn production(&self) -> Option<&EnvironmentSettings> {
        self.get(PRODUCTION)
    }

    /// The `staging` entry, if present.
    pub fn staging(&self) -> Option<&EnvironmentSettings> {
        self.get(STAGING)
    }
}
