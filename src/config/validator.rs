//! Configuration checks.
//!
//! None of these are fatal. A missing or empty value only means the
//! corresponding substitution never fires, so the operator is warned and
//! the run continues. An environment that the resolver actually needs but
//! cannot find is reported later as
//! [`DocenvError::UnknownEnvironment`](crate::error::DocenvError::UnknownEnvironment).

use crate::config::schema::{EnvironmentConfig, PRODUCTION, STAGING};

/// A non-fatal configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Rule identifier
    pub rule: String,
    /// Human-readable message
    pub message: String,
    /// Environment the warning refers to
    pub environment: String,
}

/// Check that both `production` and `staging` exist with non-empty values.
pub fn validate_config(config: &EnvironmentConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for name in [PRODUCTION, STAGING] {
        let Some(settings) = config.get(name) else {
            warnings.push(ValidationWarning {
                rule: "missing-environment".to_string(),
                message: format!(
                    "Environment '{}' is missing; its values will not be replaced",
                    name
                ),
                environment: name.to_string(),
            });
            continue;
        };

        for (field, value) in [("baseUrl", &settings.base_url), ("apiKey", &settings.api_key)] {
            if value.is_empty() {
                warnings.push(ValidationWarning {
                    rule: "empty-value".to_string(),
                    message: format!(
                        "Environment '{}' has an empty '{}'; it will not be replaced",
                        name, field
                    ),
                    environment: name.to_string(),
                });
            }
        }
    }

    warnings
}
