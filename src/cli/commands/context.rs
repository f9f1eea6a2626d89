//! Startup sequence shared by `build` and `env`.
//!
//! Load the environment table, detect the branch, resolve the environment,
//! and print the summary. Config problems abort here, before any file is
//! touched.

use std::path::Path;

use crate::config::{config_path, load_config_file, validate_config, EnvironmentConfig};
use crate::environment::{detect_branch, BranchDetection, ResolvedEnvironment};
use crate::error::Result;
use crate::ui::UserInterface;

/// Everything a command needs once startup has succeeded.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// The loaded environment table.
    pub config: EnvironmentConfig,
    /// The environment selected for this run.
    pub resolved: ResolvedEnvironment,
}

impl RunContext {
    /// Run the startup sequence for the docs tree at `root`.
    ///
    /// `branch` overrides git detection when given.
    pub fn load(
        root: &Path,
        config_override: Option<&Path>,
        branch: Option<&str>,
        ui: &mut dyn UserInterface,
    ) -> Result<Self> {
        let path = config_path(root, config_override);
        tracing::debug!("Loading environment table from {}", path.display());
        let config = load_config_file(&path)?;

        let detection = match branch {
            Some(name) => BranchDetection::from_flag(name),
            None => detect_branch(root),
        };

        Self::from_detection(config, detection, ui)
    }

    /// Finish startup with an already loaded table and detected branch.
    pub fn from_detection(
        config: EnvironmentConfig,
        detection: BranchDetection,
        ui: &mut dyn UserInterface,
    ) -> Result<Self> {
        for warning in validate_config(&config) {
            tracing::warn!("{} ({})", warning.message, warning.rule);
        }

        if let Some(reason) = detection.fallback_reason() {
            ui.warning(&format!("Error detecting git branch: {}", reason));
            ui.message("Defaulting to production environment");
        }

        let resolved = ResolvedEnvironment::resolve(&config, detection)?;
        for line in resolved.summary_lines() {
            ui.message(&line);
        }

        Ok(Self { config, resolved })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnvironmentSettings, PRODUCTION, STAGING};
    use crate::environment::EnvironmentName;
    use crate::error::DocenvError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> EnvironmentConfig {
        EnvironmentConfig::new()
            .with_environment(
                PRODUCTION,
                EnvironmentSettings::new("https://api.example.com", "sk_live_1"),
            )
            .with_environment(
                STAGING,
                EnvironmentSettings::new("https://staging.example.com", "sk_test_1"),
            )
    }

    #[test]
    fn prints_summary_lines() {
        let mut ui = MockUI::new();
        let ctx =
            RunContext::from_detection(config(), BranchDetection::from_flag("dev"), &mut ui)
                .unwrap();

        assert_eq!(ctx.resolved.name, EnvironmentName::Staging);
        assert_eq!(
            ui.messages(),
            [
                "Branch: dev".to_string(),
                "Environment: staging".to_string(),
                "Base URL: https://staging.example.com".to_string(),
                "API Key: sk_test_1".to_string(),
            ]
        );
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn fallback_is_reported() {
        let mut ui = MockUI::new();
        let ctx = RunContext::from_detection(
            config(),
            BranchDetection::fallback("not a git repository"),
            &mut ui,
        )
        .unwrap();

        assert_eq!(ctx.resolved.name, EnvironmentName::Production);
        assert!(ui.has_warning("Error detecting git branch: not a git repository"));
        assert_eq!(ui.messages()[0], "Defaulting to production environment");
        assert_eq!(ui.messages()[1], "Branch: main");
    }

    #[test]
    fn missing_environment_aborts() {
        let config = EnvironmentConfig::new().with_environment(
            PRODUCTION,
            EnvironmentSettings::new("https://api.example.com", "sk_live_1"),
        );
        let mut ui = MockUI::new();
        let err = RunContext::from_detection(config, BranchDetection::from_flag("dev"), &mut ui)
            .unwrap_err();
        assert!(matches!(err, DocenvError::UnknownEnvironment { .. }));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn load_reads_default_config_path() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("scripts")).unwrap();
        fs::write(
            temp.path().join("scripts/env-config.json"),
            serde_json::to_string(&config()).unwrap(),
        )
        .unwrap();

        let mut ui = MockUI::new();
        let ctx = RunContext::load(temp.path(), None, Some("main"), &mut ui).unwrap();
        assert_eq!(ctx.resolved.api_key, "sk_live_1");
        assert!(ui.has_message("Branch: main"));
    }

    #[test]
    fn load_without_config_fails_before_detection() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let err = RunContext::load(temp.path(), None, None, &mut ui).unwrap_err();
        assert!(matches!(err, DocenvError::ConfigNotFound { .. }));
        assert!(ui.messages().is_empty());
        assert!(ui.warnings().is_empty());
    }
}
