//! Configuration file discovery and loading.

use crate::config::schema::EnvironmentConfig;
use crate::error::{DocenvError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the environment table relative to the docs root.
pub const DEFAULT_CONFIG_PATH: &str = "scripts/env-config.json";

/// Resolve the config path: an explicit override wins, otherwise
/// [`DEFAULT_CONFIG_PATH`] under the docs root.
///
/// Relative overrides are taken as given (relative to the working
/// directory), matching how clap hands them over.
pub fn config_path(root: &Path, config_override: Option<&Path>) -> PathBuf {
    match config_override {
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_PATH),
    }
}

/// Load the environment table from a JSON file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid or has the wrong shape.
pub fn load_config_file(path: &Path) -> Result<EnvironmentConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DocenvError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DocenvError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse JSON content into an [`EnvironmentConfig`].
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<EnvironmentConfig> {
    serde_json::from_str(content).map_err(|e| DocenvError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"{
        "production": {"baseUrl": "https://api.example.com", "apiKey": "sk_live_1"},
        "staging": {"baseUrl": "https://staging.example.com", "apiKey": "sk_test_1"}
    }"#;

    #[test]
    fn config_path_defaults_under_root() {
        let path = config_path(Path::new("/docs"), None);
        assert_eq!(path, PathBuf::from("/docs/scripts/env-config.json"));
    }

    #[test]
    fn config_path_override_wins() {
        let path = config_path(Path::new("/docs"), Some(Path::new("/etc/env.json")));
        assert_eq!(path, PathBuf::from("/etc/env.json"));
    }

    #[test]
    fn load_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env-config.json");
        fs::write(&path, VALID).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.production().unwrap().api_key, "sk_live_1");
        assert_eq!(
            config.staging().unwrap().base_url,
            "https://staging.example.com"
        );
    }

    #[test]
    fn load_missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, DocenvError::ConfigNotFound { path: p } if p == path));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env-config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, DocenvError::ConfigParseError { .. }));
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let err = parse_config(r#"{"production": "https://api"}"#, Path::new("x.json"))
            .unwrap_err();
        match err {
            DocenvError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("x.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
