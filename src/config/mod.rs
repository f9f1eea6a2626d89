//! Environment configuration loading, parsing, and validation.
//!
//! The configuration is a JSON table mapping environment names to the
//! base URL and API key used in documentation examples:
//!
//! ```json
//! {
//!   "production": { "baseUrl": "https://api.example.com", "apiKey": "sk_live_123" },
//!   "staging": { "baseUrl": "https://staging.example.com", "apiKey": "sk_test_123" }
//! }
//! ```
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Non-fatal checks in [`validator`]
//!
//! # Example
//!
//! ```
//! use docenv::config::{load_config_file, validate_config};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("env-config.json");
//! fs::write(
//!     &path,
//!     r#"{"production":{"baseUrl":"https://api.example.com","apiKey":"live"},
//!         "staging":{"baseUrl":"https://staging.example.com","apiKey":"test"}}"#,
//! )
//! .unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! assert!(validate_config(&config).is_empty());
//! assert_eq!(config.production().unwrap().api_key, "live");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{config_path, load_config_file, parse_config, DEFAULT_CONFIG_PATH};
pub use schema::{EnvironmentConfig, EnvironmentSettings, PRODUCTION, STAGING};
pub use validator::{validate_config, ValidationWarning};
