//! Configuration module for pomcheck.
//!
//! This module provides:
//! - Type-safe configuration structures with defaults for every field
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - The `CONTINUE_ON_ERROR` environment toggle
//!
//! # Configuration File
//!
//! Place a `.pomcheck.yaml` file in your project root or `~/.config/pomcheck/`:
//!
//! ```yaml
//! policy:
//!   developer_email: releases@acme.example
//!   distribution_url: https://repo.acme.example/releases/
//! behavior:
//!   continue_on_error: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    default_forbidden_tokens, BUILD_LOG_FILE_NAME, DEFAULT_DEVELOPER_EMAIL,
    DEFAULT_DISTRIBUTION_URL, DEFAULT_EXCLUDED_PREFIX, DEFAULT_INTERNAL_REPOSITORY_HOST,
    DEFAULT_OUTPUT_DIR, DEFAULT_PRIVATE_ORGANIZATION_PATH, DEFAULT_SIGNATURE_EXTENSION,
    EFFECTIVE_POM_FILE_NAME,
};
pub use types::{
    AppConfig, AppConfigBuilder, ArtifactConfig, BehaviorConfig, CheckConfig, ForbiddenToken,
    MavenConfig, PolicyConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_for_run, load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Environment variable that switches to continue-on-error mode.
pub const CONTINUE_ON_ERROR_ENV: &str = "CONTINUE_ON_ERROR";

/// Whether `CONTINUE_ON_ERROR` holds a non-empty value.
#[must_use]
pub fn continue_on_error_from_env() -> bool {
    is_enabled(std::env::var_os(CONTINUE_ON_ERROR_ENV).as_deref())
}

/// Any non-empty value enables the toggle, including "0" and "false".
fn is_enabled(value: Option<&std::ffi::OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Generate a JSON Schema for the `AppConfig` configuration format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
