//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".pomcheck.yaml",
    ".pomcheck.yml",
    "pomcheck.yaml",
    "pomcheck.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/pomcheck/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    search_paths()
        .into_iter()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Directories searched for a config file, in order.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        if !dirs.contains(&git_root) {
            dirs.push(git_root);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs.push(config_dir.join("pomcheck"));
    }
    if let Some(home) = dirs::home_dir() {
        dirs.push(home);
    }
    dirs
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
///
/// A discovered file that fails to load is logged and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Load config for a run: an explicit path must load, a discovered one may fail.
pub fn load_for_run(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    match explicit_path {
        Some(path) => load_config_file(path).map(|config| (config, Some(path.to_path_buf()))),
        None => Ok(load_or_default(None)),
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# pomcheck configuration
# Place this file at .pomcheck.yaml in your project root or ~/.config/pomcheck/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# pomcheck configuration file
# ============================
#
# This file configures pomcheck behavior. Place it at:
#   - .pomcheck.yaml in your project root
#   - ~/.config/pomcheck/pomcheck.yaml for global config
#
# CLI arguments and the CONTINUE_ON_ERROR environment variable always
# override file settings.

# How Maven is invoked
maven:
  executable: mvn
  # Passed to every invocation, e.g. ['-s', 'ci-settings.xml']
  extra_args: []
  # Prefix or full coordinates of the help plugin
  help_plugin: help
  # Captured output of the clean install (default: system temp dir)
  # build_log: /tmp/pomcheck-build.log
  # Where the effective POM is regenerated (default: system temp dir)
  # effective_pom: /tmp/pomcheck-effective-pom.xml
  # Extra executables that must be on PATH
  required_tools: []

# Release policy
policy:
  # Every developers/developer/email must equal this
  developer_email: opensource@example.com
  # Every distributionManagement/repository/url must equal this
  distribution_url: https://oss.sonatype.org/service/local/staging/deploy/maven2/
  # Substrings that must never appear in a POM
  forbidden_tokens:
    - token: artifactory.internal.example.com
      case_sensitive: true
      description: internal artifact repository
    - token: github.com/example-internal
      case_sensitive: false
      description: private source organization

# Build output conventions
artifacts:
  output_dir: target
  signature_extension: asc
  # Never signed
  unsigned_extensions: [txt, log]
  # Pre-repackage artifacts, matched against the file name
  excluded_prefix: original

# Failure handling
behavior:
  # Run every check instead of stopping at the first failure
  continue_on_error: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".pomcheck.yaml");
        std::fs::write(&config_path, "behavior:\n  continue_on_error: true\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
policy:
  developer_email: releases@acme.example
  forbidden_tokens:
    - token: nexus.acme.corp
behavior:
  continue_on_error: true
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.policy.developer_email, "releases@acme.example");
        assert_eq!(config.policy.forbidden_tokens.len(), 1);
        assert!(config.policy.forbidden_tokens[0].case_sensitive);
        assert!(config.behavior.continue_on_error);
        // Untouched sections keep their defaults
        assert_eq!(config.maven.executable, "mvn");
        assert_eq!(config.artifacts.output_dir, "target");
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("empty.yaml");
        std::fs::write(&config_path, "\n").unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_for_run_explicit_parse_error_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "policy: [not, a, map").unwrap();

        let result = load_for_run(Some(&config_path));
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_full_example_config_parses() {
        let config: AppConfig =
            serde_yaml::from_str(&generate_full_example_config()).expect("example must parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_generate_example_config() {
        let example = generate_example_config();
        assert!(example.contains("policy:"));
        assert!(example.contains("forbidden_tokens"));
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "behavior:\n  continue_on_error: true").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
