//! Configuration types for pomcheck runs.
//!
//! [`AppConfig`] is what a `.pomcheck.yaml` file deserializes into;
//! [`CheckConfig`] is one fully-resolved invocation of the checker.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from a config file
/// and overridden by CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// How Maven is invoked
    pub maven: MavenConfig,
    /// Release policy: expected values and forbidden references
    pub policy: PolicyConfig,
    /// Build output and signature conventions
    pub artifacts: ArtifactConfig,
    /// Failure handling
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the Maven executable.
    pub fn maven_executable(mut self, executable: impl Into<String>) -> Self {
        self.config.maven.executable = executable.into();
        self
    }

    /// Set the path the effective POM is regenerated to.
    pub fn effective_pom_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.maven.effective_pom = Some(path.into());
        self
    }

    /// Set the expected developer email.
    pub fn developer_email(mut self, email: impl Into<String>) -> Self {
        self.config.policy.developer_email = email.into();
        self
    }

    /// Set the expected distribution-management repository URL.
    pub fn distribution_url(mut self, url: impl Into<String>) -> Self {
        self.config.policy.distribution_url = url.into();
        self
    }

    /// Replace the forbidden tokens.
    pub fn forbidden_tokens(mut self, tokens: Vec<ForbiddenToken>) -> Self {
        self.config.policy.forbidden_tokens = tokens;
        self
    }

    /// Set the per-module output directory name.
    pub fn output_dir(mut self, name: impl Into<String>) -> Self {
        self.config.artifacts.output_dir = name.into();
        self
    }

    /// Keep checking after a failed check.
    pub const fn continue_on_error(mut self, enabled: bool) -> Self {
        self.config.behavior.continue_on_error = enabled;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Maven invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MavenConfig {
    /// Maven executable name or path
    pub executable: String,
    /// Extra arguments passed to every Maven invocation (e.g. `-s settings.xml`)
    pub extra_args: Vec<String>,
    /// Plugin prefix or coordinates used for `evaluate` and `effective-pom`
    pub help_plugin: String,
    /// Where the build output is captured (default: system temp dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_log: Option<PathBuf>,
    /// Where the effective POM is regenerated (default: system temp dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_pom: Option<PathBuf>,
    /// Additional executables that must be on PATH before the run starts
    pub required_tools: Vec<String>,
}

impl MavenConfig {
    /// Build log path, falling back to the temp dir default.
    #[must_use]
    pub fn build_log_path(&self) -> PathBuf {
        self.build_log
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(super::defaults::BUILD_LOG_FILE_NAME))
    }

    /// Effective POM path, falling back to the temp dir default.
    #[must_use]
    pub fn effective_pom_path(&self) -> PathBuf {
        self.effective_pom.clone().unwrap_or_else(|| {
            std::env::temp_dir().join(super::defaults::EFFECTIVE_POM_FILE_NAME)
        })
    }

    /// Every executable the pre-flight check must find.
    #[must_use]
    pub fn all_required_tools(&self) -> Vec<String> {
        let mut tools = vec![self.executable.clone()];
        for tool in &self.required_tools {
            if !tools.contains(tool) {
                tools.push(tool.clone());
            }
        }
        tools
    }
}

/// Release policy checked against every POM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PolicyConfig {
    /// Every `developers/developer/email` must equal this address
    pub developer_email: String,
    /// Every `distributionManagement/repository/url` must equal this URL
    pub distribution_url: String,
    /// Substrings that must not appear in any raw POM
    pub forbidden_tokens: Vec<ForbiddenToken>,
}

/// A substring that must not appear in a raw POM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ForbiddenToken {
    /// The literal text to look for
    pub token: String,
    /// Match case exactly (default: true)
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
    /// What the token identifies, shown in failure messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ForbiddenToken {
    /// Create a case-sensitive token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            case_sensitive: true,
            description: None,
        }
    }

    /// Match regardless of case.
    #[must_use]
    pub const fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Label used in check names and messages.
    #[must_use]
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.token)
    }
}

const fn default_true() -> bool {
    true
}

/// Build output conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Output directory name beside each POM
    pub output_dir: String,
    /// Extension of detached signature files (without the dot)
    pub signature_extension: String,
    /// Extensions of diagnostic outputs that are never signed
    pub unsigned_extensions: Vec<String>,
    /// File-name prefix of pre-repackage artifacts excluded from release
    pub excluded_prefix: String,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Run every check and report all failures instead of stopping at the first
    pub continue_on_error: bool,
}

// ============================================================================
// Command Configuration
// ============================================================================

/// Configuration for one checker invocation.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Project root containing the top-level `pom.xml`
    pub project_root: PathBuf,
    /// File-backed settings merged with CLI overrides
    pub app: AppConfig,
    /// Final report format
    pub format: ReportFormat,
    /// Final report destination (stdout if `None`)
    pub output_file: Option<PathBuf>,
    /// Suppress PASS lines
    pub quiet: bool,
    /// Disable ANSI colors
    pub no_color: bool,
}

impl CheckConfig {
    /// Create a check configuration with default report settings.
    pub fn new(project_root: impl Into<PathBuf>, app: AppConfig) -> Self {
        Self {
            project_root: project_root.into(),
            app,
            format: ReportFormat::default(),
            output_file: None,
            quiet: false,
            no_color: false,
        }
    }
}
