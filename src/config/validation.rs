//! Configuration validation for pomcheck.

use super::types::{AppConfig, ArtifactConfig, MavenConfig, PolicyConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.maven.validate());
        errors.extend(self.policy.validate());
        errors.extend(self.artifacts.validate());
        errors
    }
}

impl Validatable for MavenConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.executable.trim().is_empty() {
            errors.push(ConfigError::new(
                "maven.executable",
                "Maven executable must not be empty",
            ));
        }
        if self.help_plugin.trim().is_empty() {
            errors.push(ConfigError::new(
                "maven.help_plugin",
                "help plugin prefix must not be empty",
            ));
        }
        for (i, tool) in self.required_tools.iter().enumerate() {
            if tool.trim().is_empty() {
                errors.push(ConfigError::new(
                    &format!("maven.required_tools[{i}]"),
                    "tool name must not be empty",
                ));
            }
        }
        if let Some(ref path) = self.effective_pom {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "maven.effective_pom",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }
        errors
    }
}

impl Validatable for PolicyConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let email = self.developer_email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid_email {
            errors.push(ConfigError::new(
                "policy.developer_email",
                format!("'{}' is not an email address", self.developer_email),
            ));
        }

        if !has_url_scheme(&self.distribution_url) {
            errors.push(ConfigError::new(
                "policy.distribution_url",
                format!(
                    "'{}' must be an absolute URL (e.g. https://...)",
                    self.distribution_url
                ),
            ));
        }

        for (i, token) in self.forbidden_tokens.iter().enumerate() {
            if token.token.trim().is_empty() {
                errors.push(ConfigError::new(
                    &format!("policy.forbidden_tokens[{i}].token"),
                    "forbidden token must not be empty",
                ));
            }
        }

        errors
    }
}

impl Validatable for ArtifactConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let dir = self.output_dir.as_str();
        if dir.is_empty() || dir.contains('/') || dir.contains('\\') || dir == "." || dir == ".." {
            errors.push(ConfigError::new(
                "artifacts.output_dir",
                format!("'{dir}' must be a plain directory name"),
            ));
        }

        if self.signature_extension.is_empty() || self.signature_extension.starts_with('.') {
            errors.push(ConfigError::new(
                "artifacts.signature_extension",
                "signature extension must be non-empty and given without a leading dot",
            ));
        }

        for (i, ext) in self.unsigned_extensions.iter().enumerate() {
            if ext.starts_with('.') {
                errors.push(ConfigError::new(
                    &format!("artifacts.unsigned_extensions[{i}]"),
                    format!("'{ext}' must be given without a leading dot"),
                ));
            }
        }

        errors
    }
}

fn has_url_scheme(url: &str) -> bool {
    url.split_once("://").is_some_and(|(scheme, rest)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            && !rest.is_empty()
    })
}
