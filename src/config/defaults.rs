//! Default values for pomcheck configuration.

use super::types::{ArtifactConfig, ForbiddenToken, MavenConfig, PolicyConfig};

/// File name of the captured build log inside the temp dir.
pub const BUILD_LOG_FILE_NAME: &str = "pomcheck-build.log";

/// File name of the regenerated effective POM inside the temp dir.
pub const EFFECTIVE_POM_FILE_NAME: &str = "pomcheck-effective-pom.xml";

/// Default Maven executable.
pub const DEFAULT_MAVEN_EXECUTABLE: &str = "mvn";

/// Default help plugin prefix.
pub const DEFAULT_HELP_PLUGIN: &str = "help";

/// Address every release POM lists as its developer contact.
pub const DEFAULT_DEVELOPER_EMAIL: &str = "opensource@example.com";

/// Staging endpoint every release POM deploys to.
pub const DEFAULT_DISTRIBUTION_URL: &str =
    "https://oss.sonatype.org/service/local/staging/deploy/maven2/";

/// Hostname of the internal artifact repository.
pub const DEFAULT_INTERNAL_REPOSITORY_HOST: &str = "artifactory.internal.example.com";

/// Path segment of the private source-hosting organization.
pub const DEFAULT_PRIVATE_ORGANIZATION_PATH: &str = "github.com/example-internal";

/// Per-module build output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "target";

/// Detached signature extension.
pub const DEFAULT_SIGNATURE_EXTENSION: &str = "asc";

/// Diagnostic outputs that never carry signatures.
pub const DEFAULT_UNSIGNED_EXTENSIONS: &[&str] = &["txt", "log"];

/// Pre-shade / pre-repackage artifacts.
pub const DEFAULT_EXCLUDED_PREFIX: &str = "original";

impl Default for MavenConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_MAVEN_EXECUTABLE.to_string(),
            extra_args: Vec::new(),
            help_plugin: DEFAULT_HELP_PLUGIN.to_string(),
            build_log: None,
            effective_pom: None,
            required_tools: Vec::new(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            developer_email: DEFAULT_DEVELOPER_EMAIL.to_string(),
            distribution_url: DEFAULT_DISTRIBUTION_URL.to_string(),
            forbidden_tokens: default_forbidden_tokens(),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            signature_extension: DEFAULT_SIGNATURE_EXTENSION.to_string(),
            unsigned_extensions: DEFAULT_UNSIGNED_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            excluded_prefix: DEFAULT_EXCLUDED_PREFIX.to_string(),
        }
    }
}

/// The internal hostname is matched exactly; the organization path in any case.
#[must_use]
pub fn default_forbidden_tokens() -> Vec<ForbiddenToken> {
    vec![
        ForbiddenToken::new(DEFAULT_INTERNAL_REPOSITORY_HOST)
            .described("internal artifact repository"),
        ForbiddenToken::new(DEFAULT_PRIVATE_ORGANIZATION_PATH)
            .case_insensitive()
            .described("private source organization"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_defaults_match_conventions() {
        let config = AppConfig::default();
        assert_eq!(config.maven.executable, "mvn");
        assert_eq!(config.artifacts.output_dir, "target");
        assert_eq!(config.artifacts.signature_extension, "asc");
        assert_eq!(config.artifacts.unsigned_extensions, vec!["txt", "log"]);
        assert_eq!(config.artifacts.excluded_prefix, "original");
        assert!(!config.behavior.continue_on_error);
    }

    #[test]
    fn test_default_tokens_case_sensitivity() {
        let tokens = default_forbidden_tokens();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].case_sensitive, "hostname is matched exactly");
        assert!(!tokens[1].case_sensitive, "organization path ignores case");
    }

    #[test]
    fn test_temp_paths_default_to_temp_dir() {
        let maven = MavenConfig::default();
        assert!(maven.build_log_path().ends_with(BUILD_LOG_FILE_NAME));
        assert!(maven.effective_pom_path().ends_with(EFFECTIVE_POM_FILE_NAME));
    }

    #[test]
    fn test_required_tools_deduplicated() {
        let maven = MavenConfig {
            required_tools: vec!["mvn".to_string(), "gpg".to_string()],
            ..MavenConfig::default()
        };
        assert_eq!(maven.all_required_tools(), vec!["mvn", "gpg"]);
    }
}
