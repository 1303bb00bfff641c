//! Check records and the report that accumulates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which step of the per-POM sequence produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckCategory {
    /// Required project properties
    Metadata,
    /// Effective POM generation and parsing
    EffectivePom,
    /// Licence, developer, SCM and distribution sections
    Section,
    /// Internal references in the raw POM
    ForbiddenReference,
    /// Expected release files in the output directory
    Artifact,
    /// Detached signatures beside release files
    Signature,
}

impl CheckCategory {
    /// Every category in check order.
    pub const ALL: [Self; 6] = [
        Self::Metadata,
        Self::EffectivePom,
        Self::Section,
        Self::ForbiddenReference,
        Self::Artifact,
        Self::Signature,
    ];

    /// Short name used in console output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::EffectivePom => "effective-pom",
            Self::Section => "section",
            Self::ForbiddenReference => "forbidden-reference",
            Self::Artifact => "artifact",
            Self::Signature => "signature",
        }
    }

    /// Stable rule identifier for machine-readable reports.
    #[must_use]
    pub const fn rule_id(&self) -> &'static str {
        match self {
            Self::Metadata => "POM-META",
            Self::EffectivePom => "POM-EFFECTIVE",
            Self::Section => "POM-SECTION",
            Self::ForbiddenReference => "POM-FORBIDDEN",
            Self::Artifact => "POM-ARTIFACT",
            Self::Signature => "POM-SIGNATURE",
        }
    }

    /// One-line description of what the category requires.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Metadata => "version, name, description and url must be set",
            Self::EffectivePom => "the effective POM must be generated and parseable",
            Self::Section => "license, developer, SCM and distribution sections must be valid",
            Self::ForbiddenReference => "internal references must not appear in the POM",
            Self::Artifact => "packages and SBOMs must be present in the output directory",
            Self::Signature => "every release file needs a detached signature",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckOutcome {
    Pass { detail: String },
    Fail { reason: String },
}

impl CheckOutcome {
    pub fn pass(detail: impl Into<String>) -> Self {
        Self::Pass {
            detail: detail.into(),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass { .. })
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    /// Detail or failure reason.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Pass { detail } => detail,
            Self::Fail { reason } => reason,
        }
    }
}

/// One evaluated check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// POM path relative to the project root
    pub pom: PathBuf,
    pub category: CheckCategory,
    /// What was checked (property, element path, file name, token)
    pub name: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

impl CheckRecord {
    pub fn new(
        pom: impl Into<PathBuf>,
        category: CheckCategory,
        name: impl Into<String>,
        outcome: CheckOutcome,
    ) -> Self {
        Self {
            pom: pom.into(),
            category,
            name: name.into(),
            outcome,
        }
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        self.outcome.is_fail()
    }
}

impl fmt::Display for CheckRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.outcome.is_pass() { "PASS" } else { "FAIL" };
        write!(
            f,
            "{status} [{}] {}: {}: {}",
            self.category,
            self.pom.display(),
            self.name,
            self.outcome.message()
        )
    }
}

/// What happens after a failed check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop the run at the first failure
    #[default]
    FailFast,
    /// Run every check and report all failures
    ContinueOnError,
}

impl FailurePolicy {
    #[must_use]
    pub const fn from_continue_on_error(enabled: bool) -> Self {
        if enabled {
            Self::ContinueOnError
        } else {
            Self::FailFast
        }
    }

    #[must_use]
    pub const fn stops_on_failure(&self) -> bool {
        matches!(self, Self::FailFast)
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub project_root: PathBuf,
    /// POMs the walk started on
    pub poms_checked: usize,
    pub records: Vec<CheckRecord>,
    /// Number of failed records
    pub error_count: usize,
    /// Fail-fast mode ended the walk before every check ran
    pub stopped_early: bool,
    pub policy: FailurePolicy,
}

impl ComplianceReport {
    pub fn new(project_root: impl Into<PathBuf>, policy: FailurePolicy) -> Self {
        Self {
            project_root: project_root.into(),
            poms_checked: 0,
            records: Vec::new(),
            error_count: 0,
            stopped_early: false,
            policy,
        }
    }

    /// Append a record, counting it if it failed.
    pub fn push(&mut self, record: CheckRecord) {
        if record.is_fail() {
            self.error_count += 1;
        }
        self.records.push(record);
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error_count == 0
    }

    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.records.len() - self.error_count
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckRecord> {
        self.records.iter().filter(|r| r.is_fail())
    }

    /// Failed records of one category.
    #[must_use]
    pub fn failures_in(&self, category: CheckCategory) -> Vec<&CheckRecord> {
        self.failures().filter(|r| r.category == category).collect()
    }
}
