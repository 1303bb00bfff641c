//! The per-POM check sequence.

use super::artifacts::{check_artifact, resolve_coordinates};
use super::forbidden::TokenMatcher;
use super::listener::CheckListener;
use super::metadata::{check_property, METADATA_EXPRESSIONS};
use super::result::{CheckCategory, CheckOutcome, CheckRecord, ComplianceReport, FailurePolicy};
use super::sections::{section_rules, SectionRule};
use super::signatures::SignaturePolicy;
use crate::config::AppConfig;
use crate::error::Result;
use crate::maven::BuildTool;
use crate::model::{EffectivePom, PomDescriptor};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

/// Runs the check sequence over discovered POMs.
///
/// Checks run in a fixed order for every POM: metadata, effective POM,
/// sections, forbidden references, artifacts, signatures. Under
/// [`FailurePolicy::FailFast`] the walk ends at the first failed record.
pub struct ComplianceChecker<T: BuildTool> {
    tool: T,
    policy: FailurePolicy,
    effective_pom_path: PathBuf,
    sections: Vec<SectionRule>,
    tokens: Vec<TokenMatcher>,
    output_dir: String,
    signatures: SignaturePolicy,
}

impl<T: BuildTool> ComplianceChecker<T> {
    /// Create a checker from configuration.
    ///
    /// Fails only if a forbidden token cannot be compiled.
    pub fn new(tool: T, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            tool,
            policy: FailurePolicy::from_continue_on_error(config.behavior.continue_on_error),
            effective_pom_path: config.maven.effective_pom_path(),
            sections: section_rules(&config.policy),
            tokens: TokenMatcher::compile_all(&config.policy.forbidden_tokens)?,
            output_dir: config.artifacts.output_dir.clone(),
            signatures: SignaturePolicy::new(&config.artifacts),
        })
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Check every POM in order.
    pub fn check_all(
        &self,
        project_root: &Path,
        poms: &[PomDescriptor],
        listener: &mut dyn CheckListener,
    ) -> ComplianceReport {
        let mut run = Run {
            report: ComplianceReport::new(project_root, self.policy),
            listener,
        };
        for pom in poms {
            tracing::info!("checking {pom}");
            run.report.poms_checked += 1;
            run.listener.pom_started(pom);
            if self.check_pom(pom, &mut run).is_break() {
                run.report.stopped_early = true;
                tracing::debug!("stopping after first failure in {pom}");
                break;
            }
        }
        run.report
    }

    fn check_pom(&self, pom: &PomDescriptor, run: &mut Run<'_>) -> ControlFlow<()> {
        for expression in METADATA_EXPRESSIONS {
            let outcome = check_property(&self.tool, pom, expression);
            run.record(self.policy, pom, CheckCategory::Metadata, expression, outcome)?;
        }

        let effective = match self.load_effective_pom(pom) {
            Ok(effective) => effective,
            Err(e) => {
                let outcome = CheckOutcome::fail(format!("{e}; remaining checks skipped"));
                run.record(self.policy, pom, CheckCategory::EffectivePom, "generation", outcome)?;
                return ControlFlow::Continue(());
            }
        };

        for rule in &self.sections {
            let outcome = rule.evaluate(&effective);
            run.record(self.policy, pom, CheckCategory::Section, rule.path, outcome)?;
        }

        self.check_forbidden(pom, run)?;
        self.check_artifacts(pom, run)?;
        self.check_signatures(pom, run)
    }

    fn load_effective_pom(&self, pom: &PomDescriptor) -> Result<EffectivePom> {
        self.tool.effective_pom(&pom.path, &self.effective_pom_path)?;
        EffectivePom::from_file(&self.effective_pom_path)
    }

    fn check_forbidden(&self, pom: &PomDescriptor, run: &mut Run<'_>) -> ControlFlow<()> {
        let raw = match pom.read_raw() {
            Ok(raw) => raw,
            Err(e) => {
                let outcome = CheckOutcome::fail(e.to_string());
                return run.record(
                    self.policy,
                    pom,
                    CheckCategory::ForbiddenReference,
                    "read POM",
                    outcome,
                );
            }
        };
        for matcher in &self.tokens {
            let outcome = matcher.check(&raw);
            let name = matcher.token().label().to_string();
            run.record(self.policy, pom, CheckCategory::ForbiddenReference, name, outcome)?;
        }
        ControlFlow::Continue(())
    }

    fn check_artifacts(&self, pom: &PomDescriptor, run: &mut Run<'_>) -> ControlFlow<()> {
        let coordinates = match resolve_coordinates(&self.tool, pom) {
            Ok(coordinates) => coordinates,
            Err(reason) => {
                let outcome = CheckOutcome::fail(reason);
                return run.record(self.policy, pom, CheckCategory::Artifact, "coordinates", outcome);
            }
        };
        tracing::debug!(
            "{pom}: packaging={} artifactId={} version={} finalName={}",
            coordinates.packaging,
            coordinates.artifact_id,
            coordinates.version,
            coordinates.final_name
        );
        let output_dir = pom.output_dir(&self.output_dir);
        for expected in coordinates.expected_artifacts() {
            let outcome = check_artifact(&output_dir, &expected);
            run.record(self.policy, pom, CheckCategory::Artifact, expected.file_name, outcome)?;
        }
        ControlFlow::Continue(())
    }

    fn check_signatures(&self, pom: &PomDescriptor, run: &mut Run<'_>) -> ControlFlow<()> {
        let output_dir = pom.output_dir(&self.output_dir);
        let files = match self.signatures.release_files(&output_dir) {
            Ok(files) => files,
            Err(e) => {
                let outcome = CheckOutcome::fail(e.to_string());
                return run.record(
                    self.policy,
                    pom,
                    CheckCategory::Signature,
                    self.output_dir.as_str(),
                    outcome,
                );
            }
        };
        for file in files {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let outcome = self.signatures.check(&file);
            run.record(self.policy, pom, CheckCategory::Signature, name, outcome)?;
        }
        ControlFlow::Continue(())
    }
}

/// State of one walk.
struct Run<'a> {
    report: ComplianceReport,
    listener: &'a mut dyn CheckListener,
}

impl Run<'_> {
    /// Store a record and decide whether the walk goes on.
    fn record(
        &mut self,
        policy: FailurePolicy,
        pom: &PomDescriptor,
        category: CheckCategory,
        name: impl Into<String>,
        outcome: CheckOutcome,
    ) -> ControlFlow<()> {
        let record = CheckRecord::new(&pom.relative_path, category, name, outcome);
        self.listener.record(&record);
        let failed = record.is_fail();
        self.report.push(record);
        if failed && policy.stops_on_failure() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
