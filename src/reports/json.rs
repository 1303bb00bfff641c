//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::compliance::{CheckRecord, ComplianceReport, FailurePolicy};
use chrono::Utc;
use serde::Serialize;
use std::path::Path;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &ComplianceReport) -> Result<String, ReportError> {
        let document = JsonReport {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now().to_rfc3339(),
            project_root: &report.project_root,
            passed: report.is_success(),
            summary: JsonSummary {
                poms_checked: report.poms_checked,
                checks: report.records.len(),
                passed: report.pass_count(),
                failed: report.error_count,
                stopped_early: report.stopped_early,
                policy: report.policy,
            },
            records: &report.records,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: ToolInfo,
    generated_at: String,
    project_root: &'a Path,
    passed: bool,
    summary: JsonSummary,
    records: &'a [CheckRecord],
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonSummary {
    poms_checked: usize,
    checks: usize,
    passed: usize,
    failed: usize,
    stopped_early: bool,
    policy: FailurePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::{CheckCategory, CheckOutcome};

    #[test]
    fn test_json_report_contents() {
        let mut report = ComplianceReport::new("/work/app", FailurePolicy::ContinueOnError);
        report.poms_checked = 1;
        report.push(CheckRecord::new(
            "pom.xml",
            CheckCategory::Metadata,
            "project.version",
            CheckOutcome::pass("1.0"),
        ));
        report.push(CheckRecord::new(
            "pom.xml",
            CheckCategory::Signature,
            "foo-1.0.jar",
            CheckOutcome::fail("missing signature foo-1.0.jar.asc"),
        ));

        let json = JsonReporter::new().pretty(false).generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tool"]["name"], "pomcheck");
        assert_eq!(value["passed"], false);
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["summary"]["passed"], 1);
        assert_eq!(value["summary"]["policy"], "continue-on-error");
        assert_eq!(value["records"][1]["category"], "signature");
        assert_eq!(value["records"][1]["status"], "fail");
        assert!(chrono::DateTime::parse_from_rfc3339(
            value["generated_at"].as_str().unwrap()
        )
        .is_ok());
    }
}
