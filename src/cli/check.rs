//! Check command handler.
//!
//! Validates configuration, verifies tools, runs the pipeline against Maven
//! and writes the final report.

use crate::compliance::{ComplianceReport, FailurePolicy};
use crate::config::{CheckConfig, Validatable};
use crate::maven::{verify_tools, MavenCli};
use crate::pipeline::{self, exit_codes, should_use_color, write_output, OutputTarget};
use crate::reports::{reporter_for, ConsoleListener, ReportFormat};
use anyhow::{bail, Result};

/// Run the full check and return the process exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_check(config: CheckConfig) -> Result<i32> {
    let problems = config.app.validate();
    if !problems.is_empty() {
        let listed: Vec<String> = problems.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", listed.join("\n  "));
    }

    verify_tools(&config.app.maven.all_required_tools())?;

    let target = OutputTarget::from_option(config.output_file.clone());
    let colored = should_use_color(config.no_color) && OutputTarget::Stdout.is_terminal();
    let mut listener = ConsoleListener::new()
        .quiet(config.quiet)
        .stderr_only(config.format.is_machine_readable() && target == OutputTarget::Stdout)
        .colored(colored);
    let policy = FailurePolicy::from_continue_on_error(config.app.behavior.continue_on_error);
    tracing::debug!("failure policy: {policy:?}");

    let tool = MavenCli::new(&config.app.maven);
    let report = match pipeline::run(&config.project_root, &config.app, policy, tool, &mut listener)
    {
        Ok(report) => report,
        Err(e) => {
            if let Some(log) = e.build_log() {
                eprintln!("{log}");
            }
            return Err(e.into());
        }
    };

    write_report(&report, config.format, &target, colored)?;
    Ok(exit_code(&report))
}

/// Exit code for a finished run.
#[must_use]
pub fn exit_code(report: &ComplianceReport) -> i32 {
    if report.is_success() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    }
}

fn write_report(
    report: &ComplianceReport,
    format: ReportFormat,
    target: &OutputTarget,
    colored: bool,
) -> Result<()> {
    let reporter = reporter_for(format, colored);

    match (format, target) {
        // A failing summary on the terminal belongs with the FAIL lines.
        (ReportFormat::Summary, OutputTarget::Stdout) if !report.is_success() => {
            reporter.write_report(report, &mut std::io::stderr())?;
        }
        (_, OutputTarget::Stdout) => write_output(&reporter.generate(report)?, target)?,
        (_, OutputTarget::File(_)) => {
            write_output(&reporter.generate(report)?, target)?;
            eprintln!("{}", status_line(report));
        }
    }
    Ok(())
}

/// One-line outcome for stderr when the report itself goes elsewhere.
#[must_use]
pub fn status_line(report: &ComplianceReport) -> String {
    if report.is_success() {
        format!(
            "SUCCESS: {} checks passed across {} POM(s)",
            report.records.len(),
            report.poms_checked
        )
    } else {
        format!(
            "FAILED: {} error(s) across {} POM(s)",
            report.error_count, report.poms_checked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::{CheckCategory, CheckOutcome, CheckRecord};
    use crate::config::AppConfig;

    fn report_with(outcomes: Vec<CheckOutcome>) -> ComplianceReport {
        let mut report = ComplianceReport::new("/p", FailurePolicy::ContinueOnError);
        report.poms_checked = 1;
        for outcome in outcomes {
            report.push(CheckRecord::new(
                "pom.xml",
                CheckCategory::Section,
                "scm/url",
                outcome,
            ));
        }
        report
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&report_with(vec![CheckOutcome::pass("x")])), 0);
        assert_eq!(exit_code(&report_with(vec![CheckOutcome::fail("x")])), 1);
    }

    #[test]
    fn test_status_line() {
        let failed = report_with(vec![
            CheckOutcome::fail("a"),
            CheckOutcome::fail("b"),
            CheckOutcome::pass("c"),
        ]);
        assert_eq!(status_line(&failed), "FAILED: 2 error(s) across 1 POM(s)");
        let passed = report_with(vec![CheckOutcome::pass("c")]);
        assert_eq!(status_line(&passed), "SUCCESS: 1 checks passed across 1 POM(s)");
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let app = AppConfig::builder().maven_executable("").build();
        let err = run_check(CheckConfig::new("/nonexistent", app)).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_report_written_to_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("report.json");
        let report = report_with(vec![CheckOutcome::fail("missing")]);
        write_report(
            &report,
            ReportFormat::Json,
            &OutputTarget::File(path.clone()),
            false,
        )
        .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["summary"]["failed"], 1);
    }
}
