//! Summary report generator for shell output.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::compliance::ComplianceReport;
use crate::compliance::FailurePolicy;
use std::fmt::Write;

/// Apply ANSI color formatting if colored output is enabled.
pub(super) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &ComplianceReport) -> Result<String, ReportError> {
        let mut out = String::new();

        if report.is_success() {
            writeln!(
                out,
                "{} all {} checks passed across {} POM(s)",
                self.color("SUCCESS:", "green"),
                report.records.len(),
                report.poms_checked
            )?;
            return Ok(out);
        }

        writeln!(
            out,
            "{} {} of {} checks failed across {} POM(s)",
            self.color("FAILED:", "red"),
            report.error_count,
            report.records.len(),
            report.poms_checked
        )?;
        writeln!(out, "{}", self.color(&"─".repeat(40), "dim"))?;
        for record in report.failures() {
            writeln!(
                out,
                "  [{}] {}: {}: {}",
                record.category,
                record.pom.display(),
                self.color(&record.name, "bold"),
                record.outcome.message()
            )?;
        }
        if report.stopped_early {
            writeln!(
                out,
                "{}",
                self.color("Stopped at the first failure; rerun with --continue-on-error to see every problem.", "dim")
            )?;
        } else if report.policy == FailurePolicy::ContinueOnError {
            writeln!(out, "Total errors: {}", report.error_count)?;
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
