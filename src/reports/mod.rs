//! Report generation for compliance runs.
//!
//! Formats for the final [`ComplianceReport`]:
//! - Summary: human-readable status and failure list
//! - JSON: every check record, for programmatic integration
//! - SARIF: CI/CD code-scanning dashboards
//!
//! [`ConsoleListener`] prints the live PASS/FAIL stream while checks run.

mod console;
mod json;
mod sarif;
mod summary;
mod types;

pub use console::ConsoleListener;
pub use json::JsonReporter;
pub use sarif::SarifReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use crate::compliance::ComplianceReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report
    fn generate(&self, report: &ComplianceReport) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        report: &ComplianceReport,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Generator for `format`.
#[must_use]
pub fn reporter_for(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Sarif => Box::new(SarifReporter::new()),
    }
}

impl From<ReportError> for crate::PomCheckError {
    fn from(err: ReportError) -> Self {
        Self::report(err.to_string())
    }
}
