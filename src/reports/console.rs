//! Live PASS/FAIL lines while checks run.

use super::summary::ansi_color;
use crate::compliance::{CheckListener, CheckRecord};
use crate::model::PomDescriptor;
use std::io::Write;

/// Prints each record as it is produced.
///
/// PASS lines go to stdout and FAIL lines to stderr, unless the listener is
/// in stderr-only mode (used when stdout carries a machine-readable report).
pub struct ConsoleListener {
    quiet: bool,
    stderr_only: bool,
    colored: bool,
}

impl ConsoleListener {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quiet: false,
            stderr_only: false,
            colored: true,
        }
    }

    /// Suppress PASS lines and POM headers.
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Send every line to stderr.
    #[must_use]
    pub const fn stderr_only(mut self, stderr_only: bool) -> Self {
        self.stderr_only = stderr_only;
        self
    }

    #[must_use]
    pub const fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Render a record as one console line.
    #[must_use]
    pub fn format_record(&self, record: &CheckRecord) -> String {
        let status = if record.is_fail() {
            ansi_color("FAIL", "red", self.colored)
        } else {
            ansi_color("PASS", "green", self.colored)
        };
        format!(
            "{status} [{}] {}: {}: {}",
            record.category,
            record.pom.display(),
            record.name,
            record.outcome.message()
        )
    }

    fn emit(&self, line: &str, failure: bool) {
        // Console write errors (closed pipe) are ignored.
        if failure || self.stderr_only {
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        } else {
            let _ = writeln!(std::io::stdout().lock(), "{line}");
        }
    }
}

impl Default for ConsoleListener {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckListener for ConsoleListener {
    fn pom_started(&mut self, pom: &PomDescriptor) {
        if !self.quiet {
            let header = ansi_color(&format!("==> {pom}"), "bold", self.colored);
            self.emit(&header, false);
        }
    }

    fn record(&mut self, record: &CheckRecord) {
        if record.is_fail() || !self.quiet {
            self.emit(&self.format_record(record), record.is_fail());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::{CheckCategory, CheckOutcome};

    #[test]
    fn test_format_record_plain() {
        let listener = ConsoleListener::new().colored(false);
        let record = CheckRecord::new(
            "web/pom.xml",
            CheckCategory::Signature,
            "web-2.0.war",
            CheckOutcome::fail("missing signature web-2.0.war.asc"),
        );
        assert_eq!(
            listener.format_record(&record),
            "FAIL [signature] web/pom.xml: web-2.0.war: missing signature web-2.0.war.asc"
        );
    }

    #[test]
    fn test_format_record_colored() {
        let listener = ConsoleListener::new();
        let record = CheckRecord::new(
            "pom.xml",
            CheckCategory::Metadata,
            "project.version",
            CheckOutcome::pass("1.0"),
        );
        assert!(listener.format_record(&record).starts_with("\x1b[32mPASS\x1b[0m"));
    }
}
