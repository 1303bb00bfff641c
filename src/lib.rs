//! **Release-readiness checks for Maven projects.**
//!
//! `pomcheck` builds a Maven project, walks every `pom.xml` under it and
//! verifies what a public release needs: project metadata, licence,
//! developer, SCM and distribution sections, absence of internal
//! references, the expected packages and SBOMs, and a detached signature
//! for every release file.
//!
//! ## Core Concepts & Modules
//!
//! - **[`maven`]**: the [`BuildTool`] trait and its command-line
//!   implementation [`MavenCli`], plus pre-flight checks.
//! - **[`model`]**: [`PomDescriptor`], the parsed [`EffectivePom`] and
//!   [`ArtifactCoordinates`].
//! - **[`compliance`]**: the [`ComplianceChecker`] and the
//!   [`ComplianceReport`] it fills. A failed check is a value, not an error;
//!   the [`FailurePolicy`] decides whether the run stops.
//! - **[`pipeline`]**: root validation, build, POM discovery and checking in
//!   one call.
//! - **[`reports`]**: summary, JSON and SARIF output, and the live console
//!   listener.
//! - **[`config`]**: the YAML configuration file and its defaults.
//!
//! ## Running a check
//!
//! ```no_run
//! use std::path::Path;
//! use pomcheck::{pipeline, AppConfig, FailurePolicy, MavenCli, NullListener};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let maven = MavenCli::new(&config.maven);
//!     let report = pipeline::run(
//!         Path::new("path/to/project"),
//!         &config,
//!         FailurePolicy::ContinueOnError,
//!         maven,
//!         &mut NullListener,
//!     )?;
//!
//!     for failure in report.failures() {
//!         println!("{failure}");
//!     }
//!     println!("{} error(s)", report.error_count);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod compliance;
pub mod config;
pub mod error;
pub mod maven;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use compliance::{
    CheckCategory, CheckListener, CheckOutcome, CheckRecord, ComplianceChecker, ComplianceReport,
    FailurePolicy, NullListener,
};
pub use config::{AppConfig, AppConfigBuilder, CheckConfig, ConfigError, Validatable};
pub use error::{ErrorContext, PomCheckError, Result};
pub use maven::{BuildTool, MavenCli};
pub use model::{ArtifactCoordinates, EffectivePom, PomDescriptor};
pub use reports::{ReportFormat, ReportGenerator};
