//! Pipeline orchestration for a compliance run.
//!
//! validate root → build → discover POMs → check each POM. Fatal problems
//! (invalid root, failed build) are errors; check failures land in the
//! returned [`ComplianceReport`].

mod discover;
mod output;

pub use discover::discover_poms;
pub use output::{should_use_color, write_output, OutputTarget};

use crate::compliance::{CheckListener, ComplianceChecker, ComplianceReport, FailurePolicy};
use crate::config::AppConfig;
use crate::error::Result;
use crate::maven::{verify_project_root, BuildTool};
use std::path::Path;

/// Run every check on the project at `project_root`.
///
/// The build tool is only invoked once the project root is known to hold a
/// `pom.xml`; POMs are only checked after the build succeeded.
pub fn run<T: BuildTool>(
    project_root: &Path,
    config: &AppConfig,
    policy: FailurePolicy,
    tool: T,
    listener: &mut dyn CheckListener,
) -> Result<ComplianceReport> {
    let root_pom = verify_project_root(project_root)?;
    let checker = ComplianceChecker::new(tool, config)?.with_policy(policy);

    tracing::info!("building {} with {}", project_root.display(), checker.tool().name());
    checker.tool().clean_install(&root_pom)?;

    let poms = discover_poms(project_root, &config.artifacts.output_dir)?;
    tracing::info!("found {} POM(s)", poms.len());
    Ok(checker.check_all(project_root, &poms, listener))
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Every check passed
    pub const SUCCESS: i32 = 0;
    /// A check failed, the build failed, or the run could not start
    pub const FAILURE: i32 = 1;
}
