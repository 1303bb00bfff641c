//! Pre-flight checks run before anything is built.
//!
//! Both checks are fatal: without the tools or a project root there is
//! nothing meaningful to validate.
//!
//! Tools are checked by spawning `<tool> --version`. A non-zero exit is
//! accepted (the binary exists); only a launch failure counts as missing.

use crate::error::{PomCheckError, ProjectRootErrorKind, Result};
use crate::model::POM_FILE_NAME;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Names of the tools in `tools` that cannot be launched.
#[must_use]
pub fn missing_tools(tools: &[String]) -> Vec<String> {
    tools
        .iter()
        .filter(|tool| !launches(tool, &["--version"]))
        .cloned()
        .collect()
}

/// Fail unless every tool can be launched.
pub fn verify_tools(tools: &[String]) -> Result<()> {
    let missing = missing_tools(tools);
    if missing.is_empty() {
        tracing::debug!("all required tools found: {}", tools.join(", "));
        Ok(())
    } else {
        Err(PomCheckError::MissingTools { tools: missing })
    }
}

/// Fail unless `dir` is a directory with a top-level `pom.xml`; returns that POM.
pub fn verify_project_root(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        return Err(PomCheckError::project_root(dir, ProjectRootErrorKind::NotFound));
    }
    if !dir.is_dir() {
        return Err(PomCheckError::project_root(
            dir,
            ProjectRootErrorKind::NotADirectory,
        ));
    }
    let pom = dir.join(POM_FILE_NAME);
    if !pom.is_file() {
        return Err(PomCheckError::project_root(dir, ProjectRootErrorKind::MissingPom));
    }
    Ok(pom)
}

/// Attempts to spawn `cmd args...` and returns `true` if the process
/// launched, regardless of exit code.
fn launches(cmd: &str, args: &[&str]) -> bool {
    Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
