//! Expected release files in a module's output directory.

use super::result::CheckOutcome;
use crate::maven::BuildTool;
use crate::model::{ArtifactCoordinates, ExpectedArtifact, PomDescriptor};
use std::path::Path;

/// Expressions resolved to build [`ArtifactCoordinates`].
pub const COORDINATE_EXPRESSIONS: [&str; 4] = [
    "project.packaging",
    "project.artifactId",
    "project.version",
    "project.build.finalName",
];

/// Resolve the coordinates of `pom`.
///
/// On failure returns a message naming every expression that could not be
/// resolved.
pub fn resolve_coordinates<T: BuildTool + ?Sized>(
    tool: &T,
    pom: &PomDescriptor,
) -> std::result::Result<ArtifactCoordinates, String> {
    let mut resolved = Vec::with_capacity(COORDINATE_EXPRESSIONS.len());
    let mut problems = Vec::new();
    for expression in COORDINATE_EXPRESSIONS {
        match tool.evaluate(&pom.path, expression) {
            Ok(Some(value)) if !value.trim().is_empty() => resolved.push(value),
            Ok(_) => problems.push(format!("{expression} is empty")),
            Err(e) => problems.push(format!("{expression}: {e}")),
        }
    }
    if !problems.is_empty() {
        return Err(format!("cannot resolve coordinates: {}", problems.join("; ")));
    }

    let mut values = resolved.into_iter();
    let mut next = || values.next().unwrap_or_default();
    Ok(ArtifactCoordinates {
        packaging: next(),
        artifact_id: next(),
        version: next(),
        final_name: next(),
    })
}

/// Passes if `expected` exists as a regular file in `output_dir`.
#[must_use]
pub fn check_artifact(output_dir: &Path, expected: &ExpectedArtifact) -> CheckOutcome {
    let path = output_dir.join(&expected.file_name);
    if path.is_file() {
        CheckOutcome::pass(format!("{} present", expected.kind.name()))
    } else {
        CheckOutcome::fail(format!(
            "{} not found at {}",
            expected.kind.name(),
            path.display()
        ))
    }
}
