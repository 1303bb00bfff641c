//! Required project properties.

use super::result::CheckOutcome;
use crate::maven::BuildTool;
use crate::model::PomDescriptor;

/// Properties every released POM must define, in check order.
pub const METADATA_EXPRESSIONS: [&str; 4] = [
    "project.version",
    "project.name",
    "project.description",
    "project.url",
];

/// Evaluate `expression` for `pom`; passes on any non-blank value.
pub fn check_property<T: BuildTool + ?Sized>(
    tool: &T,
    pom: &PomDescriptor,
    expression: &str,
) -> CheckOutcome {
    match tool.evaluate(&pom.path, expression) {
        Ok(Some(value)) if !value.trim().is_empty() => CheckOutcome::pass(value),
        Ok(_) => CheckOutcome::fail(format!("{expression} is missing or empty")),
        Err(e) => CheckOutcome::fail(format!("could not evaluate {expression}: {e}")),
    }
}
