//! The build-tool seam the checker drives.

use crate::error::Result;
use std::path::Path;

/// Operations the checker needs from Maven.
///
/// [`MavenCli`](super::MavenCli) runs the real executable; tests drive the
/// checker with in-memory implementations.
pub trait BuildTool {
    /// Short name for log messages.
    fn name(&self) -> &str;

    /// Full clean install of the project rooted at `root_pom`, tests skipped.
    ///
    /// A non-zero exit returns [`PomCheckError::Build`](crate::PomCheckError::Build)
    /// carrying the captured log.
    fn clean_install(&self, root_pom: &Path) -> Result<()>;

    /// Evaluate a project expression (e.g. `project.version`) for one POM.
    ///
    /// `Ok(None)` means the expression resolved to nothing.
    fn evaluate(&self, pom: &Path, expression: &str) -> Result<Option<String>>;

    /// Write the effective POM of `pom` to `output`, replacing any previous file.
    fn effective_pom(&self, pom: &Path, output: &Path) -> Result<()>;
}

impl<T: BuildTool + ?Sized> BuildTool for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn clean_install(&self, root_pom: &Path) -> Result<()> {
        (**self).clean_install(root_pom)
    }

    fn evaluate(&self, pom: &Path, expression: &str) -> Result<Option<String>> {
        (**self).evaluate(pom, expression)
    }

    fn effective_pom(&self, pom: &Path, output: &Path) -> Result<()> {
        (**self).effective_pom(pom, output)
    }
}
