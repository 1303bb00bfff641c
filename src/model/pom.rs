//! A discovered `pom.xml` and the paths derived from it.

use crate::error::{PomCheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of a Maven project descriptor.
pub const POM_FILE_NAME: &str = "pom.xml";

/// One Maven project descriptor found under the project root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PomDescriptor {
    /// Path to the `pom.xml` as discovered
    pub path: PathBuf,
    /// Path relative to the project root, used for display
    pub relative_path: PathBuf,
}

impl PomDescriptor {
    /// Describe `path`, displayed relative to `root` when it lies inside it.
    pub fn new(root: &Path, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let relative_path = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        Self {
            path,
            relative_path,
        }
    }

    /// Directory holding the POM.
    #[must_use]
    pub fn module_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Build output directory beside the POM.
    #[must_use]
    pub fn output_dir(&self, dir_name: &str) -> PathBuf {
        self.module_dir().join(dir_name)
    }

    /// Raw text of the POM.
    pub fn read_raw(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| PomCheckError::io(&self.path, e))
    }
}

impl std::fmt::Display for PomDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.relative_path.display())
    }
}
