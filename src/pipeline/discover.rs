//! POM discovery under the project root.

use crate::error::{PomCheckError, Result};
use crate::model::{PomDescriptor, POM_FILE_NAME};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Version-control metadata directories never holding modules.
const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn", ".bzr"];

/// Every `pom.xml` under `root`.
///
/// Within a directory files come before sub-directories, each sorted by
/// name, so the top-level POM is first. Directories named `output_dir` and
/// version-control metadata directories are not descended.
pub fn discover_poms(root: &Path, output_dir: &str) -> Result<Vec<PomDescriptor>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry, output_dir));

    let mut poms = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            PomCheckError::io(path, std::io::Error::from(e))
        })?;
        if entry.file_type().is_file() && entry.file_name() == POM_FILE_NAME {
            tracing::debug!("discovered {}", entry.path().display());
            poms.push(PomDescriptor::new(root, entry.path()));
        }
    }
    Ok(poms)
}

fn is_skipped_dir(entry: &DirEntry, output_dir: &str) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    let skipped = name == output_dir || VCS_DIRS.contains(&&*name);
    if skipped {
        tracing::debug!("skipping {}", entry.path().display());
    }
    skipped
}
