//! Detached signature checks.
//!
//! Every regular file directly inside the output directory is a release
//! file unless it is a signature itself, has an unsigned extension, or its
//! file name starts with the excluded prefix. Each release file needs a
//! sibling `<name>.<signature extension>`.

use super::result::CheckOutcome;
use crate::config::ArtifactConfig;
use crate::error::{PomCheckError, Result};
use std::path::{Path, PathBuf};

/// Which files need signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePolicy {
    signature_extension: String,
    unsigned_extensions: Vec<String>,
    excluded_prefix: String,
}

impl SignaturePolicy {
    #[must_use]
    pub fn new(config: &ArtifactConfig) -> Self {
        Self {
            signature_extension: config.signature_extension.clone(),
            unsigned_extensions: config.unsigned_extensions.clone(),
            excluded_prefix: config.excluded_prefix.clone(),
        }
    }

    /// Whether `path` must carry a signature.
    #[must_use]
    pub fn requires_signature(&self, path: &Path) -> bool {
        // Names that are not valid UTF-8 are compared lossily and still need a signature.
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return true;
        };
        if !self.excluded_prefix.is_empty() && name.starts_with(self.excluded_prefix.as_str()) {
            return false;
        }
        match path.extension().map(|e| e.to_string_lossy()) {
            Some(ext) if ext == self.signature_extension.as_str() => false,
            Some(ext) => !self.unsigned_extensions.iter().any(|u| *u == *ext),
            None => true,
        }
    }

    /// Path of the signature for `path`.
    #[must_use]
    pub fn signature_path(&self, path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(&self.signature_extension);
        PathBuf::from(name)
    }

    /// Release files in `output_dir`, sorted by name.
    ///
    /// A missing directory holds no release files.
    pub fn release_files(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        if !output_dir.is_dir() {
            return Ok(Vec::new());
        }
        let entries =
            std::fs::read_dir(output_dir).map_err(|e| PomCheckError::io(output_dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PomCheckError::io(output_dir, e))?;
            let path = entry.path();
            if path.is_file() && self.requires_signature(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Passes if `path` has its signature beside it.
    #[must_use]
    pub fn check(&self, path: &Path) -> CheckOutcome {
        let signature = self.signature_path(path);
        let name = signature
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if signature.is_file() {
            CheckOutcome::pass(format!("signed by {name}"))
        } else {
            CheckOutcome::fail(format!("missing signature {name}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> SignaturePolicy {
        SignaturePolicy::new(&ArtifactConfig::default())
    }

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_requires_signature() {
        let p = policy();
        assert!(p.requires_signature(Path::new("target/foo-1.0.jar")));
        assert!(p.requires_signature(Path::new("target/foo-1.0-bom.json")));
        assert!(p.requires_signature(Path::new("target/NOTICE")));
        assert!(!p.requires_signature(Path::new("target/foo-1.0.jar.asc")));
        assert!(!p.requires_signature(Path::new("target/build.log")));
        assert!(!p.requires_signature(Path::new("target/notes.txt")));
        assert!(!p.requires_signature(Path::new("target/original-foo-1.0.jar")));
    }

    #[test]
    fn test_prefix_matches_file_name_only() {
        let p = policy();
        assert!(p.requires_signature(Path::new("original/target/foo-1.0.jar")));
        assert!(p.requires_signature(Path::new("target/foo-original.jar")));
    }

    #[test]
    fn test_release_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "foo-1.0.jar",
            "foo-1.0.jar.asc",
            "foo-1.0-bom.xml",
            "original-foo-1.0.jar",
            "surefire.log",
        ] {
            touch(dir.path(), name);
        }
        std::fs::create_dir(dir.path().join("classes")).unwrap();
        touch(&dir.path().join("classes"), "Main.class");

        let files = policy().release_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["foo-1.0-bom.xml", "foo-1.0.jar"]);
    }

    // Linux filesystems accept arbitrary bytes in names.
    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_name_still_needs_signature() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join(OsStr::from_bytes(b"foo-\xff.jar"));
        std::fs::write(&jar, b"x").unwrap();

        let files = policy().release_files(dir.path()).unwrap();
        assert_eq!(files, vec![jar.clone()]);
        assert!(policy().check(&jar).is_fail());

        let original = dir.path().join(OsStr::from_bytes(b"original-\xff.jar"));
        assert!(!policy().requires_signature(&original));
    }

    #[test]
    fn test_missing_output_dir_has_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = policy().release_files(&dir.path().join("target")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_check_signature() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "foo-1.0.jar");
        let jar = dir.path().join("foo-1.0.jar");
        let outcome = policy().check(&jar);
        assert!(outcome.is_fail());
        assert!(outcome.message().contains("foo-1.0.jar.asc"));

        touch(dir.path(), "foo-1.0.jar.asc");
        assert!(policy().check(&jar).is_pass());
    }
}
