//! Artifact coordinates and the release files they imply.

use serde::{Deserialize, Serialize};

/// Packaging of a module that only coordinates sub-modules.
pub const AGGREGATOR_PACKAGING: &str = "pom";

/// Coordinates resolved for one POM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactCoordinates {
    /// `project.packaging`
    pub packaging: String,
    /// `project.artifactId`
    pub artifact_id: String,
    /// `project.version`
    pub version: String,
    /// `project.build.finalName`
    pub final_name: String,
}

/// Kind of a release file expected in the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// `{finalName}.jar`
    PrimaryPackage,
    /// `{finalName}-sources.jar`
    Sources,
    /// `{finalName}-javadoc.jar`
    Javadoc,
    /// `{artifactId}-{version}-bom.json`
    SbomJson,
    /// `{artifactId}-{version}-bom.xml`
    SbomXml,
}

impl ArtifactKind {
    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PrimaryPackage => "primary package",
            Self::Sources => "sources bundle",
            Self::Javadoc => "documentation bundle",
            Self::SbomJson => "SBOM (JSON)",
            Self::SbomXml => "SBOM (XML)",
        }
    }
}

/// A file that must exist in the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedArtifact {
    pub kind: ArtifactKind,
    pub file_name: String,
}

impl ArtifactCoordinates {
    /// Whether the module has no build output of its own.
    #[must_use]
    pub fn is_aggregator(&self) -> bool {
        self.packaging == AGGREGATOR_PACKAGING
    }

    /// Files the release must contain, packages first, then SBOMs.
    #[must_use]
    pub fn expected_artifacts(&self) -> Vec<ExpectedArtifact> {
        let mut expected = Vec::with_capacity(5);
        if !self.is_aggregator() {
            let base = &self.final_name;
            expected.push(ExpectedArtifact {
                kind: ArtifactKind::PrimaryPackage,
                file_name: format!("{base}.jar"),
            });
            expected.push(ExpectedArtifact {
                kind: ArtifactKind::Sources,
                file_name: format!("{base}-sources.jar"),
            });
            expected.push(ExpectedArtifact {
                kind: ArtifactKind::Javadoc,
                file_name: format!("{base}-javadoc.jar"),
            });
        }
        let bom = format!("{}-{}-bom", self.artifact_id, self.version);
        expected.push(ExpectedArtifact {
            kind: ArtifactKind::SbomJson,
            file_name: format!("{bom}.json"),
        });
        expected.push(ExpectedArtifact {
            kind: ArtifactKind::SbomXml,
            file_name: format!("{bom}.xml"),
        });
        expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(packaging: &str) -> ArtifactCoordinates {
        ArtifactCoordinates {
            packaging: packaging.to_string(),
            artifact_id: "foo".to_string(),
            version: "1.0".to_string(),
            final_name: "foo-1.0".to_string(),
        }
    }

    fn names(coords: &ArtifactCoordinates) -> Vec<String> {
        coords
            .expected_artifacts()
            .into_iter()
            .map(|a| a.file_name)
            .collect()
    }

    #[test]
    fn test_jar_module_requires_all_five() {
        assert_eq!(
            names(&coords("jar")),
            vec![
                "foo-1.0.jar",
                "foo-1.0-sources.jar",
                "foo-1.0-javadoc.jar",
                "foo-1.0-bom.json",
                "foo-1.0-bom.xml",
            ]
        );
    }

    #[test]
    fn test_aggregator_requires_only_sboms() {
        let aggregator = coords("pom");
        assert!(aggregator.is_aggregator());
        assert_eq!(names(&aggregator), vec!["foo-1.0-bom.json", "foo-1.0-bom.xml"]);
    }

    #[test]
    fn test_sboms_use_artifact_id_not_final_name() {
        let mut c = coords("jar");
        c.final_name = "widget-shaded".to_string();
        let files = names(&c);
        assert!(files.contains(&"widget-shaded.jar".to_string()));
        assert!(files.contains(&"foo-1.0-bom.json".to_string()));
    }
}
