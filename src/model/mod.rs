//! Data model for Maven release checks.
//!
//! - [`PomDescriptor`]: one discovered `pom.xml`
//! - [`EffectivePom`]: the flattened descriptor, indexed by element path
//! - [`ArtifactCoordinates`]: packaging/artifactId/version/finalName and the
//!   release files they imply

mod coordinates;
mod effective;
mod pom;

pub use coordinates::{ArtifactCoordinates, ArtifactKind, ExpectedArtifact, AGGREGATOR_PACKAGING};
pub use effective::EffectivePom;
pub use pom::{PomDescriptor, POM_FILE_NAME};
