//! Maven integration: the [`BuildTool`] seam, its command-line
//! implementation, and the pre-flight checks that run before any build.

mod cli;
pub mod preflight;
mod traits;

pub use cli::{normalize_evaluated, MavenCli};
pub use preflight::{missing_tools, verify_project_root, verify_tools};
pub use traits::BuildTool;
