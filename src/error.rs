//! Unified error types for pomcheck.
//!
//! Only conditions that make further checking meaningless are errors here:
//! missing tools, an invalid project root, a failed build, unreadable
//! configuration. A failed compliance check is a value
//! ([`CheckOutcome`](crate::compliance::CheckOutcome)), not an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pomcheck operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PomCheckError {
    /// Required executables could not be launched
    #[error("Required tools not found on PATH: {}", .tools.join(", "))]
    MissingTools { tools: Vec<String> },

    /// The project directory argument is unusable
    #[error("Invalid project root {path:?}: {kind}")]
    ProjectRoot {
        path: PathBuf,
        kind: ProjectRootErrorKind,
    },

    /// The full project build failed; `log` holds the captured output
    #[error("Build failed ({command}) with {}", describe_status(.status))]
    Build {
        command: String,
        status: Option<i32>,
        log: String,
    },

    /// An external tool invocation failed
    #[error("Tool invocation failed: {context}")]
    Tool {
        context: String,
        #[source]
        source: ToolErrorKind,
    },

    /// A POM or effective POM could not be parsed
    #[error("Failed to parse XML: {context}: {message}")]
    Xml { context: String, message: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Report generation errors
    #[error("Report generation failed: {0}")]
    Report(String),
}

/// Why a project root was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProjectRootErrorKind {
    #[error("directory does not exist")]
    NotFound,

    #[error("not a directory")]
    NotADirectory,

    #[error("no top-level pom.xml")]
    MissingPom,
}

/// Specific tool failure kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ToolErrorKind {
    #[error("could not launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {}: {stderr}", describe_status(.status))]
    Failed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("`{program}` produced no output file at {path:?}")]
    MissingOutput { program: String, path: PathBuf },
}

fn describe_status(status: &Option<i32>) -> String {
    status.map_or_else(
        || "no exit code (terminated by signal)".to_string(),
        |code| format!("exit code {code}"),
    )
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for pomcheck operations
pub type Result<T> = std::result::Result<T, PomCheckError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PomCheckError {
    /// Create a project root error
    pub fn project_root(path: impl Into<PathBuf>, kind: ProjectRootErrorKind) -> Self {
        Self::ProjectRoot {
            path: path.into(),
            kind,
        }
    }

    /// Create a tool error with context
    pub fn tool(context: impl Into<String>, source: ToolErrorKind) -> Self {
        Self::Tool {
            context: context.into(),
            source,
        }
    }

    /// Create an XML error with context
    pub fn xml(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Xml {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }

    /// The captured build log, if this is a build failure
    pub fn build_log(&self) -> Option<&str> {
        match self {
            Self::Build { log, .. } => Some(log),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for PomCheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PomCheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(format!("JSON serialization: {err}"))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, so a
/// chain like `"checking module-a: reading pom: <io error>"` shows the path
/// through the code.
///
/// ```ignore
/// use pomcheck::error::ErrorContext;
///
/// let raw = std::fs::read_to_string(&pom)
///     .with_context(|| format!("reading {}", pom.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PomCheckError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: PomCheckError, new_ctx: &str) -> PomCheckError {
    match err {
        PomCheckError::Tool {
            context: existing,
            source,
        } => PomCheckError::Tool {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PomCheckError::Xml {
            context: existing,
            message,
        } => PomCheckError::Xml {
            context: chain_context(new_ctx, &existing),
            message,
        },
        PomCheckError::Io {
            path,
            message,
            source,
        } => PomCheckError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PomCheckError::Config(msg) => PomCheckError::Config(chain_context(new_ctx, &msg)),
        PomCheckError::Report(msg) => PomCheckError::Report(chain_context(new_ctx, &msg)),
        // Structured variants already say everything they know.
        other => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
