//! [`BuildTool`] backed by the `mvn` executable.
//!
//! Every invocation runs in batch mode (`-B`) against an explicit project
//! file (`-f <pom>`). Arguments are passed directly to the process; no shell
//! is involved.

use super::traits::BuildTool;
use crate::config::MavenConfig;
use crate::error::{PomCheckError, Result, ToolErrorKind};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// What `help:evaluate` prints for an undefined expression.
const UNDEFINED_EXPRESSION: &str = "null object or invalid expression";

/// Maven driven through its command line.
#[derive(Debug, Clone)]
pub struct MavenCli {
    executable: String,
    extra_args: Vec<String>,
    help_plugin: String,
    build_log: PathBuf,
}

impl MavenCli {
    /// Create a driver from configuration.
    #[must_use]
    pub fn new(config: &MavenConfig) -> Self {
        Self {
            executable: config.executable.clone(),
            extra_args: config.extra_args.clone(),
            help_plugin: config.help_plugin.clone(),
            build_log: config.build_log_path(),
        }
    }

    /// Where the clean install output is captured.
    #[must_use]
    pub fn build_log(&self) -> &Path {
        &self.build_log
    }

    fn base_args(&self, pom: &Path) -> Vec<String> {
        let mut args = vec!["-B".to_string()];
        args.extend(self.extra_args.iter().cloned());
        args.push("-f".to_string());
        args.push(pom.display().to_string());
        args
    }

    /// Arguments of the clean install.
    #[must_use]
    pub fn install_args(&self, root_pom: &Path) -> Vec<String> {
        let mut args = self.base_args(root_pom);
        args.extend(["clean", "install", "-DskipTests"].map(String::from));
        args
    }

    /// Arguments of a property evaluation.
    #[must_use]
    pub fn evaluate_args(&self, pom: &Path, expression: &str) -> Vec<String> {
        let mut args = self.base_args(pom);
        args.push("-q".to_string());
        args.push(format!("{}:evaluate", self.help_plugin));
        args.push(format!("-Dexpression={expression}"));
        args.push("-DforceStdout".to_string());
        args
    }

    /// Arguments of the effective POM generation; `-N` keeps it to one module.
    #[must_use]
    pub fn effective_pom_args(&self, pom: &Path, output: &Path) -> Vec<String> {
        let mut args = self.base_args(pom);
        args.push("-q".to_string());
        args.push("-N".to_string());
        args.push(format!("{}:effective-pom", self.help_plugin));
        args.push(format!("-Doutput={}", output.display()));
        args
    }

    fn command_line(&self, args: &[String]) -> String {
        format!("{} {}", self.executable, args.join(" "))
    }

    fn run(&self, args: &[String]) -> Result<Output> {
        tracing::debug!("running {}", self.command_line(args));
        Command::new(&self.executable)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| {
                PomCheckError::tool(
                    self.command_line(args),
                    ToolErrorKind::Spawn {
                        program: self.executable.clone(),
                        source,
                    },
                )
            })
    }

    fn failure(&self, args: &[String], output: &Output) -> PomCheckError {
        // With -q Maven reports errors on stdout.
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout)
        } else {
            stderr
        };
        PomCheckError::tool(
            self.command_line(args),
            ToolErrorKind::Failed {
                program: self.executable.clone(),
                status: output.status.code(),
                stderr: last_lines(&detail, 20),
            },
        )
    }
}

impl BuildTool for MavenCli {
    fn name(&self) -> &str {
        &self.executable
    }

    fn clean_install(&self, root_pom: &Path) -> Result<()> {
        let args = self.install_args(root_pom);
        let command = self.command_line(&args);
        tracing::info!("building: {command}");
        tracing::debug!("build log: {}", self.build_log.display());

        let log = File::create(&self.build_log).map_err(|e| PomCheckError::io(&self.build_log, e))?;
        let log_err = log
            .try_clone()
            .map_err(|e| PomCheckError::io(&self.build_log, e))?;

        let status = Command::new(&self.executable)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(log))
            .stderr(Stdio::from(log_err))
            .status()
            .map_err(|source| {
                PomCheckError::tool(
                    command.clone(),
                    ToolErrorKind::Spawn {
                        program: self.executable.clone(),
                        source,
                    },
                )
            })?;

        if status.success() {
            return Ok(());
        }

        let log = std::fs::read(&self.build_log)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_else(|e| format!("<build log unavailable: {e}>"));
        Err(PomCheckError::Build {
            command,
            status: status.code(),
            log,
        })
    }

    fn evaluate(&self, pom: &Path, expression: &str) -> Result<Option<String>> {
        let args = self.evaluate_args(pom, expression);
        let output = self.run(&args)?;
        if !output.status.success() {
            return Err(self.failure(&args, &output));
        }
        Ok(normalize_evaluated(&String::from_utf8_lossy(&output.stdout)))
    }

    fn effective_pom(&self, pom: &Path, output_path: &Path) -> Result<()> {
        match std::fs::remove_file(output_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(PomCheckError::io(output_path, e)),
        }

        let args = self.effective_pom_args(pom, output_path);
        let output = self.run(&args)?;
        if !output.status.success() {
            return Err(self.failure(&args, &output));
        }
        if !output_path.is_file() {
            return Err(PomCheckError::tool(
                self.command_line(&args),
                ToolErrorKind::MissingOutput {
                    program: self.executable.clone(),
                    path: output_path.to_path_buf(),
                },
            ));
        }
        Ok(())
    }
}

/// Turn `help:evaluate` stdout into a value.
///
/// Blank output, Maven's undefined-expression notice and an unresolved
/// `${...}` placeholder all mean "no value".
#[must_use]
pub fn normalize_evaluated(stdout: &str) -> Option<String> {
    let value = stdout.trim();
    if value.is_empty()
        || value == UNDEFINED_EXPRESSION
        || (value.starts_with("${") && value.ends_with('}'))
    {
        None
    } else {
        Some(value.to_string())
    }
}

fn last_lines(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}
