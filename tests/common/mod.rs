//! Shared helpers for integration tests: a recording in-memory build tool
//! and on-disk Maven project trees.

#![allow(dead_code)]

use pomcheck::config::{DEFAULT_DEVELOPER_EMAIL, DEFAULT_DISTRIBUTION_URL};
use pomcheck::error::{PomCheckError, Result, ToolErrorKind};
use pomcheck::{AppConfig, BuildTool};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

// ============================================================================
// Fake build tool
// ============================================================================

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CleanInstall(PathBuf),
    Evaluate(PathBuf, String),
    EffectivePom(PathBuf),
}

/// Answers Maven requests from tables and records every call.
#[derive(Debug)]
pub struct FakeBuildTool {
    properties: HashMap<String, String>,
    pom_properties: HashMap<(PathBuf, String), Option<String>>,
    failing_expressions: HashSet<String>,
    effective_xml: String,
    failing_effective: HashSet<PathBuf>,
    install_log: Option<String>,
    calls: RefCell<Vec<Call>>,
}

impl FakeBuildTool {
    /// A tool describing a healthy `foo` 1.0 jar module.
    pub fn healthy() -> Self {
        let properties = [
            ("project.version", "1.0"),
            ("project.name", "Foo"),
            ("project.description", "The foo library"),
            ("project.url", "https://foo.example.org"),
            ("project.packaging", "jar"),
            ("project.artifactId", "foo"),
            ("project.build.finalName", "foo-1.0"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            properties,
            pom_properties: HashMap::new(),
            failing_expressions: HashSet::new(),
            effective_xml: effective_pom_xml(DEFAULT_DEVELOPER_EMAIL, DEFAULT_DISTRIBUTION_URL),
            failing_effective: HashSet::new(),
            install_log: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Make `expression` resolve to nothing for every POM.
    pub fn without(mut self, expression: &str) -> Self {
        self.properties.remove(expression);
        self
    }

    pub fn with_property(mut self, expression: &str, value: &str) -> Self {
        self.properties
            .insert(expression.to_string(), value.to_string());
        self
    }

    /// Override one expression for one POM; `None` resolves to nothing.
    pub fn with_pom_property(mut self, pom: &Path, expression: &str, value: Option<&str>) -> Self {
        self.pom_properties.insert(
            (pom.to_path_buf(), expression.to_string()),
            value.map(str::to_string),
        );
        self
    }

    /// Make evaluating `expression` fail as if Maven exited non-zero.
    pub fn failing_expression(mut self, expression: &str) -> Self {
        self.failing_expressions.insert(expression.to_string());
        self
    }

    pub fn with_effective_xml(mut self, xml: impl Into<String>) -> Self {
        self.effective_xml = xml.into();
        self
    }

    /// Make effective POM generation fail for `pom`.
    pub fn failing_effective_pom(mut self, pom: &Path) -> Self {
        self.failing_effective.insert(pom.to_path_buf());
        self
    }

    /// Make the clean install fail with `log` as its output.
    pub fn failing_install(mut self, log: &str) -> Self {
        self.install_log = Some(log.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn evaluations_for(&self, pom: &Path) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Evaluate(p, expr) if p == pom => Some(expr.clone()),
                _ => None,
            })
            .collect()
    }

    fn failure(&self, context: String) -> PomCheckError {
        PomCheckError::tool(
            context,
            ToolErrorKind::Failed {
                program: "mvn".to_string(),
                status: Some(1),
                stderr: "[ERROR] simulated failure".to_string(),
            },
        )
    }
}

impl BuildTool for FakeBuildTool {
    fn name(&self) -> &str {
        "fake-mvn"
    }

    fn clean_install(&self, root_pom: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::CleanInstall(root_pom.to_path_buf()));
        match &self.install_log {
            Some(log) => Err(PomCheckError::Build {
                command: format!("fake-mvn -f {} clean install", root_pom.display()),
                status: Some(1),
                log: log.clone(),
            }),
            None => Ok(()),
        }
    }

    fn evaluate(&self, pom: &Path, expression: &str) -> Result<Option<String>> {
        self.calls
            .borrow_mut()
            .push(Call::Evaluate(pom.to_path_buf(), expression.to_string()));
        if self.failing_expressions.contains(expression) {
            return Err(self.failure(format!("evaluate {expression}")));
        }
        if let Some(value) = self
            .pom_properties
            .get(&(pom.to_path_buf(), expression.to_string()))
        {
            return Ok(value.clone());
        }
        Ok(self.properties.get(expression).cloned())
    }

    fn effective_pom(&self, pom: &Path, output: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::EffectivePom(pom.to_path_buf()));
        let _ = std::fs::remove_file(output);
        if self.failing_effective.contains(pom) {
            return Err(self.failure(format!("effective-pom {}", pom.display())));
        }
        std::fs::write(output, &self.effective_xml).map_err(|e| PomCheckError::io(output, e))
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Effective POM with every section filled in.
pub fn effective_pom_xml(email: &str, distribution_url: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.example</groupId>
  <artifactId>foo</artifactId>
  <version>1.0</version>
  <licenses>
    <license>
      <name>Apache-2.0</name>
      <url>https://www.apache.org/licenses/LICENSE-2.0.txt</url>
    </license>
  </licenses>
  <developers>
    <developer>
      <name>Release Team</name>
      <email>{email}</email>
    </developer>
  </developers>
  <scm>
    <url>https://github.com/example/foo</url>
  </scm>
  <distributionManagement>
    <repository>
      <id>release</id>
      <url>{distribution_url}</url>
    </repository>
  </distributionManagement>
</project>
"#
    )
}

/// Raw POM without internal references.
pub const CLEAN_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.example</groupId>
  <artifactId>foo</artifactId>
  <version>1.0</version>
  <name>Foo</name>
</project>
"#;

/// Release files of the healthy `foo` 1.0 module.
pub const RELEASE_FILES: [&str; 5] = [
    "foo-1.0.jar",
    "foo-1.0-sources.jar",
    "foo-1.0-javadoc.jar",
    "foo-1.0-bom.json",
    "foo-1.0-bom.xml",
];

// ============================================================================
// Project trees
// ============================================================================

/// Write a module with `pom_text` and fully signed release files.
pub fn write_module(dir: &Path, pom_text: &str) {
    let target = dir.join("target");
    std::fs::create_dir_all(&target).expect("create target dir");
    std::fs::write(dir.join("pom.xml"), pom_text).expect("write pom");
    for name in RELEASE_FILES {
        std::fs::write(target.join(name), b"artifact").expect("write artifact");
        std::fs::write(target.join(format!("{name}.asc")), b"sig").expect("write signature");
    }
    // Never signed.
    std::fs::write(target.join("original-foo-1.0.jar"), b"pre-shade").expect("write original");
    std::fs::write(target.join("build.log"), b"log").expect("write log");
}

/// Configuration whose effective POM lands in `scratch`.
pub fn config_in(scratch: &Path) -> AppConfig {
    AppConfig::builder()
        .effective_pom_path(scratch.join("effective-pom.xml"))
        .build()
}
