//! SARIF report generator.
//!
//! One rule per [`CheckCategory`]; one result per failed check, located at
//! the POM it belongs to.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::compliance::{CheckCategory, CheckRecord, ComplianceReport};
use serde::Serialize;

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// SARIF reporter for CI/CD integration
pub struct SarifReporter {
    /// Also emit passed checks as `note` results
    include_passed: bool,
}

impl SarifReporter {
    /// Create a new SARIF reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_passed: false,
        }
    }

    /// Include passed checks as notes
    #[must_use]
    pub const fn include_passed(mut self, include: bool) -> Self {
        self.include_passed = include;
        self
    }
}

impl Default for SarifReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SarifReporter {
    fn generate(&self, report: &ComplianceReport) -> Result<String, ReportError> {
        let results = report
            .records
            .iter()
            .filter(|r| self.include_passed || r.is_fail())
            .map(record_to_result)
            .collect();

        let sarif = SarifReport {
            schema: SARIF_SCHEMA.to_string(),
            version: "2.1.0".to_string(),
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: env!("CARGO_PKG_NAME").to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                        information_uri: Some(env!("CARGO_PKG_REPOSITORY"))
                            .filter(|uri| !uri.is_empty())
                            .map(String::from),
                        rules: sarif_rules(),
                    },
                },
                results,
            }],
        };

        serde_json::to_string_pretty(&sarif)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Sarif
    }
}

fn sarif_rules() -> Vec<SarifRule> {
    CheckCategory::ALL
        .iter()
        .map(|category| SarifRule {
            id: category.rule_id().to_string(),
            name: category.name().to_string(),
            short_description: SarifMessage {
                text: category.description().to_string(),
            },
            default_configuration: SarifConfiguration {
                level: SarifLevel::Error,
            },
        })
        .collect()
}

fn record_to_result(record: &CheckRecord) -> SarifResult {
    let level = if record.is_fail() {
        SarifLevel::Error
    } else {
        SarifLevel::Note
    };
    SarifResult {
        rule_id: record.category.rule_id().to_string(),
        level,
        message: SarifMessage {
            text: format!("{}: {}", record.name, record.outcome.message()),
        },
        locations: vec![SarifLocation {
            physical_location: Some(SarifPhysicalLocation {
                artifact_location: SarifArtifactLocation {
                    uri: record.pom.to_string_lossy().replace('\\', "/"),
                },
            }),
        }],
    }
}

// SARIF structures

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    information_uri: Option<String>,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    name: String,
    short_description: SarifMessage,
    default_configuration: SarifConfiguration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifConfiguration {
    level: SarifLevel,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: SarifLevel,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: Option<SarifPhysicalLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum SarifLevel {
    Note,
    Error,
}
