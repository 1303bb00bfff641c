//! Section checks against the effective POM.

use super::result::CheckOutcome;
use crate::config::PolicyConfig;
use crate::model::EffectivePom;

pub const LICENSE_URL: &str = "licenses/license/url";
pub const DEVELOPER_EMAIL: &str = "developers/developer/email";
pub const SCM_URL: &str = "scm/url";
pub const DISTRIBUTION_URL: &str = "distributionManagement/repository/url";

/// What the values at a path must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// At least one non-blank value
    Any,
    /// At least one value, and every value equal to this one
    Exact(String),
}

/// One element path and its expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRule {
    pub path: &'static str,
    pub expectation: Expectation,
}

impl SectionRule {
    /// Judge the values the effective POM holds at this path.
    #[must_use]
    pub fn evaluate(&self, pom: &EffectivePom) -> CheckOutcome {
        let values = pom.values(self.path);
        match &self.expectation {
            Expectation::Any => match values.iter().find(|v| !v.trim().is_empty()) {
                Some(value) => CheckOutcome::pass(value.clone()),
                None => CheckOutcome::fail(format!("no value at {}", self.path)),
            },
            Expectation::Exact(expected) => {
                if values.is_empty() {
                    return CheckOutcome::fail(format!(
                        "no value at {}, expected {expected}",
                        self.path
                    ));
                }
                let wrong: Vec<&str> = values
                    .iter()
                    .map(String::as_str)
                    .filter(|v| v != expected)
                    .collect();
                if wrong.is_empty() {
                    CheckOutcome::pass(expected.clone())
                } else {
                    CheckOutcome::fail(format!(
                        "expected {expected}, found {}",
                        wrong.join(", ")
                    ))
                }
            }
        }
    }
}

/// The four section rules in check order.
#[must_use]
pub fn section_rules(policy: &PolicyConfig) -> Vec<SectionRule> {
    vec![
        SectionRule {
            path: LICENSE_URL,
            expectation: Expectation::Any,
        },
        SectionRule {
            path: DEVELOPER_EMAIL,
            expectation: Expectation::Exact(policy.developer_email.clone()),
        },
        SectionRule {
            path: SCM_URL,
            expectation: Expectation::Any,
        },
        SectionRule {
            path: DISTRIBUTION_URL,
            expectation: Expectation::Exact(policy.distribution_url.clone()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effective(body: &str) -> EffectivePom {
        EffectivePom::parse(&format!("<project>{body}</project>")).unwrap()
    }

    fn rule(path: &'static str, expectation: Expectation) -> SectionRule {
        SectionRule { path, expectation }
    }

    #[test]
    fn test_any_needs_non_blank_value() {
        let rule = rule(SCM_URL, Expectation::Any);
        assert!(rule
            .evaluate(&effective("<scm><url>https://git.example/x</url></scm>"))
            .is_pass());
        assert!(rule.evaluate(&effective("<scm/>")).is_fail());
        assert!(rule.evaluate(&effective("")).is_fail());
    }

    #[test]
    fn test_exact_requires_every_value() {
        let rule = rule(DEVELOPER_EMAIL, Expectation::Exact("oss@x.example".to_string()));
        let ok = effective(
            "<developers>\
               <developer><email>oss@x.example</email></developer>\
               <developer><email>oss@x.example</email></developer>\
             </developers>",
        );
        assert!(rule.evaluate(&ok).is_pass());

        let mixed = effective(
            "<developers>\
               <developer><email>oss@x.example</email></developer>\
               <developer><email>me@private.example</email></developer>\
             </developers>",
        );
        let outcome = rule.evaluate(&mixed);
        assert!(outcome.is_fail());
        assert!(outcome.message().contains("me@private.example"));
    }

    #[test]
    fn test_exact_fails_when_absent() {
        let rule = rule(DISTRIBUTION_URL, Expectation::Exact("https://repo".to_string()));
        assert!(rule.evaluate(&effective("<name>x</name>")).is_fail());
    }

    #[test]
    fn test_rules_follow_policy() {
        let policy = PolicyConfig::default();
        let rules = section_rules(&policy);
        let paths: Vec<_> = rules.iter().map(|r| r.path).collect();
        assert_eq!(paths, vec![LICENSE_URL, DEVELOPER_EMAIL, SCM_URL, DISTRIBUTION_URL]);
        assert_eq!(
            rules[1].expectation,
            Expectation::Exact(policy.developer_email.clone())
        );
    }
}
