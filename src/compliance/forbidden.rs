//! Scanning raw POM text for internal references.

use super::result::CheckOutcome;
use crate::config::ForbiddenToken;
use crate::error::{PomCheckError, Result};
use regex::{Regex, RegexBuilder};

/// A compiled [`ForbiddenToken`].
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    token: ForbiddenToken,
    pattern: Regex,
}

impl TokenMatcher {
    /// Compile a token as a literal pattern.
    pub fn new(token: &ForbiddenToken) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(&token.token))
            .case_insensitive(!token.case_sensitive)
            .build()
            .map_err(|e| {
                PomCheckError::config(format!("forbidden token {:?}: {e}", token.token))
            })?;
        Ok(Self {
            token: token.clone(),
            pattern,
        })
    }

    /// Compile every token.
    pub fn compile_all(tokens: &[ForbiddenToken]) -> Result<Vec<Self>> {
        tokens.iter().map(Self::new).collect()
    }

    #[must_use]
    pub const fn token(&self) -> &ForbiddenToken {
        &self.token
    }

    /// 1-based line numbers containing the token.
    #[must_use]
    pub fn matching_lines(&self, text: &str) -> Vec<usize> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| self.pattern.is_match(line))
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Fails if the token occurs anywhere in `text`.
    #[must_use]
    pub fn check(&self, text: &str) -> CheckOutcome {
        let lines = self.matching_lines(text);
        if lines.is_empty() {
            CheckOutcome::pass(format!("no occurrence of {}", self.token.token))
        } else {
            let listed: Vec<String> = lines.iter().map(ToString::to_string).collect();
            CheckOutcome::fail(format!(
                "{} found on line {}",
                self.token.label(),
                listed.join(", ")
            ))
        }
    }
}
