// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Header format rule.

use lazy_static::lazy_static;
use regex::Regex;

use super::outcome::RuleOutcome;

lazy_static! {
    /// Conventional commit prefix: type, optional scope, colon-space,
    /// non-empty description.
    static ref CONVENTIONAL: Regex = Regex::new(
        r"^(build|chore|ci|docs|feat|fix|perf|refactor|revert|style|test)(\(.*\))?: .+"
    )
    .unwrap();

    /// Issue prefix: literal "Issue #", digits, colon-space, description.
    static ref ISSUE_PREFIX: Regex = Regex::new(r"^Issue #\d+: .+").unwrap();
}

const FORMAT_MESSAGE: &str =
    r#"Header must start with a conventional type (e.g., "fix: ") or "Issue #123: ""#;

/// Validates the shape of a commit header.
///
/// Pure and deterministic; never looks at the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderFormatRule;

impl HeaderFormatRule {
    /// Check a commit header against the two accepted prefixes.
    pub fn validate(&self, header: &str) -> RuleOutcome {
        if CONVENTIONAL.is_match(header) || ISSUE_PREFIX.is_match(header) {
            RuleOutcome::pass()
        } else {
            RuleOutcome::fail(FORMAT_MESSAGE)
        }
    }
}
