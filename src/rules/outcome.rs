// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The uniform result contract every rule returns.

/// Pass/fail outcome of a single rule over one commit.
///
/// `message` is present exactly when the rule failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Whether the commit satisfied the rule.
    pub valid: bool,
    /// Human-readable reason for a failure.
    pub message: Option<String>,
}

impl RuleOutcome {
    /// A passing outcome.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing outcome with the reason to show the committer.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}
