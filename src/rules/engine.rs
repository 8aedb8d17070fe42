// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use std::sync::Arc;

use crate::commit::CommitMessage;
use crate::error::Result;
use crate::git;
use crate::tracker::IssueTracker;

use super::header_format::HeaderFormatRule;
use super::issue_reference::IssueReferenceRule;
use super::outcome::RuleOutcome;
use super::validator::{ValidationIssue, ValidationResult};

/// Rule engine running both gate rules over commit messages.
pub struct RuleEngine {
    header_format: HeaderFormatRule,
    issue_reference: IssueReferenceRule,
}

impl RuleEngine {
    /// Create a new rule engine verifying issues against the given tracker.
    pub fn new(tracker: Arc<dyn IssueTracker>) -> Self {
        Self {
            header_format: HeaderFormatRule,
            issue_reference: IssueReferenceRule::new(tracker),
        }
    }

    /// Validate a commit message.
    ///
    /// Rule failures land in the result; only tracker transport
    /// failures abort with an error.
    pub async fn validate(&self, message: &CommitMessage) -> Result<ValidationResult> {
        let mut result = ValidationResult::new(message.format());

        record(
            &mut result,
            "header-format",
            self.header_format.validate(&message.header),
        );
        record(
            &mut result,
            "issue-reference",
            self.issue_reference.validate(message).await?,
        );

        Ok(result)
    }

    /// Validate a commit message string.
    pub async fn validate_string(&self, message: &str) -> Result<ValidationResult> {
        let parsed = CommitMessage::parse(message)?;
        self.validate(&parsed).await
    }

    /// Check a specific commit by reference.
    pub async fn check_commit(&self, reference: &str) -> Result<ValidationResult> {
        let message = git::get_commit_message(reference)?;
        self.validate_string(&message).await
    }

    /// Check a range of commits.
    pub async fn check_range(&self, range: &str) -> Result<Vec<ValidationResult>> {
        let commits = git::get_commit_range(range)?;
        let mut results = Vec::new();

        for (oid, message) in commits {
            let mut result = self.validate_string(&message).await?;
            result.commit_sha = Some(oid);
            results.push(result);
        }

        Ok(results)
    }
}

fn record(result: &mut ValidationResult, code: &str, outcome: RuleOutcome) {
    if !outcome.valid {
        result.errors.push(ValidationIssue {
            code: code.to_string(),
            message: outcome
                .message
                .unwrap_or_else(|| "rule failed without a message".to_string()),
        });
    }
}
