// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Two rules guard the history: `header-format` checks the first line's
//! shape, `issue-reference` ties the body to a tracked issue.

mod engine;
mod header_format;
mod issue_reference;
mod outcome;
mod validator;

pub use engine::RuleEngine;
pub use header_format::HeaderFormatRule;
pub use issue_reference::{extract, IssueId, IssueReference, IssueReferenceRule, ReferenceLocation};
pub use outcome::RuleOutcome;
pub use validator::{ValidationIssue, ValidationResult};
