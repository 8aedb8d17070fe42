// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Issue reference rule: extraction plus tracker-backed validation.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::commit::CommitMessage;
use crate::error::TrackerError;
use crate::tracker::IssueTracker;

use super::outcome::RuleOutcome;

lazy_static! {
    /// Header reference: "Issue #<digits>:" at the very start.
    static ref HEADER_REFERENCE: Regex = Regex::new(r"^Issue #(\d+):").unwrap();

    /// Body reference: first "Issue #<digits>" or the "Issue #nil" opt-out.
    static ref BODY_REFERENCE: Regex = Regex::new(r"Issue #(\d+|nil)").unwrap();
}

const MISSING_REFERENCE_MESSAGE: &str =
    r#"Body must contain "Issue #nil" or "Issue #xxx" (with a valid issue number)"#;

/// Where a reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceLocation {
    Header,
    Body,
}

/// An extracted issue identifier.
///
/// `Nil` is an explicit "no tracked issue" opt-out, distinct from no
/// reference being found at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueId {
    Number(String),
    Nil,
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueId::Number(n) => write!(f, "{n}"),
            IssueId::Nil => write!(f, "nil"),
        }
    }
}

/// A single issue reference extracted from a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReference {
    pub location: ReferenceLocation,
    pub id: IssueId,
}

/// Extract the first issue reference from a commit message.
///
/// Attempts are ordered: the header pattern wins over the body pattern,
/// so a header reference always yields `location: Header`. Returns
/// `None` when neither location carries a reference.
pub fn extract(header: &str, body: Option<&str>) -> Option<IssueReference> {
    let attempts: [(ReferenceLocation, &Regex, Option<&str>); 2] = [
        (ReferenceLocation::Header, &*HEADER_REFERENCE, Some(header)),
        (ReferenceLocation::Body, &*BODY_REFERENCE, body),
    ];

    attempts.into_iter().find_map(|(location, pattern, text)| {
        let raw = pattern.captures(text?)?.get(1)?.as_str();
        let id = if raw == "nil" {
            IssueId::Nil
        } else {
            IssueId::Number(raw.to_string())
        };
        Some(IssueReference { location, id })
    })
}

/// Validates that a commit body cites a tracked issue.
///
/// When the header names an issue, the body must restate it, so header
/// and body cannot drift to different issues. Numbered references are
/// checked against the tracker; `Issue #nil` passes without a lookup.
pub struct IssueReferenceRule {
    tracker: Arc<dyn IssueTracker>,
}

impl IssueReferenceRule {
    /// Create the rule with the tracker to verify numbered issues against.
    pub fn new(tracker: Arc<dyn IssueTracker>) -> Self {
        Self { tracker }
    }

    /// Run the rule over one commit.
    ///
    /// A transport failure propagates as an error instead of a failing
    /// outcome: a tracker outage must not reject commits as "issue does
    /// not exist".
    pub async fn validate(&self, commit: &CommitMessage) -> Result<RuleOutcome, TrackerError> {
        let body = match commit.body.as_deref().filter(|b| !b.trim().is_empty()) {
            Some(body) => body,
            None => return Ok(RuleOutcome::fail("Commit body is required")),
        };

        match extract(&commit.header, Some(body)) {
            Some(reference) => match (reference.location, reference.id) {
                (ReferenceLocation::Header, IssueId::Number(n)) => {
                    let expected = format!("Issue #{n}");
                    if !body.contains(&expected) {
                        return Ok(RuleOutcome::fail(format!(
                            "Body must contain \"{expected}\" when header references Issue #{n}"
                        )));
                    }
                    self.check_exists(&n).await
                }
                (ReferenceLocation::Body, IssueId::Number(n)) => self.check_exists(&n).await,
                // The header pattern only captures digits, so a Nil
                // reference can only come from the body.
                (_, IssueId::Nil) => Ok(RuleOutcome::pass()),
            },
            None => Ok(RuleOutcome::fail(MISSING_REFERENCE_MESSAGE)),
        }
    }

    async fn check_exists(&self, issue_id: &str) -> Result<RuleOutcome, TrackerError> {
        if self.tracker.exists(issue_id).await? {
            Ok(RuleOutcome::pass())
        } else {
            Ok(RuleOutcome::fail(format!(
                "Issue #{issue_id} does not exist in the repository"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Tracker fake: a fixed set of existing issues plus a call counter.
    struct FakeTracker {
        existing: Vec<&'static str>,
        calls: AtomicUsize,
    }

    impl FakeTracker {
        fn with_issues(existing: Vec<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                existing,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl IssueTracker for FakeTracker {
        async fn exists(&self, issue_id: &str) -> Result<bool, TrackerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.existing.contains(&issue_id))
        }
    }

    /// Tracker fake simulating an unreachable tracker.
    struct OutageTracker;

    #[async_trait]
    impl IssueTracker for OutageTracker {
        async fn exists(&self, _issue_id: &str) -> Result<bool, TrackerError> {
            Err(TrackerError::Transport("connection refused".to_string()))
        }
    }

    fn commit(header: &str, body: Option<&str>) -> CommitMessage {
        CommitMessage::new(header, body.map(String::from))
    }

    #[test]
    fn test_extract_header_reference() {
        let reference = extract("Issue #42: fix bug", Some("whatever")).unwrap();
        assert_eq!(reference.location, ReferenceLocation::Header);
        assert_eq!(reference.id, IssueId::Number("42".to_string()));
    }

    #[test]
    fn test_extract_header_wins_over_body() {
        let reference = extract("Issue #42: fix bug", Some("Issue #7")).unwrap();
        assert_eq!(reference.location, ReferenceLocation::Header);
        assert_eq!(reference.id, IssueId::Number("42".to_string()));
    }

    #[test]
    fn test_extract_body_number() {
        let reference = extract("fix: typo", Some("See Issue #7 for details")).unwrap();
        assert_eq!(reference.location, ReferenceLocation::Body);
        assert_eq!(reference.id, IssueId::Number("7".to_string()));
    }

    #[test]
    fn test_extract_body_nil() {
        let reference = extract("fix: typo", Some("Issue #nil")).unwrap();
        assert_eq!(reference.location, ReferenceLocation::Body);
        assert_eq!(reference.id, IssueId::Nil);
    }

    #[test]
    fn test_extract_first_body_occurrence() {
        let reference = extract("fix: typo", Some("Issue #3 then Issue #4")).unwrap();
        assert_eq!(reference.id, IssueId::Number("3".to_string()));
    }

    #[test]
    fn test_extract_none() {
        assert!(extract("fix: typo", Some("no reference here")).is_none());
        assert!(extract("fix: typo", None).is_none());
    }

    #[test]
    fn test_extract_issue_mid_header_is_not_a_header_reference() {
        // "Issue #" not at the start of the header is ignored; only the
        // body is scanned for loose references.
        let reference = extract("fix: see Issue #9: later", Some("Issue #nil")).unwrap();
        assert_eq!(reference.location, ReferenceLocation::Body);
        assert_eq!(reference.id, IssueId::Nil);
    }

    #[tokio::test]
    async fn test_missing_body_fails_first() {
        let tracker = FakeTracker::with_issues(vec!["42"]);
        let rule = IssueReferenceRule::new(tracker.clone());

        let outcome = rule
            .validate(&commit("Issue #42: fix bug", None))
            .await
            .unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.message.as_deref(), Some("Commit body is required"));
        assert_eq!(tracker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_header_reference_restated_in_body_passes() {
        let tracker = FakeTracker::with_issues(vec!["42"]);
        let rule = IssueReferenceRule::new(tracker.clone());

        let outcome = rule
            .validate(&commit(
                "Issue #42: fix bug",
                Some("See Issue #42 for context"),
            ))
            .await
            .unwrap();
        assert!(outcome.valid);
        assert_eq!(tracker.call_count(), 1);
    }

    #[tokio::test]
    async fn test_header_reference_missing_from_body_fails_without_lookup() {
        let tracker = FakeTracker::with_issues(vec!["42"]);
        let rule = IssueReferenceRule::new(tracker.clone());

        let outcome = rule
            .validate(&commit("Issue #42: fix bug", Some("no mention")))
            .await
            .unwrap();
        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some(r#"Body must contain "Issue #42" when header references Issue #42"#)
        );
        assert_eq!(tracker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_header_reference_unknown_issue_fails() {
        let tracker = FakeTracker::with_issues(vec![]);
        let rule = IssueReferenceRule::new(tracker);

        let outcome = rule
            .validate(&commit("Issue #42: fix bug", Some("Issue #42")))
            .await
            .unwrap();
        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Issue #42 does not exist in the repository")
        );
    }

    #[tokio::test]
    async fn test_nil_reference_passes_without_lookup() {
        let tracker = FakeTracker::with_issues(vec![]);
        let rule = IssueReferenceRule::new(tracker.clone());

        let outcome = rule
            .validate(&commit("fix: typo", Some("Issue #nil")))
            .await
            .unwrap();
        assert!(outcome.valid);
        assert_eq!(tracker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_body_reference_existing_issue_passes() {
        let tracker = FakeTracker::with_issues(vec!["7"]);
        let rule = IssueReferenceRule::new(tracker);

        let outcome = rule
            .validate(&commit("fix: typo", Some("Refs Issue #7")))
            .await
            .unwrap();
        assert!(outcome.valid);
    }

    #[tokio::test]
    async fn test_body_reference_unknown_issue_fails() {
        let tracker = FakeTracker::with_issues(vec![]);
        let rule = IssueReferenceRule::new(tracker);

        let outcome = rule
            .validate(&commit("fix: typo", Some("Issue #999")))
            .await
            .unwrap();
        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Issue #999 does not exist in the repository")
        );
    }

    #[tokio::test]
    async fn test_no_reference_fails() {
        let tracker = FakeTracker::with_issues(vec![]);
        let rule = IssueReferenceRule::new(tracker.clone());

        let outcome = rule
            .validate(&commit("fix: typo", Some("just some prose")))
            .await
            .unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.message.as_deref(), Some(MISSING_REFERENCE_MESSAGE));
        assert_eq!(tracker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_tracker_outage_propagates_as_error() {
        // An unreachable tracker must abort the check, not report the
        // issue as missing.
        let rule = IssueReferenceRule::new(Arc::new(OutageTracker));

        let result = rule
            .validate(&commit("fix: typo", Some("Refs Issue #7")))
            .await;
        assert!(matches!(result, Err(TrackerError::Transport(_))));
    }

    #[tokio::test]
    async fn test_tracker_outage_on_header_path_propagates_as_error() {
        let rule = IssueReferenceRule::new(Arc::new(OutageTracker));

        let result = rule
            .validate(&commit("Issue #42: fix bug", Some("Issue #42")))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_nil_reference_unaffected_by_tracker_outage() {
        let rule = IssueReferenceRule::new(Arc::new(OutageTracker));

        let outcome = rule
            .validate(&commit("fix: typo", Some("Issue #nil")))
            .await
            .unwrap();
        assert!(outcome.valid);
    }

    #[tokio::test]
    async fn test_idempotent_for_unchanged_tracker() {
        let tracker = FakeTracker::with_issues(vec!["42"]);
        let rule = IssueReferenceRule::new(tracker);
        let msg = commit("Issue #42: fix bug", Some("Issue #42"));

        let first = rule.validate(&msg).await.unwrap();
        let second = rule.validate(&msg).await.unwrap();
        assert_eq!(first, second);
    }
}
