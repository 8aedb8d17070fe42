// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Issue tracker integration.
//!
//! The rules only need an existence predicate; the trait keeps them
//! testable against fake trackers without any network.

mod github;

pub use github::GitHubTracker;

use crate::error::TrackerError;
use async_trait::async_trait;

/// Existence predicate over tracked issues.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Check whether the numbered issue exists in the tracked repository.
    ///
    /// Returns `Ok(false)` for any non-success tracker response; request
    /// failures (DNS, timeout, TLS) surface as [`TrackerError`].
    async fn exists(&self, issue_id: &str) -> Result<bool, TrackerError>;
}
