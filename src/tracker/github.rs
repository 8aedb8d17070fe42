// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub issues API client.

use crate::context::RepositoryContext;
use crate::error::TrackerError;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;

use super::IssueTracker;

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Issue existence checks against the GitHub REST API.
///
/// One unretried request per check; no backoff, no internal timeout.
pub struct GitHubTracker {
    client: Client,
    context: RepositoryContext,
}

impl GitHubTracker {
    /// Create a tracker for the given repository context.
    pub fn new(context: RepositoryContext) -> Result<Self, TrackerError> {
        // GitHub rejects requests without a User-Agent.
        let client = Client::builder()
            .user_agent(concat!("cg/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, context })
    }

    fn issue_url(&self, issue_id: &str) -> String {
        format!(
            "{}/repos/{}/issues/{}",
            self.context.api_base, self.context.repository, issue_id
        )
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn exists(&self, issue_id: &str) -> Result<bool, TrackerError> {
        let url = self.issue_url(issue_id);
        tracing::debug!(issue = issue_id, url = %url, "querying issue tracker");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("token {}", self.context.token))
            .header(ACCEPT, ACCEPT_HEADER)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // 404, auth failures and 5xx all collapse to "not found" for
            // the rules; the status is kept here for debugging outages.
            tracing::debug!(issue = issue_id, %status, "issue lookup returned non-success");
        }

        Ok(status.is_success())
    }
}
