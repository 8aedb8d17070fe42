// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CG - Commit Gatekeeper
//!
//! A CLI tool that validates commit messages before they enter a
//! repository's history.
//!
//! # Rules
//!
//! - **header-format**: the first line must carry a conventional-commit
//!   type (`fix: ...`, `feat(scope): ...`) or an issue prefix
//!   (`Issue #123: ...`)
//! - **issue-reference**: the body must cite a tracked issue
//!   (`Issue #123`) or explicitly opt out (`Issue #nil`); numbered
//!   references are verified against the repository's issue tracker
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cg::context::RepositoryContext;
//! use cg::rules::RuleEngine;
//! use cg::tracker::GitHubTracker;
//!
//! # async fn check() -> cg::Result<()> {
//! let context = RepositoryContext::from_env()?;
//! let tracker = GitHubTracker::new(context)?;
//! let engine = RuleEngine::new(Arc::new(tracker));
//!
//! let result = engine.validate_string("fix: typo\n\nIssue #nil").await?;
//! assert!(result.is_valid());
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod context;
pub mod error;
pub mod git;
pub mod rules;
pub mod tracker;

// Re-exports for convenience
pub use context::RepositoryContext;
pub use error::{CgError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
