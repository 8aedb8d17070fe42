// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::error::{CgError, CommitError, Result};

/// A commit message split into its two structural parts.
///
/// The header is the first line; the body is everything after it, with
/// the conventional blank separator stripped. A body made entirely of
/// whitespace counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line of the message.
    pub header: String,
    /// Remainder of the message, if any.
    pub body: Option<String>,
}

impl CommitMessage {
    /// Create a commit message from its parts.
    pub fn new(header: impl Into<String>, body: Option<String>) -> Self {
        Self {
            header: header.into(),
            body: body.filter(|b| !b.trim().is_empty()),
        }
    }

    /// Parse a raw commit message into header and body.
    pub fn parse(message: &str) -> Result<Self> {
        let message = message.trim_end();

        if message.trim().is_empty() {
            return Err(CgError::Commit(CommitError::EmptyMessage));
        }

        let mut lines = message.lines();
        let header = lines.next().unwrap_or("").to_string();
        let body = lines.collect::<Vec<_>>().join("\n");
        let body = body.trim_start_matches('\n');

        Ok(Self {
            header,
            body: if body.trim().is_empty() {
                None
            } else {
                Some(body.to_string())
            },
        })
    }

    /// Format the commit message back into a single string.
    pub fn format(&self) -> String {
        match &self.body {
            Some(body) => format!("{}\n\n{}", self.header, body),
            None => self.header.clone(),
        }
    }
}
