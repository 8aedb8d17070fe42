// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cg application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use thiserror::Error;

/// The main error type for cg operations.
#[derive(Error, Debug)]
pub enum CgError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Commit parsing errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Issue tracker errors
    #[error("Tracker error: {0}")]
    Tracker(#[from] TrackerError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // One or more commits were rejected by the rules
    #[error("{count} commit(s) failed validation")]
    ChecksFailed { count: usize },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    MissingEnv { var: &'static str },

    #[error("Invalid repository identifier '{value}': expected \"owner/repo\"")]
    InvalidRepository { value: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Commit-message parsing errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,
}

/// Issue-tracker errors.
///
/// A non-success HTTP status is not an error here: the existence check
/// collapses it to `false`. Only failures of the request itself (DNS,
/// timeout, TLS) surface as `Transport`, so that a tracker outage is
/// never mistaken for a missing issue.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Issue tracker request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        TrackerError::Transport(err.to_string())
    }
}

/// Result type alias for cg operations.
pub type Result<T> = std::result::Result<T, CgError>;
