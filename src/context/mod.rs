// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository context sourced from the environment.
//!
//! Built once at startup and shared read-only; validators never mutate it.

use crate::error::{CgError, ConfigError, Result};

/// Default API base for github.com.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Read-only configuration for issue-tracker queries.
#[derive(Debug, Clone)]
pub struct RepositoryContext {
    /// Repository identifier in `owner/repo` form.
    pub repository: String,
    /// Tracker credential, sent as a bearer-style token.
    pub token: String,
    /// API base URL, overridable for GitHub Enterprise installs.
    pub api_base: String,
}

impl RepositoryContext {
    /// Create a context from explicit values.
    pub fn new(
        repository: impl Into<String>,
        token: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self> {
        let repository = repository.into();
        if !repository.contains('/') {
            return Err(CgError::Config(ConfigError::InvalidRepository {
                value: repository,
            }));
        }

        Ok(Self {
            repository,
            token: token.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build the context from `GITHUB_REPOSITORY`, `GITHUB_TOKEN` and
    /// the optional `GITHUB_API_URL` override.
    ///
    /// Fails fast on a missing variable or a malformed repository
    /// identifier rather than issuing unauthenticated requests later.
    pub fn from_env() -> Result<Self> {
        let repository = require_env("GITHUB_REPOSITORY")?;
        let token = require_env("GITHUB_TOKEN")?;
        let api_base =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self::new(repository, token, api_base)
    }
}

fn require_env(var: &'static str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CgError::Config(ConfigError::MissingEnv { var })),
    }
}
