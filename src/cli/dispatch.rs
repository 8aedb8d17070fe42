// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::sync::Arc;

use crate::context::RepositoryContext;
use crate::error::{CgError, Result};
use crate::rules::RuleEngine;
use crate::tracker::GitHubTracker;

use super::args::{CheckArgs, Cli, Commands};

/// Run the CLI with the given arguments.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, args).await,
        Commands::Version => run_version(),
    }
}

/// Run the check command.
async fn run_check(cli: &Cli, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    // Tracker credentials are read once, up front; a missing variable
    // fails here rather than mid-validation.
    let context = RepositoryContext::from_env()?;
    let tracker = GitHubTracker::new(context)?;
    let engine = RuleEngine::new(Arc::new(tracker));

    let results = if let Some(ref message) = args.message {
        vec![engine.validate_string(message).await?]
    } else if let Some(ref path) = args.file {
        let message = std::fs::read_to_string(path)?;
        vec![engine.validate_string(&message).await?]
    } else if args.range || args.target.contains("..") {
        engine.check_range(&args.target).await?
    } else {
        vec![engine.check_commit(&args.target).await?]
    };

    // Output results
    let mut failed = 0;
    for result in &results {
        if !result.is_valid() {
            failed += 1;
        }
        result.print(cli.format);
    }

    if failed > 0 {
        Err(CgError::ChecksFailed { count: failed })
    } else {
        Ok(())
    }
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cg {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
