// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use console::style;

/// A single failed rule.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Rule name, e.g. "header-format".
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        format!(
            "{} {} {}",
            style("✗").red().bold(),
            style(&self.code).red(),
            self.message
        )
    }
}

/// Result of validating one commit message against all rules.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// The original message.
    pub message: String,
    /// Commit SHA if validating an existing commit.
    pub commit_sha: Option<String>,
    /// Failed rules.
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new validation result.
    pub fn new(message: String) -> Self {
        Self {
            message,
            commit_sha: None,
            errors: Vec::new(),
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        let first_line = self.message.lines().next().unwrap_or("");

        if let Some(ref sha) = self.commit_sha {
            let short_sha = &sha[..7.min(sha.len())];
            println!("{} {} {}", status, style(short_sha).cyan(), first_line);
        } else {
            println!("{} {}", status, first_line);
        }

        for error in &self.errors {
            println!("  {}", error.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "message": self.message,
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "code": e.code,
                    "message": e.message,
                })
            }).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_valid() {
        let result = ValidationResult::new("feat: test\n\nIssue #nil".to_string());
        assert!(result.is_valid());
    }

    #[test]
    fn test_validation_result_with_errors() {
        let mut result = ValidationResult::new("test".to_string());
        result.errors.push(ValidationIssue {
            code: "header-format".to_string(),
            message: "bad header".to_string(),
        });

        assert!(!result.is_valid());
    }

    #[test]
    fn test_validation_issue_format() {
        let issue = ValidationIssue {
            code: "issue-reference".to_string(),
            message: "Commit body is required".to_string(),
        };

        let formatted = issue.format();
        assert!(formatted.contains("issue-reference"));
        assert!(formatted.contains("Commit body is required"));
    }
}
