//! Error types and exit codes for evalcheck
//!
//! Exit codes:
//! - 0: Success (no issues found)
//! - 1: Issues found, or generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Environment error (layout not found, unreadable input)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the evalcheck binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Issues found or generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Environment error - layout or input file missing (3)
    Environment = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during evalcheck operations
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum EvalError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Environment errors (exit code 3)
    #[error("evaluation layout not found under {root:?} (expected rubrics/, benchmarks/a-component/, evaluators/llm-judge/)")]
    LayoutNotFound { root: PathBuf },

    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    // Validation outcome (exit code 1)
    #[error("{count} issue(s) found")]
    IssuesFound { count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl EvalError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            EvalError::UnknownFormat(_) | EvalError::UsageError(_) => ExitCode::Usage,

            // Environment errors
            EvalError::LayoutNotFound { .. } | EvalError::FileNotFound { .. } => {
                ExitCode::Environment
            }

            // Issues found and generic failures
            EvalError::IssuesFound { .. }
            | EvalError::Io(_)
            | EvalError::Yaml(_)
            | EvalError::Json(_)
            | EvalError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            EvalError::UnknownFormat(_) => "unknown_format",
            EvalError::UsageError(_) => "usage_error",
            EvalError::LayoutNotFound { .. } => "layout_not_found",
            EvalError::FileNotFound { .. } => "file_not_found",
            EvalError::IssuesFound { .. } => "issues_found",
            EvalError::Io(_) => "io_error",
            EvalError::Yaml(_) => "yaml_error",
            EvalError::Json(_) => "json_error",
            EvalError::Other(_) => "other",
        }
    }
}

/// Result type alias for evalcheck operations
pub type Result<T> = std::result::Result<T, EvalError>;
